use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::models::{Event, OutputEnvelope, SourceError};

/// Live runs with fewer events than this get topped up from the curated catalog.
pub const FALLBACK_THRESHOLD: usize = 5;

pub fn assemble(
    per_source: Vec<Vec<Event>>,
    fallback: &[Event],
    source_names: Vec<String>,
    errors: Vec<SourceError>,
    generated_at: DateTime<Utc>,
) -> OutputEnvelope {
    let mut events: Vec<Event> = per_source.into_iter().flatten().collect();

    if events.len() < FALLBACK_THRESHOLD {
        let before = events.len();
        inject_fallback(&mut events, fallback);
        info!(
            live = before,
            added = events.len() - before,
            "added fallback curated events"
        );
    }

    let mut events = dedup_by_id(events);
    sort_chronologically(&mut events);

    OutputEnvelope {
        last_updated: generated_at,
        total_events: events.len(),
        sources: source_names,
        errors,
        events,
    }
}

/// Appends curated events whose lowercased title is not already present.
pub fn inject_fallback(events: &mut Vec<Event>, fallback: &[Event]) {
    let existing: HashSet<String> = events.iter().map(|e| e.title.to_lowercase()).collect();
    events.extend(
        fallback
            .iter()
            .filter(|event| !existing.contains(&event.title.to_lowercase()))
            .cloned(),
    );
}

/// Keeps the first event for each id, preserving order.
pub fn dedup_by_id(events: Vec<Event>) -> Vec<Event> {
    let mut seen = HashSet::new();
    events
        .into_iter()
        .filter(|event| seen.insert(event.id.clone()))
        .collect()
}

/// Ascending by start date; undated events go last in their original order.
pub fn sort_chronologically(events: &mut [Event]) {
    events.sort_by_key(|event| (event.start_date.is_none(), event.start_date));
}
