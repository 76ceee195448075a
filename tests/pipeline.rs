//! End-to-end runs over every configured source with canned pages.

use std::collections::HashMap;
use std::fs;

use anyhow::anyhow;
use chrono::{NaiveDate, TimeZone, Utc};
use moto_scrape_lib::models::OutputEnvelope;
use moto_scrape_lib::scraping::{find_source, PageFetcher, SOURCES};
use moto_scrape_lib::{run_with, write_envelope};
use scraper::Html;
use serde_json::Value;

struct CannedFetcher {
    pages: HashMap<&'static str, String>,
}

impl CannedFetcher {
    fn new(pages: &[(&str, String)]) -> Self {
        let pages = pages
            .iter()
            .map(|(id, html)| {
                let source = find_source(id).expect("configured source");
                (source.url, html.clone())
            })
            .collect();
        Self { pages }
    }
}

impl PageFetcher for CannedFetcher {
    fn fetch(&self, url: &str) -> anyhow::Result<Html> {
        self.pages
            .get(url)
            .map(|body| Html::parse_document(body))
            .ok_or_else(|| anyhow!("operation timed out for {url}"))
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
}

fn run(fetcher: &CannedFetcher) -> OutputEnvelope {
    let generated_at = Utc
        .with_ymd_and_hms(2026, 10, 19, 1, 30, 0)
        .single()
        .expect("valid timestamp");
    run_with(fetcher, today(), generated_at)
}

fn articles(items: &[(&str, &str)]) -> String {
    let body: String = items
        .iter()
        .map(|(title, when)| format!("<article><h2>{title}</h2><p>{when}</p></article>"))
        .collect();
    format!("<html><body>{body}</body></html>")
}

#[test]
fn sparse_run_is_backfilled_and_failures_are_recorded() {
    let fetcher = CannedFetcher::new(&[(
        "docsa",
        articles(&[
            ("Adelaide Hills Run", "7/11/2026"),
            ("Coonalpyn Swap", "8/11/2026"),
            ("Club Social Night", "details to come"),
        ]),
    )]);

    let envelope = run(&fetcher);

    assert_eq!(envelope.sources.len(), SOURCES.len());
    assert_eq!(envelope.errors.len(), SOURCES.len() - 1);
    assert!(envelope.errors.iter().all(|e| e.source != "docsa"));
    assert!(envelope.errors[0].error.contains("timed out"));

    assert_eq!(envelope.total_events, 3 + 13);
    assert_eq!(envelope.events.len(), envelope.total_events);
    assert_eq!(envelope.events[0].start_date, NaiveDate::from_ymd_opt(2026, 2, 14));
    assert_eq!(envelope.events.last().expect("events").title, "Club Social Night");

    let dates: Vec<_> = envelope.events.iter().filter_map(|e| e.start_date).collect();
    assert!(dates.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn healthy_run_dedups_within_a_source_only() {
    let fetcher = CannedFetcher::new(&[
        (
            "docv",
            articles(&[
                ("Phillip Island Ride Day", "5/12/2026"),
                ("Phillip Island Ride Day", "5/12/2026"),
                ("Great Ocean Road Tour", "14 November 2026"),
                ("Ducati Track Day Winton", "January 9, 2027"),
                ("Season Opener 2026", "1/2/2026"),
            ]),
        ),
        (
            "docsa",
            articles(&[
                ("Phillip Island Ride Day", "5/12/2026"),
                ("Adelaide Hills Run", "7/11/2026"),
                ("Club Social Night", "details to come"),
            ]),
        ),
    ]);

    let envelope = run(&fetcher);

    // 4 live docv (one stale dropped) + 3 docsa, then the docv duplicate collapses.
    assert_eq!(envelope.total_events, 6);
    assert!(envelope.events.iter().all(|e| !e.id.starts_with("curated_")));

    let island: Vec<_> = envelope
        .events
        .iter()
        .filter(|e| e.title == "Phillip Island Ride Day")
        .collect();
    assert_eq!(island.len(), 2, "same title on two sites stays distinct");
    assert_ne!(island[0].id, island[1].id);

    let titles: Vec<_> = envelope.events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Adelaide Hills Run",
            "Great Ocean Road Tour",
            "Phillip Island Ride Day",
            "Phillip Island Ride Day",
            "Ducati Track Day Winton",
            "Club Social Night",
        ]
    );
    assert_eq!(envelope.events[2].source_name, "Ducati Owners Club Victoria");
}

#[test]
fn envelope_is_written_as_pretty_json() {
    let fetcher = CannedFetcher::new(&[]);
    let envelope = run(&fetcher);
    assert_eq!(envelope.errors.len(), SOURCES.len());
    assert_eq!(envelope.total_events, 13);

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("assets").join("data").join("events.json");
    write_envelope(&path, &envelope).expect("write envelope");

    let raw = fs::read_to_string(&path).expect("read output");
    let value: Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(value["lastUpdated"], "2026-10-19T01:30:00Z");
    assert_eq!(value["totalEvents"], 13);
    assert_eq!(value["sources"].as_array().expect("sources").len(), SOURCES.len());
    assert_eq!(value["errors"][0]["source"], "motorcyclerallies");
    assert_eq!(value["events"][0]["startDate"], "2026-02-14");
    assert_eq!(value["events"][0]["endDate"], "2026-02-15");
    assert_eq!(value["events"][0]["category"], "rally");

    let keys: Vec<_> = value.as_object().expect("object").keys().cloned().collect();
    assert!(raw.starts_with("{\n  \"lastUpdated\""));
    assert_eq!(keys.len(), 5);
}
