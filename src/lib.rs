pub mod catalog;
pub mod config;
pub mod merge;
pub mod models;
pub mod scraping;
mod utils;

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

use config::AppConfig;
use models::OutputEnvelope;
use scraping::{base::HttpFetcher, PageFetcher, SOURCES};

/// Scrapes every configured source through `fetcher` and assembles the dataset.
pub fn run_with(
    fetcher: &dyn PageFetcher,
    today: NaiveDate,
    generated_at: DateTime<Utc>,
) -> OutputEnvelope {
    info!(sources = SOURCES.len(), "starting scrape");
    let collected = scraping::collect(fetcher, SOURCES, today);
    let source_names = SOURCES.iter().map(|s| s.name.to_string()).collect();

    merge::assemble(
        collected.per_source,
        catalog::fallback_events(),
        source_names,
        collected.errors,
        generated_at,
    )
}

/// One full run over the live sites, written to `config.output_path`.
pub fn run(config: &AppConfig) -> Result<OutputEnvelope> {
    let tz = config.tz()?;
    let fetcher = HttpFetcher::new(config)?;
    let now = Utc::now();
    let today = now.with_timezone(&tz).date_naive();

    let envelope = run_with(&fetcher, today, now);
    write_envelope(&config.output_path, &envelope)?;
    info!(
        events = envelope.total_events,
        errors = envelope.errors.len(),
        path = %config.output_path.display(),
        "saved events"
    );
    Ok(envelope)
}

pub fn write_envelope(path: &std::path::Path, envelope: &OutputEnvelope) -> Result<()> {
    utils::write_json_atomic(path, envelope)
}
