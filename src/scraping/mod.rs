pub mod base;
pub mod bmw_clubs;
pub mod classify;
pub mod dates;
pub mod generic;
pub mod justbikes;
pub mod motorcycle_rallies;
pub mod oldbikemag;
pub mod throwyourlegover;
pub mod vmccnsw;

use chrono::NaiveDate;
use scraper::Html;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::{Event, SourceError};

/// Upper bound on candidate elements handled per document.
pub const MAX_ELEMENTS: usize = 30;

/// Turns a parsed listing page into candidate events.
pub trait EventExtractor: Send + Sync {
    fn extract(&self, document: &Html, source: &Source, today: NaiveDate) -> Vec<Event>;
}

/// Yields a parsed document for a URL, or an error when the page is unavailable.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> anyhow::Result<Html>;
}

/// Why one element or text block did not become an event.
#[derive(Debug, Error)]
pub enum Skip {
    #[error("no title element")]
    MissingTitle,
    #[error("title too short: {0:?}")]
    ShortTitle(String),
    #[error("navigation title: {0:?}")]
    Navigation(String),
    #[error("dated {0}, already past")]
    Stale(NaiveDate),
    #[error("text too short")]
    ShortText,
    #[error("no date in text")]
    Undated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Generic,
    MotorcycleRallies,
    JustBikes,
    OldBikeMag,
    ThrowYourLegOver,
    VmccNsw,
    BmwClubs,
}

#[derive(Clone, Copy, Debug)]
pub struct Source {
    pub id: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    pub strategy: Strategy,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct SourceInfo {
    pub id: String,
    pub name: String,
    pub url: String,
}

const fn source(id: &'static str, name: &'static str, url: &'static str, strategy: Strategy) -> Source {
    Source {
        id,
        name,
        url,
        strategy,
    }
}

pub const SOURCES: &[Source] = &[
    source(
        "motorcyclerallies",
        "Motorcycle Rallies Australia",
        "https://www.motorcycleralliesaustralia.com/",
        Strategy::MotorcycleRallies,
    ),
    source(
        "justbikes",
        "Just Bikes",
        "https://www.justbikes.com.au/events/upcoming",
        Strategy::JustBikes,
    ),
    source(
        "oldbikemag",
        "Old Bike Australasia",
        "https://www.oldbikemag.com.au/october-rally-calendar/",
        Strategy::OldBikeMag,
    ),
    source(
        "throwyourlegover",
        "Throw Your Leg Over",
        "https://www.throwyourlegover.com.au/events",
        Strategy::ThrowYourLegOver,
    ),
    source(
        "vmccnsw",
        "VMCC NSW",
        "https://vmccnsw.org.au/events/",
        Strategy::VmccNsw,
    ),
    source(
        "bmwca",
        "BMW Clubs Australia",
        "https://www.bmwca.au/",
        Strategy::BmwClubs,
    ),
    source(
        "bmwmccwa",
        "BMW MCC Western Australia",
        "https://www.bmwmccwa.asn.au/",
        Strategy::Generic,
    ),
    source(
        "bmwmccact",
        "BMW MCC Canberra",
        "https://www.bmwmcc.au/page-1419638",
        Strategy::Generic,
    ),
    source(
        "docnsw",
        "Ducati Owners Club NSW",
        "https://www.ducatiownersclubnsw.com.au/",
        Strategy::Generic,
    ),
    source(
        "docv",
        "Ducati Owners Club Victoria",
        "https://www.docv.org/events",
        Strategy::Generic,
    ),
    source(
        "docsa",
        "Ducati Owners Club SA",
        "https://www.docsa.com.au/index.php/schedule-2",
        Strategy::Generic,
    ),
    source(
        "harleyau",
        "Harley-Davidson Australia",
        "https://www.harley-davidson.com/au/en/content/event-calendar.html",
        Strategy::Generic,
    ),
    source(
        "imca",
        "Indian Motorcycle Club Australia",
        "https://www.indianmotorcycleclub.com.au/events/",
        Strategy::Generic,
    ),
    source(
        "tomcc",
        "Triumph Owners MCC Australia",
        "https://tomcc.com.au/",
        Strategy::Generic,
    ),
    source(
        "classicsa",
        "Classic Owners MC SA",
        "https://classicowners.org/",
        Strategy::Generic,
    ),
    source(
        "ma",
        "Motorcycling Australia",
        "https://www.ma.org.au/ma-calendar/",
        Strategy::Generic,
    ),
    source(
        "mqld",
        "Motorcycling Queensland",
        "https://www.mqld.org.au/riders/calendar/",
        Strategy::Generic,
    ),
    source(
        "mnsw",
        "Motorcycling NSW",
        "https://motorcycling.com.au/riders/calendar/",
        Strategy::Generic,
    ),
    source(
        "mvic",
        "Motorcycling Victoria",
        "https://www.motorcyclingvic.com.au/riders/calendar/",
        Strategy::Generic,
    ),
];

pub fn extractor_for(strategy: Strategy) -> Box<dyn EventExtractor> {
    match strategy {
        Strategy::MotorcycleRallies => Box::new(motorcycle_rallies::MotorcycleRallies),
        Strategy::JustBikes => Box::new(justbikes::JustBikes),
        Strategy::OldBikeMag => Box::new(oldbikemag::OldBikeMag),
        Strategy::ThrowYourLegOver => Box::new(throwyourlegover::ThrowYourLegOver),
        Strategy::VmccNsw => Box::new(vmccnsw::VmccNsw),
        Strategy::BmwClubs => Box::new(bmw_clubs::BmwClubs),
        Strategy::Generic => Box::new(generic::GenericExtractor),
    }
}

pub fn list_sources() -> Vec<SourceInfo> {
    SOURCES
        .iter()
        .map(|source| SourceInfo {
            id: source.id.to_string(),
            name: source.name.to_string(),
            url: source.url.to_string(),
        })
        .collect()
}

pub fn find_source(id: &str) -> Option<&'static Source> {
    SOURCES.iter().find(|source| source.id == id)
}

/// Events per source, in source order, plus one error per source that could not be fetched.
#[derive(Debug, Default)]
pub struct Collected {
    pub per_source: Vec<Vec<Event>>,
    pub errors: Vec<SourceError>,
}

pub fn collect(fetcher: &dyn PageFetcher, sources: &[Source], today: NaiveDate) -> Collected {
    let mut collected = Collected::default();

    for source in sources {
        info!(source = source.id, "scraping {}", source.name);
        let document = match fetcher.fetch(source.url) {
            Ok(document) => document,
            Err(err) => {
                warn!(source = source.id, "fetch failed: {err:#}");
                collected.errors.push(SourceError {
                    source: source.id.to_string(),
                    error: format!("{err:#}"),
                });
                collected.per_source.push(Vec::new());
                continue;
            }
        };

        let events = extractor_for(source.strategy).extract(&document, source, today);
        info!(source = source.id, found = events.len(), "extracted events");
        collected.per_source.push(events);
    }

    collected
}
