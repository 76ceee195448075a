use chrono::NaiveDate;
use once_cell::sync::Lazy;
use scraper::Html;

use super::generic::{extract_listing, ListingProfile};
use super::{EventExtractor, Source};
use crate::models::{Event, State};

// The Events Calendar (tribe) markup; every listing is in NSW.
static PROFILE: Lazy<ListingProfile> = Lazy::new(|| {
    ListingProfile::new(
        &["article, .event, .tribe-events-calendar-list__event, .type-tribe_events"],
        "h1, h2, h3, h4, .tribe-events-calendar-list__event-title, a",
    )
    .link_base("https://vmccnsw.org.au/events/")
    .fixed_state(State::Nsw)
});

pub struct VmccNsw;

impl EventExtractor for VmccNsw {
    fn extract(&self, document: &Html, source: &Source, today: NaiveDate) -> Vec<Event> {
        extract_listing(document, source, today, &PROFILE)
    }
}
