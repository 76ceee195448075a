use chrono::NaiveDate;
use once_cell::sync::Lazy;
use scraper::Html;

use super::generic::{extract_listing, ListingProfile};
use super::{EventExtractor, Source};
use crate::models::Event;

static PROFILE: Lazy<ListingProfile> = Lazy::new(|| {
    ListingProfile::new(
        &["article, .event, .event-item, .tribe-events-calendar-list__event, .ecs-event"],
        "h1, h2, h3, h4, .title, a",
    )
    .link_base("https://www.bmwca.au/")
    .skip_titles(&["home", "about", "contact", "events"])
});

pub struct BmwClubs;

impl EventExtractor for BmwClubs {
    fn extract(&self, document: &Html, source: &Source, today: NaiveDate) -> Vec<Event> {
        extract_listing(document, source, today, &PROFILE)
    }
}
