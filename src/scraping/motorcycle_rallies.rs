use chrono::NaiveDate;
use once_cell::sync::Lazy;
use scraper::Html;

use super::generic::{extract_listing, ListingProfile};
use super::{EventExtractor, Source};
use crate::models::Event;

const BASE_URL: &str = "https://www.motorcycleralliesaustralia.com/";

static PROFILE: Lazy<ListingProfile> = Lazy::new(|| {
    ListingProfile::new(
        &["article, .event, .rally, .listing, tr"],
        "h1, h2, h3, h4, a, .title",
    )
    .link_base(BASE_URL)
    .skip_titles(&["home", "about", "contact"])
    .title_link_first()
});

pub struct MotorcycleRallies;

impl EventExtractor for MotorcycleRallies {
    fn extract(&self, document: &Html, source: &Source, today: NaiveDate) -> Vec<Event> {
        extract_listing(document, source, today, &PROFILE)
    }
}
