use chrono::NaiveDate;
use once_cell::sync::Lazy;
use scraper::Html;

use super::generic::{extract_listing, ListingProfile};
use super::{EventExtractor, Source};
use crate::models::Event;

// Webflow collection lists
static PROFILE: Lazy<ListingProfile> = Lazy::new(|| {
    ListingProfile::new(
        &["article, .event, .listing, .collection-item"],
        "h1, h2, h3, h4, .title, a",
    )
    .link_base("https://www.throwyourlegover.com.au/")
});

pub struct ThrowYourLegOver;

impl EventExtractor for ThrowYourLegOver {
    fn extract(&self, document: &Html, source: &Source, today: NaiveDate) -> Vec<Event> {
        extract_listing(document, source, today, &PROFILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::scraping::find_source;

    #[test]
    fn parses_collection_items() {
        let html = r#"
        <div class="collection-list">
          <div class="collection-item">
            <h4>Adventure Ride Tasmania</h4>
            <div>December 3, 2026</div>
            <a href="/events/adventure-tas">View</a>
          </div>
          <div class="collection-item">
            <h4>Hills Coffee Run</h4>
          </div>
        </div>
        "#;
        let source = find_source("throwyourlegover").expect("configured source");
        let document = Html::parse_document(html);
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
        let events = ThrowYourLegOver.extract(&document, source, today);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].start_date, NaiveDate::from_ymd_opt(2026, 12, 3));
        assert_eq!(events[0].category, Category::Rally);
        assert_eq!(
            events[0].source_url,
            "https://www.throwyourlegover.com.au/events/adventure-tas"
        );
        assert_eq!(events[1].start_date, None);
        assert_eq!(events[1].source_url, source.url);
        assert_eq!(events[1].description, "");
    }
}
