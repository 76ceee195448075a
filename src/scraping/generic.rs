use chrono::NaiveDate;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::base;
use super::dates::{normalize_date, parse_iso_prefix};
use super::{EventExtractor, Skip, Source, MAX_ELEMENTS};
use crate::models::{Event, State};

const NAV_TITLES: &[&str] = &[
    "home", "about", "contact", "events", "calendar", "menu", "login", "join",
];
const MIN_TITLE_CHARS: usize = 5;

static LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("link selector"));
static TIME_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("time[datetime]").expect("time selector"));

static GENERIC_PROFILE: Lazy<ListingProfile> = Lazy::new(|| {
    ListingProfile::new(
        &[
            "article",
            ".event",
            ".event-item",
            ".event-listing",
            ".tribe-events-calendar-list__event",
            ".ecs-event",
            ".type-tribe_events",
            ".upcoming-event",
            ".event-card",
            ".calendar-event",
            ".list-item",
            "li.event",
            "tr",
        ],
        "h1, h2, h3, h4, h5, .title, .event-title, a",
    )
    .skip_titles(NAV_TITLES)
});

/// How one listing page lays out its events. Per-source extractors differ only here.
pub struct ListingProfile {
    containers: Vec<Selector>,
    title: Selector,
    link_base: Option<&'static str>,
    skip_titles: &'static [&'static str],
    title_link_first: bool,
    fixed_state: Option<State>,
}

impl ListingProfile {
    pub fn new(containers: &[&str], title: &str) -> Self {
        Self {
            containers: containers
                .iter()
                .map(|css| Selector::parse(css).expect("container selector"))
                .collect(),
            title: Selector::parse(title).expect("title selector"),
            link_base: None,
            skip_titles: &[],
            title_link_first: false,
            fixed_state: None,
        }
    }

    pub fn link_base(mut self, base: &'static str) -> Self {
        self.link_base = Some(base);
        self
    }

    pub fn skip_titles(mut self, titles: &'static [&'static str]) -> Self {
        self.skip_titles = titles;
        self
    }

    /// Use the title element's own href when the title is an anchor.
    pub fn title_link_first(mut self) -> Self {
        self.title_link_first = true;
        self
    }

    pub fn fixed_state(mut self, state: State) -> Self {
        self.fixed_state = Some(state);
        self
    }

    /// First container selector with more than two hits wins; otherwise the last one is used as is.
    fn select_elements<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        let mut elements = Vec::new();
        for selector in &self.containers {
            elements = document.select(selector).collect::<Vec<_>>();
            if elements.len() > 2 {
                break;
            }
        }
        elements.truncate(MAX_ELEMENTS);
        elements
    }
}

pub struct GenericExtractor;

impl EventExtractor for GenericExtractor {
    fn extract(&self, document: &Html, source: &Source, today: NaiveDate) -> Vec<Event> {
        extract_listing(document, source, today, &GENERIC_PROFILE)
    }
}

pub fn extract_listing(
    document: &Html,
    source: &Source,
    today: NaiveDate,
    profile: &ListingProfile,
) -> Vec<Event> {
    profile
        .select_elements(document)
        .into_iter()
        .filter_map(|element| match extract_element(element, source, today, profile) {
            Ok(event) => Some(event),
            Err(skip) => {
                debug!(source = source.id, %skip, "skipped element");
                None
            }
        })
        .collect()
}

fn extract_element(
    element: ElementRef<'_>,
    source: &Source,
    today: NaiveDate,
    profile: &ListingProfile,
) -> Result<Event, Skip> {
    let title_el = element.select(&profile.title).next().ok_or(Skip::MissingTitle)?;
    let title = base::inner_text(title_el);
    if title.chars().count() < MIN_TITLE_CHARS {
        return Err(Skip::ShortTitle(title));
    }
    let lowered = title.to_lowercase();
    if profile.skip_titles.iter().any(|skip| *skip == lowered) {
        return Err(Skip::Navigation(title));
    }

    let title_href = if profile.title_link_first && title_el.value().name() == "a" {
        title_el.value().attr("href").map(str::to_string)
    } else {
        None
    };
    let href = title_href.or_else(|| base::first_attr(&element, &LINK_SELECTOR, "href"));
    let link = base::absolute_url(profile.link_base.unwrap_or(source.url), href);

    let text = base::inner_text(element);
    let start_date = normalize_date(&text).or_else(|| {
        base::first_attr(&element, &TIME_SELECTOR, "datetime")
            .and_then(|value| parse_iso_prefix(&value))
    });

    if let Some(date) = start_date {
        if base::is_stale(date, today) {
            return Err(Skip::Stale(date));
        }
    }

    Ok(base::build_event(
        source,
        title,
        &text,
        base::describe(&text),
        start_date,
        link,
        profile.fixed_state,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::scraping::Strategy;

    const SOURCE: Source = Source {
        id: "docv",
        name: "Ducati Owners Club Victoria",
        url: "https://www.docv.org/events",
        strategy: Strategy::Generic,
    };

    const SAMPLE_HTML: &str = r#"
    <html><body>
      <nav><ul><li><a href="/">Home</a></li></ul></nav>
      <div class="event-card">
        <h3><a href="/events/winter-ride">Winter Ride to Bright</a></h3>
        <p>Meet at Lilydale 12/11/2026, lunch in Bright. All Ducati owners welcome.</p>
      </div>
      <div class="event-card">
        <h3>Ducati Track Day</h3>
        <p><a href="https://tracks.example.com/day">Book now</a></p>
        <time datetime="2026-12-05T08:00:00+11:00">Early December</time>
      </div>
      <div class="event-card">
        <h3>Old Season Opener</h3>
        <p>Held on 1 March 2026 at Phillip Island.</p>
      </div>
      <div class="event-card">
        <h3>Events</h3>
        <p>See all upcoming events in the calendar.</p>
      </div>
      <div class="event-card"><h3>AGM</h3></div>
      <div class="event-card"><p>No heading here at all.</p></div>
    </body></html>
    "#;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
    }

    #[test]
    fn extracts_generic_event_cards() {
        let document = Html::parse_document(SAMPLE_HTML);
        let events = GenericExtractor.extract(&document, &SOURCE, today());
        assert_eq!(events.len(), 2, "stale, navigation and untitled cards are dropped");

        let ride = &events[0];
        assert_eq!(ride.title, "Winter Ride to Bright");
        assert_eq!(ride.start_date, NaiveDate::from_ymd_opt(2026, 11, 12));
        assert_eq!(ride.source_url, "https://www.docv.org/events/winter-ride");
        assert_eq!(ride.source_name, "Ducati Owners Club Victoria");
        assert_eq!(ride.state, State::Vic);
        assert_eq!(ride.category, Category::Rally);
        assert!(ride.description.starts_with("Winter Ride to Bright Meet at Lilydale"));
        assert_eq!(ride.id, base::make_id("Winter Ride to Bright", "docv", ride.start_date));

        let track = &events[1];
        assert_eq!(track.start_date, NaiveDate::from_ymd_opt(2026, 12, 5));
        assert_eq!(track.source_url, "https://tracks.example.com/day");
        assert_eq!(track.category, Category::Track);
        assert_eq!(track.state, State::All);
    }

    #[test]
    fn falls_back_to_last_candidate_selector() {
        let html = r#"
        <table>
          <tr><td><a href="rides/one">Sunday Breakfast Ride</a> 2 November 2026</td></tr>
          <tr><td>Toy Run Adelaide, no date yet</td></tr>
        </table>
        "#;
        let document = Html::parse_document(html);
        let events = GenericExtractor.extract(&document, &SOURCE, today());
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Sunday Breakfast Ride");
        assert_eq!(events[0].source_url, "https://www.docv.org/rides/one");
    }

    #[test]
    fn caps_processed_elements() {
        let cards: String = (0..45)
            .map(|i| format!("<article><h2>Club Ride Number {i}</h2></article>"))
            .collect();
        let document = Html::parse_document(&format!("<html><body>{cards}</body></html>"));
        let events = GenericExtractor.extract(&document, &SOURCE, today());
        assert_eq!(events.len(), MAX_ELEMENTS);
        assert!(events.iter().all(|event| event.start_date.is_none()));
        assert!(events.iter().all(|event| event.source_url == SOURCE.url));
    }

    #[test]
    fn free_text_date_beats_time_attribute() {
        let html = r#"
        <article><h2>Charity Toy Run</h2><p>Sunday 7 December 2026</p>
          <time datetime="2026-12-01">soon</time></article>
        <article><h2>Spare one</h2></article>
        <article><h2>Spare two</h2></article>
        "#;
        let document = Html::parse_document(html);
        let events = GenericExtractor.extract(&document, &SOURCE, today());
        assert_eq!(events[0].start_date, NaiveDate::from_ymd_opt(2026, 12, 7));
    }
}
