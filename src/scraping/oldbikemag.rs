use chrono::NaiveDate;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::base;
use super::dates::normalize_date;
use super::{EventExtractor, Skip, Source, MAX_ELEMENTS};
use crate::models::Event;

const MIN_BLOCK_CHARS: usize = 20;
const MAX_TITLE_CHARS: usize = 100;
const MIN_TITLE_CHARS: usize = 5;

static CONTENT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".entry-content, .content, article").expect("content selector"));
static BLOCK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p, li, tr").expect("block selector"));
static LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("link selector"));

/// The rally calendar is an article body of paragraphs and tables rather than
/// event cards, so each dated text block becomes one event.
pub struct OldBikeMag;

impl EventExtractor for OldBikeMag {
    fn extract(&self, document: &Html, source: &Source, today: NaiveDate) -> Vec<Event> {
        let content = match document.select(&CONTENT_SELECTOR).next() {
            Some(node) => node,
            None => {
                debug!(source = source.id, "no content region");
                return Vec::new();
            }
        };

        let mut events = Vec::new();
        for block in content.select(&BLOCK_SELECTOR) {
            match extract_block(block, source, today) {
                Ok(event) => events.push(event),
                Err(skip) => debug!(source = source.id, %skip, "skipped block"),
            }
            if events.len() >= MAX_ELEMENTS {
                break;
            }
        }
        events
    }
}

fn extract_block(block: ElementRef<'_>, source: &Source, today: NaiveDate) -> Result<Event, Skip> {
    let text = base::inner_text(block);
    if text.chars().count() < MIN_BLOCK_CHARS {
        return Err(Skip::ShortText);
    }

    let date = normalize_date(&text).ok_or(Skip::Undated)?;
    if base::is_stale(date, today) {
        return Err(Skip::Stale(date));
    }

    let title = leading_title(&text);
    if title.chars().count() < MIN_TITLE_CHARS {
        return Err(Skip::ShortTitle(title));
    }

    let link = base::absolute_url(
        source.url,
        base::first_attr(&block, &LINK_SELECTOR, "href"),
    );

    Ok(base::build_event(
        source,
        title,
        &text,
        base::truncate_chars(&text, base::MAX_DESCRIPTION_CHARS),
        Some(date),
        link,
        None,
    ))
}

/// Text up to the first hyphen or en-dash separator.
fn leading_title(text: &str) -> String {
    let head = text.split(" - ").next().unwrap_or(text);
    let head = head.split(" – ").next().unwrap_or(head);
    base::truncate_chars(head, MAX_TITLE_CHARS).trim().to_string()
}
