use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use scraper::{ElementRef, Html, Selector};
use sha2::{Digest, Sha256};

use super::classify::{classify_category, classify_state};
use super::{PageFetcher, Source};
use crate::config::AppConfig;
use crate::models::{Event, State};

pub const MAX_DESCRIPTION_CHARS: usize = 500;
const MIN_DESCRIPTION_CHARS: usize = 20;
const ID_LEN: usize = 12;
const GRACE_DAYS: u64 = 1;

pub fn clean_text(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn inner_text(element: ElementRef<'_>) -> String {
    clean_text(&element.text().collect::<Vec<_>>().join(" "))
}

pub fn first_attr(element: &ElementRef<'_>, selector: &Selector, attr: &str) -> Option<String> {
    element
        .select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(str::to_string)
}

pub fn absolute_url(base: &str, href: Option<String>) -> Option<String> {
    let href = href?;
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    if href.starts_with("http://") || href.starts_with("https://") {
        return Some(href.to_string());
    }
    let base_url = reqwest::Url::parse(base).ok()?;
    base_url.join(href).ok().map(|u| u.to_string())
}

/// Stable 12 hex char id over `source_title_date`, `nodate` standing in for a missing date.
pub fn make_id(title: &str, source_id: &str, date: Option<NaiveDate>) -> String {
    let date = date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "nodate".to_string());
    let mut hasher = Sha256::new();
    hasher.update(source_id.as_bytes());
    hasher.update(b"_");
    hasher.update(title.as_bytes());
    hasher.update(b"_");
    hasher.update(date.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest[..ID_LEN].to_string()
}

/// Anything dated before yesterday is over; yesterday itself is kept to absorb timezone skew.
pub fn is_stale(date: NaiveDate, today: NaiveDate) -> bool {
    match today.checked_sub_days(chrono::Days::new(GRACE_DAYS)) {
        Some(cutoff) => date < cutoff,
        None => false,
    }
}

pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

pub fn describe(text: &str) -> String {
    if text.chars().count() > MIN_DESCRIPTION_CHARS {
        truncate_chars(text, MAX_DESCRIPTION_CHARS)
    } else {
        String::new()
    }
}

pub fn build_event(
    source: &Source,
    title: String,
    text: &str,
    description: String,
    start_date: Option<NaiveDate>,
    source_url: Option<String>,
    fixed_state: Option<State>,
) -> Event {
    let state = fixed_state.unwrap_or_else(|| classify_state(text));
    let category = classify_category(&format!("{title} {text}"));

    Event {
        id: make_id(&title, source.id, start_date),
        title,
        description,
        start_date,
        end_date: None,
        location: String::new(),
        state,
        category,
        source_url: source_url.unwrap_or_else(|| source.url.to_string()),
        source_name: source.name.to_string(),
    }
}

/// Blocking HTTP fetcher with a browser-like identity and AU-English locale.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&config.accept_language)
                .context("invalid accept_language header value")?,
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .context("unable to build http client")?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Html> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("request failed for {url}"))?;
        let response = response
            .error_for_status()
            .with_context(|| format!("non-success status for {url}"))?;
        let body = response
            .text()
            .with_context(|| format!("unable to read response body for {url}"))?;
        Ok(Html::parse_document(&body))
    }
}
