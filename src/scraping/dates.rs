use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static NUMERIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{1,2})[/\-.](\d{1,2})[/\-.](\d{4})").expect("numeric date regex")
});
static DAY_MONTH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d{1,2})\s+(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s+(\d{4})")
        .expect("day month date regex")
});
static MONTH_DAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s+(\d{1,2}),?\s+(\d{4})")
        .expect("month day date regex")
});

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Finds the first date in `text`, trying day-first numeric, then `12 April 2026`,
/// then `April 12, 2026`. A pattern whose first match is not a real calendar date
/// falls through to the next pattern.
pub fn normalize_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    NUMERIC_RE
        .captures(text)
        .and_then(|caps| {
            let day = number(&caps, 1)?;
            let month = number(&caps, 2)?;
            let year = caps.get(3)?.as_str().parse().ok()?;
            NaiveDate::from_ymd_opt(year, month, day)
        })
        .or_else(|| {
            DAY_MONTH_RE.captures(text).and_then(|caps| {
                let day = number(&caps, 1)?;
                let month = month_number(caps.get(2)?.as_str())?;
                let year = caps.get(3)?.as_str().parse().ok()?;
                NaiveDate::from_ymd_opt(year, month, day)
            })
        })
        .or_else(|| {
            MONTH_DAY_RE.captures(text).and_then(|caps| {
                let month = month_number(caps.get(1)?.as_str())?;
                let day = number(&caps, 2)?;
                let year = caps.get(3)?.as_str().parse().ok()?;
                NaiveDate::from_ymd_opt(year, month, day)
            })
        })
}

/// Reads a `YYYY-MM-DD` prefix, as found in `<time datetime="...">` attributes.
pub fn parse_iso_prefix(value: &str) -> Option<NaiveDate> {
    let prefix = value.trim().get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

fn number(caps: &Captures<'_>, index: usize) -> Option<u32> {
    caps.get(index)?.as_str().parse().ok()
}

fn month_number(token: &str) -> Option<u32> {
    let key = token.get(..3)?.to_lowercase();
    MONTHS
        .iter()
        .position(|month| *month == key)
        .map(|idx| idx as u32 + 1)
}
