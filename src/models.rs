use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String, // hash of source_id|title|start_date, see scraping::base::make_id
    pub title: String,
    pub description: String,
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub location: String,
    pub state: State,
    pub category: Category,
    pub source_url: String,
    pub source_name: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum State {
    #[serde(rename = "NSW")]
    Nsw,
    #[serde(rename = "VIC")]
    Vic,
    #[serde(rename = "QLD")]
    Qld,
    #[serde(rename = "WA")]
    Wa,
    #[serde(rename = "SA")]
    Sa,
    #[serde(rename = "TAS")]
    Tas,
    #[serde(rename = "ACT")]
    Act,
    #[serde(rename = "NT")]
    Nt,
    #[default]
    #[serde(rename = "ALL")]
    All,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    SwapMeet,
    Rally,
    Track,
    Show,
    Racing,
    #[default]
    Other,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SourceError {
    pub source: String,
    pub error: String,
}

/// The document written for downstream consumers.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OutputEnvelope {
    pub last_updated: DateTime<Utc>,
    pub total_events: usize,
    pub sources: Vec<String>,
    pub errors: Vec<SourceError>,
    pub events: Vec<Event>,
}
