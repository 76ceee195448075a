use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

const DEFAULT_OUTPUT: &str = "assets/data/events.json";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const DEFAULT_ACCEPT_LANGUAGE: &str = "en-AU,en;q=0.9";
const DEFAULT_TIMEZONE: &str = "Australia/Sydney";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub output_path: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub accept_language: String,
    /// Zone whose calendar day decides which events are already over.
    pub timezone: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

impl AppConfig {
    /// Reads the optional JSON file, then applies `MOTO_SCRAPE_*` environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => read_config(path)?,
            None => AppConfig::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(output) = lookup("MOTO_SCRAPE_OUTPUT") {
            self.output_path = PathBuf::from(output);
        }
        if let Some(timeout) = lookup("MOTO_SCRAPE_TIMEOUT_SECS") {
            self.request_timeout_secs = timeout
                .trim()
                .parse()
                .with_context(|| format!("invalid MOTO_SCRAPE_TIMEOUT_SECS: {timeout}"))?;
        }
        if let Some(tz) = lookup("MOTO_SCRAPE_TZ") {
            self.timezone = tz;
        }
        Ok(())
    }

    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|err| anyhow!("invalid timezone {:?}: {err}", self.timezone))
    }
}

fn read_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("unable to read config {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("invalid config {}", path.display()))
}
