//! Settings structures for tubesearch configuration

use crate::error::{SearchError, SearchResult};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Public YouTube Data API v3 root
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Query used when the user enters an empty line
pub const DEFAULT_QUERY: &str = "YouTube Developers Live";

/// Upper bound the search endpoint accepts for `maxResults`
pub const MAX_RESULTS_LIMIT: u32 = 50;

/// Widest publication window accepted, in days
pub const MAX_PUBLISHED_WITHIN_DAYS: u32 = 3650;

/// Main settings structure, mirrors settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub api: ApiSettings,
    pub search: SearchSettings,
    pub outgoing: OutgoingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> SearchResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read settings file {}", path.display()))?;
        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid settings file {}", path.display()))?;
        Ok(settings)
    }

    /// Merge with environment variables (TUBESEARCH_* prefix)
    pub fn merge_env(&mut self) {
        self.merge_vars(|name| std::env::var(name).ok());
    }

    /// Apply overrides from any variable source
    pub fn merge_vars<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = var("TUBESEARCH_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Some(val) = var("TUBESEARCH_API_KEY").or_else(|| var("YOUTUBE_API_KEY")) {
            self.api.key = val;
        }
        if let Some(val) = var("TUBESEARCH_BASE_URL") {
            self.api.base_url = val;
        }
        if let Some(val) = var("TUBESEARCH_MAX_RESULTS") {
            if let Ok(max) = val.parse() {
                self.search.max_results = max;
            }
        }
        if let Some(val) = var("TUBESEARCH_PRESENTATION") {
            if let Some(presentation) = Presentation::from_name(&val) {
                self.search.presentation = presentation;
            }
        }
    }

    /// Reject settings a run cannot work with
    pub fn validate(&self) -> SearchResult<()> {
        if self.api.key.trim().is_empty() {
            return Err(SearchError::other(
                "No API key configured (set api.key or TUBESEARCH_API_KEY)",
            ));
        }
        url::Url::parse(&self.api.base_url)
            .with_context(|| format!("Invalid api.base_url {:?}", self.api.base_url))?;
        if !(1..=MAX_RESULTS_LIMIT).contains(&self.search.max_results) {
            return Err(SearchError::other(format!(
                "search.max_results must be between 1 and {}, got {}",
                MAX_RESULTS_LIMIT, self.search.max_results
            )));
        }
        if !(1..=MAX_PUBLISHED_WITHIN_DAYS).contains(&self.search.published_within_days) {
            return Err(SearchError::other(format!(
                "search.published_within_days must be between 1 and {}, got {}",
                MAX_PUBLISHED_WITHIN_DAYS, self.search.published_within_days
            )));
        }
        let timeout = self.outgoing.request_timeout;
        if !timeout.is_finite() || timeout <= 0.0 {
            return Err(SearchError::other(format!(
                "outgoing.request_timeout must be a positive number of seconds, got {}",
                timeout
            )));
        }
        Ok(())
    }
}

/// General settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug logging
    pub debug: bool,
}

/// YouTube Data API access
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Developer key sent with every request
    pub key: String,
    /// API root, overridable for testing against a mock
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Search behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Result cap sent as `maxResults`
    pub max_results: u32,
    /// Query used for an empty input line
    pub default_query: String,
    /// How results are presented
    pub presentation: Presentation,
    /// Only videos published within this many days are returned
    pub published_within_days: u32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_results: 10,
            default_query: DEFAULT_QUERY.to_string(),
            presentation: Presentation::default(),
            published_within_days: 1,
        }
    }
}

/// Result presentation policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presentation {
    /// Fetch view counts and sort by them, most watched first
    #[default]
    Ranked,
    /// Print results in the order the search endpoint returned them
    AsReturned,
}

impl Presentation {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "ranked" => Some(Self::Ranked),
            "as_returned" | "as-returned" | "chronological" => Some(Self::AsReturned),
            _ => None,
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Appended to the user agent
    pub useragent_suffix: Option<String>,
    /// Proxy for all outgoing requests
    pub proxy: Option<String>,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 10.0,
            useragent_suffix: None,
            proxy: None,
        }
    }
}
