//! Search query and result item models

use crate::api::{SearchItem, VIDEO_KIND};
use crate::config::SearchSettings;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Sort order requested from the search endpoint
pub const ORDER_VIEW_COUNT: &str = "viewCount";

/// Item type the search endpoint is restricted to
pub const TYPE_VIDEO: &str = "video";

/// Complete search query with all parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// The search term, verbatim
    pub query: String,
    /// Result cap
    pub max_results: u32,
    /// Server-side sort order
    pub order: String,
    /// Item type filter
    pub item_type: String,
    /// Only items published after this instant
    pub published_after: DateTime<Utc>,
}

impl SearchQuery {
    /// Query for videos published within `days` before `now`
    pub fn new(query: impl Into<String>, max_results: u32, now: DateTime<Utc>, days: u32) -> Self {
        Self {
            query: query.into(),
            max_results,
            order: ORDER_VIEW_COUNT.to_string(),
            item_type: TYPE_VIDEO.to_string(),
            published_after: now
                .checked_sub_signed(Duration::days(i64::from(days)))
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
        }
    }

    /// Build from the configured search settings
    pub fn from_settings(query: impl Into<String>, settings: &SearchSettings, now: DateTime<Utc>) -> Self {
        Self::new(
            query,
            settings.max_results,
            now,
            settings.published_within_days,
        )
    }

    /// `publishedAfter` as the API expects it
    pub fn published_after_param(&self) -> String {
        self.published_after
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// One hit from the search endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    /// Kind discriminator, e.g. `youtube#video`
    pub kind: String,
    /// Present for video hits
    pub video_id: Option<String>,
    pub title: String,
    /// Default thumbnail
    pub thumbnail_url: Option<String>,
}

impl SearchResultItem {
    pub fn video(video_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            kind: VIDEO_KIND.to_string(),
            video_id: Some(video_id.into()),
            title: title.into(),
            thumbnail_url: None,
        }
    }

    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    /// Video id if this hit is a playable video
    pub fn as_video(&self) -> Option<&str> {
        if self.kind == VIDEO_KIND {
            self.video_id.as_deref()
        } else {
            None
        }
    }

    pub fn is_video(&self) -> bool {
        self.as_video().is_some()
    }
}

impl From<SearchItem> for SearchResultItem {
    fn from(item: SearchItem) -> Self {
        let snippet = item.snippet.unwrap_or_default();
        let thumbnail_url = snippet
            .thumbnails
            .and_then(|t| t.default)
            .map(|t| t.url);

        Self {
            kind: item.id.kind,
            video_id: item.id.video_id,
            title: snippet.title,
            thumbnail_url,
        }
    }
}
