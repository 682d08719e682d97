//! Videos endpoint, used for per-video view counts

use super::models::VideoListResponse;
use super::traits::*;
use crate::error::SearchResult;
use crate::results::ViewCount;

pub const STATISTICS_PART: &str = "id,statistics";

pub const STATISTICS_FIELDS: &str = "items(id,statistics/viewCount)";

pub struct VideoStatisticsList {
    url: String,
    api_key: String,
}

impl VideoStatisticsList {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            url: format!("{}/videos", base_url.trim_end_matches('/')),
            api_key: api_key.into(),
        }
    }
}

impl Endpoint for VideoStatisticsList {
    type Params = str;
    /// `None` when the video is gone or its count is hidden
    type Output = Option<ViewCount>;

    fn name(&self) -> &str {
        "videos"
    }

    fn request(&self, video_id: &str) -> ApiRequest {
        ApiRequest::get(&self.url)
            .param("part", STATISTICS_PART)
            .param("key", &self.api_key)
            .param("id", video_id)
            .param("maxResults", "1")
            .param("fields", STATISTICS_FIELDS)
    }

    fn response(&self, response: ApiResponse) -> SearchResult<Self::Output> {
        let list: VideoListResponse = response.into_json()?;
        Ok(list
            .items
            .into_iter()
            .next()
            .and_then(|video| video.statistics)
            .and_then(|stats| stats.view_count))
    }
}
