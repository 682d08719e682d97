//! Search endpoint
//!
//! `GET /search`, restricted to videos and projected down to the fields the
//! presenters print.

use super::models::SearchListResponse;
use super::traits::*;
use crate::error::SearchResult;
use crate::search::{SearchQuery, SearchResultItem};

/// Field projection for search results
pub const SEARCH_FIELDS: &str =
    "items(id/kind,id/videoId,snippet/title,snippet/thumbnails/default/url)";

/// Parts requested from the search endpoint
pub const SEARCH_PART: &str = "id,snippet";

pub struct SearchList {
    url: String,
    api_key: String,
}

impl SearchList {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            url: format!("{}/search", base_url.trim_end_matches('/')),
            api_key: api_key.into(),
        }
    }
}

impl Endpoint for SearchList {
    type Params = SearchQuery;
    type Output = Vec<SearchResultItem>;

    fn name(&self) -> &str {
        "search"
    }

    fn request(&self, query: &SearchQuery) -> ApiRequest {
        ApiRequest::get(&self.url)
            .param("part", SEARCH_PART)
            .param("key", &self.api_key)
            .param("q", &query.query)
            .param("type", &query.item_type)
            .param("maxResults", query.max_results.to_string())
            .param("order", &query.order)
            .param("publishedAfter", query.published_after_param())
            .param("fields", SEARCH_FIELDS)
    }

    fn response(&self, response: ApiResponse) -> SearchResult<Self::Output> {
        let list: SearchListResponse = response.into_json()?;
        Ok(list.items.into_iter().map(SearchResultItem::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use chrono::{TimeZone, Utc};

    fn query() -> SearchQuery {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        SearchQuery::new("YouTube Developers Live", 10, now, 1)
    }

    #[test]
    fn test_search_request() {
        let endpoint = SearchList::new("https://www.googleapis.com/youtube/v3/", "secret");
        let request = endpoint.request(&query());

        assert_eq!(request.url, "https://www.googleapis.com/youtube/v3/search");
        assert_eq!(request.get_param("part"), Some("id,snippet"));
        assert_eq!(request.get_param("key"), Some("secret"));
        assert_eq!(request.get_param("q"), Some("YouTube Developers Live"));
        assert_eq!(request.get_param("type"), Some("video"));
        assert_eq!(request.get_param("maxResults"), Some("10"));
        assert_eq!(request.get_param("order"), Some("viewCount"));
        assert_eq!(
            request.get_param("publishedAfter"),
            Some("2026-10-15T12:00:00.000Z")
        );
        assert_eq!(request.get_param("fields"), Some(SEARCH_FIELDS));
    }

    #[test]
    fn test_search_response_keeps_order() {
        let endpoint = SearchList::new("https://example.test", "k");
        let response = ApiResponse {
            status: 200,
            text: serde_json::json!({
                "items": [
                    {"id": {"kind": "youtube#video", "videoId": "b"}, "snippet": {"title": "B"}},
                    {"id": {"kind": "youtube#channel"}, "snippet": {"title": "C"}},
                    {"id": {"kind": "youtube#video", "videoId": "a"}, "snippet": {"title": "A"}}
                ]
            })
            .to_string(),
            url: "https://example.test/search".to_string(),
        };

        let items = endpoint.response(response).unwrap();
        let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "C", "A"]);
        assert!(!items[1].is_video());
    }

    #[test]
    fn test_search_quota_error() {
        let endpoint = SearchList::new("https://example.test", "k");
        let response = ApiResponse {
            status: 403,
            text: r#"{"error":{"code":403,"message":"Daily Limit Exceeded"}}"#.to_string(),
            url: "https://example.test/search".to_string(),
        };

        let err = endpoint.response(response).unwrap_err();
        assert!(matches!(err, SearchError::Service { code: 403, .. }));
    }
}
