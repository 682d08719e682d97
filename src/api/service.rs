//! Video service abstraction and its YouTube Data API implementation

use super::search::SearchList;
use super::traits::Endpoint;
use super::videos::VideoStatisticsList;
use crate::config::ApiSettings;
use crate::error::SearchResult;
use crate::network::HttpClient;
use crate::results::ViewCount;
use crate::search::{SearchQuery, SearchResultItem};
use async_trait::async_trait;
use std::time::Instant;
use tracing::debug;

/// Remote operations a search run needs
#[async_trait]
pub trait VideoService: Send + Sync {
    /// Run the search, returning hits in endpoint order
    async fn search(&self, query: &SearchQuery) -> SearchResult<Vec<SearchResultItem>>;

    /// Fetch the view count of one video
    async fn view_count(&self, video_id: &str) -> SearchResult<Option<ViewCount>>;
}

/// YouTube Data API v3 client
pub struct YouTubeClient {
    client: HttpClient,
    search: SearchList,
    videos: VideoStatisticsList,
}

impl YouTubeClient {
    pub fn new(client: HttpClient, api: &ApiSettings) -> Self {
        Self {
            client,
            search: SearchList::new(&api.base_url, api.key.clone()),
            videos: VideoStatisticsList::new(&api.base_url, api.key.clone()),
        }
    }

    /// Build, send and parse one endpoint call
    async fn call<E>(&self, endpoint: &E, params: &E::Params) -> SearchResult<E::Output>
    where
        E: Endpoint,
    {
        let start = Instant::now();
        let request = endpoint.request(params);
        let response = self.client.execute(request).await?;

        debug!(
            "Endpoint {} answered {} in {:?}",
            endpoint.name(),
            response.status,
            start.elapsed()
        );

        endpoint.response(response)
    }
}

#[async_trait]
impl VideoService for YouTubeClient {
    async fn search(&self, query: &SearchQuery) -> SearchResult<Vec<SearchResultItem>> {
        self.call(&self.search, query).await
    }

    async fn view_count(&self, video_id: &str) -> SearchResult<Option<ViewCount>> {
        self.call(&self.videos, video_id).await
    }
}
