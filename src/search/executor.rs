//! Search execution: one query, one search call, optional enrichment, output

use super::models::{SearchQuery, SearchResultItem};
use crate::api::VideoService;
use crate::config::{Presentation, SearchSettings};
use crate::error::SearchResult;
use crate::query;
use crate::results::{rank_by_views, Listing, Report, ResultRecord};
use chrono::{DateTime, Utc};
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Search runner over a video service
pub struct Search {
    service: Arc<dyn VideoService>,
    settings: SearchSettings,
}

impl Search {
    pub fn new(service: Arc<dyn VideoService>, settings: SearchSettings) -> Self {
        Self { service, settings }
    }

    /// Prompt for a query, search, and print the results
    ///
    /// Nothing is written after the prompt unless every call succeeded.
    pub async fn run<R, W>(
        &self,
        input: &mut R,
        output: &mut W,
        now: DateTime<Utc>,
    ) -> SearchResult<Report>
    where
        R: BufRead,
        W: Write,
    {
        let term = query::prompt_query(input, output, &self.settings.default_query)?;
        let query = SearchQuery::from_settings(term, &self.settings, now);

        let report = self.execute(&query).await?;
        report.render(output)?;
        Ok(report)
    }

    /// Execute a search query and gather everything the report needs
    pub async fn execute(&self, query: &SearchQuery) -> SearchResult<Report> {
        info!(
            "Searching for '{}' (max {}, published after {})",
            query.query,
            query.max_results,
            query.published_after_param()
        );

        let items = self.service.search(query).await?;
        let hits = items.len();
        debug!("Search returned {} items", hits);

        let listing = match self.settings.presentation {
            Presentation::Ranked => Listing::Ranked(self.rank(&items).await?),
            Presentation::AsReturned => Listing::AsReturned(items),
        };

        Ok(Report {
            query: query.query.clone(),
            max_results: query.max_results,
            hits,
            listing,
        })
    }

    /// Fetch view counts one video at a time and sort by them
    async fn rank(&self, items: &[SearchResultItem]) -> SearchResult<Vec<ResultRecord>> {
        let mut records = Vec::with_capacity(items.len());

        for item in items {
            let Some(video_id) = item.as_video() else {
                debug!("Skipping non-video item of kind {}", item.kind);
                continue;
            };

            match self.service.view_count(video_id).await? {
                Some(view_count) => {
                    records.push(ResultRecord::new(video_id, &item.title, view_count));
                }
                None => warn!("No statistics for video {}, skipping", video_id),
            }
        }

        rank_by_views(&mut records);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use crate::results::{ViewCount, NO_RESULTS};
    use async_trait::async_trait;
    use chrono::TimeZone;
    use std::collections::HashMap;
    use std::io::Cursor;
    use std::sync::Mutex;

    /// In-memory service recording every call
    #[derive(Default)]
    struct FakeService {
        items: Vec<SearchResultItem>,
        views: HashMap<String, u64>,
        fail_search: bool,
        fail_stats: bool,
        queries: Mutex<Vec<SearchQuery>>,
        stats_calls: Mutex<Vec<String>>,
    }

    impl FakeService {
        fn with_items(items: Vec<SearchResultItem>) -> Self {
            Self {
                items,
                ..Default::default()
            }
        }

        fn view(mut self, id: &str, count: u64) -> Self {
            self.views.insert(id.to_string(), count);
            self
        }
    }

    #[async_trait]
    impl VideoService for FakeService {
        async fn search(&self, query: &SearchQuery) -> SearchResult<Vec<SearchResultItem>> {
            self.queries.lock().unwrap().push(query.clone());
            if self.fail_search {
                return Err(SearchError::service(
                    403,
                    "The request cannot be completed because you have exceeded your quota.",
                ));
            }
            Ok(self.items.clone())
        }

        async fn view_count(&self, video_id: &str) -> SearchResult<Option<ViewCount>> {
            self.stats_calls.lock().unwrap().push(video_id.to_string());
            if self.fail_stats {
                return Err(SearchError::transport("connect", "connection refused"));
            }
            Ok(self.views.get(video_id).copied().map(ViewCount::from))
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 18, 0, 0).unwrap()
    }

    fn settings(presentation: Presentation) -> SearchSettings {
        SearchSettings {
            presentation,
            ..Default::default()
        }
    }

    fn channel(title: &str) -> SearchResultItem {
        SearchResultItem {
            kind: "youtube#channel".to_string(),
            video_id: None,
            title: title.to_string(),
            thumbnail_url: None,
        }
    }

    async fn run(
        service: Arc<FakeService>,
        presentation: Presentation,
        input: &str,
    ) -> (SearchResult<Report>, String) {
        let search = Search::new(service, settings(presentation));
        let mut input = Cursor::new(input.to_string());
        let mut output = Vec::new();
        let result = search.run(&mut input, &mut output, now()).await;
        (result, String::from_utf8(output).unwrap())
    }

    #[tokio::test]
    async fn test_ranked_sorts_by_views() {
        let service = Arc::new(
            FakeService::with_items(vec![
                SearchResultItem::video("five", "Five"),
                SearchResultItem::video("fifty", "Fifty"),
                SearchResultItem::video("twenty", "Twenty"),
            ])
            .view("five", 5)
            .view("fifty", 50)
            .view("twenty", 20),
        );

        let (result, text) = run(service.clone(), Presentation::Ranked, "rust\n").await;
        let report = result.unwrap();

        match report.listing {
            Listing::Ranked(ref records) => {
                let counts: Vec<_> = records.iter().map(|r| r.view_count.to_string()).collect();
                assert_eq!(counts, vec!["50", "20", "5"]);
            }
            ref other => panic!("unexpected listing: {:?}", other),
        }

        // Stats calls go out in result order.
        assert_eq!(
            *service.stats_calls.lock().unwrap(),
            vec!["five", "fifty", "twenty"]
        );
        assert!(text.find("View Count: 50").unwrap() < text.find("View Count: 20").unwrap());
        assert!(text.find("View Count: 20").unwrap() < text.find("View Count: 5\n").unwrap());
    }

    #[tokio::test]
    async fn test_ranked_filters_non_videos() {
        let service = Arc::new(
            FakeService::with_items(vec![channel("A channel"), SearchResultItem::video("v", "A video")])
                .view("v", 1),
        );

        let (result, text) = run(service.clone(), Presentation::Ranked, "x\n").await;
        result.unwrap();

        assert_eq!(*service.stats_calls.lock().unwrap(), vec!["v"]);
        assert!(text.contains("Title: A video"));
        assert!(!text.contains("A channel"));
    }

    #[tokio::test]
    async fn test_ranked_skips_videos_without_statistics() {
        let service = Arc::new(
            FakeService::with_items(vec![
                SearchResultItem::video("gone", "Deleted"),
                SearchResultItem::video("here", "Present"),
            ])
            .view("here", 3),
        );

        let (result, text) = run(service, Presentation::Ranked, "x\n").await;
        let report = result.unwrap();

        assert_eq!(report.hits, 2);
        assert!(!text.contains("Deleted"));
        assert!(text.contains("Present"));
    }

    #[tokio::test]
    async fn test_as_returned_keeps_order_without_stats_calls() {
        let service = Arc::new(FakeService::with_items(vec![
            SearchResultItem::video("c", "Third by name"),
            SearchResultItem::video("a", "First by name"),
            SearchResultItem::video("b", "Second by name"),
        ]));

        let (result, text) = run(service.clone(), Presentation::AsReturned, "x\n").await;
        result.unwrap();

        assert!(service.stats_calls.lock().unwrap().is_empty());
        let c = text.find("Video Id: c").unwrap();
        let a = text.find("Video Id: a").unwrap();
        let b = text.find("Video Id: b").unwrap();
        assert!(c < a && a < b);
    }

    #[tokio::test]
    async fn test_zero_items_prints_notice_only() {
        for presentation in [Presentation::Ranked, Presentation::AsReturned] {
            let service = Arc::new(FakeService::default());
            let (result, text) = run(service, presentation, "obscure\n").await;

            assert_eq!(result.unwrap().hits, 0);
            assert_eq!(text.matches(NO_RESULTS).count(), 1);
            assert!(!text.contains("Video Id"));
        }
    }

    #[tokio::test]
    async fn test_empty_line_searches_default_query() {
        let service = Arc::new(FakeService::default());
        let (result, text) = run(service.clone(), Presentation::Ranked, "\n").await;
        result.unwrap();

        let queries = service.queries.lock().unwrap();
        assert_eq!(queries[0].query, "YouTube Developers Live");
        assert_eq!(queries[0].published_after_param(), "2026-10-15T18:00:00.000Z");
        assert!(text.contains("search on \"YouTube Developers Live\""));
    }

    #[tokio::test]
    async fn test_service_error_prints_no_results() {
        let service = Arc::new(FakeService {
            fail_search: true,
            ..Default::default()
        });

        let (result, text) = run(service, Presentation::Ranked, "rust\n").await;
        let err = result.unwrap_err();

        let report = err.report();
        assert!(report.contains("403"));
        assert!(report.contains("exceeded your quota"));
        assert_eq!(text, query::PROMPT);
    }

    #[tokio::test]
    async fn test_stats_failure_aborts_before_output() {
        let service = Arc::new(FakeService {
            fail_stats: true,
            ..FakeService::with_items(vec![
                SearchResultItem::video("v1", "One"),
                SearchResultItem::video("v2", "Two"),
            ])
        });

        let (result, text) = run(service.clone(), Presentation::Ranked, "rust\n").await;

        assert!(matches!(result, Err(SearchError::Transport { .. })));
        assert_eq!(*service.stats_calls.lock().unwrap(), vec!["v1"]);
        assert_eq!(text, query::PROMPT);
    }
}
