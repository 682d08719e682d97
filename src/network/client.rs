//! HTTP client for making requests to the API

use super::user_agent::{accept_json, user_agent};
use crate::api::{ApiRequest, ApiResponse};
use crate::config::OutgoingSettings;
use crate::error::SearchResult;
use anyhow::Context;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;

/// HTTP client wrapper with tubesearch-specific configuration
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> SearchResult<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> SearchResult<Self> {
        let timeout = Duration::try_from_secs_f64(settings.request_timeout).with_context(|| {
            format!("Invalid request timeout {}", settings.request_timeout)
        })?;
        let mut builder = Client::builder().timeout(timeout).gzip(true);

        if let Some(ref proxy_url) = settings.proxy {
            let proxy = reqwest::Proxy::all(proxy_url)
                .with_context(|| format!("Invalid proxy {:?}", proxy_url))?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            user_agent: user_agent(settings.useragent_suffix.as_deref()),
        })
    }

    /// Execute an API request
    ///
    /// Any HTTP status is returned as a response; only failures to complete
    /// the exchange are errors.
    pub async fn execute(&self, request: ApiRequest) -> SearchResult<ApiResponse> {
        let mut req_builder = self
            .client
            .get(&request.url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", accept_json());

        if !request.params.is_empty() {
            req_builder = req_builder.query(&request.params);
        }

        debug!("GET {}", request.url);
        let response = req_builder.send().await?;

        Self::parse_response(response).await
    }

    /// Parse response into ApiResponse
    async fn parse_response(response: Response) -> SearchResult<ApiResponse> {
        let status = response.status().as_u16();
        let url = response.url().path().to_string();
        let text = response.text().await?;

        debug!("{} -> {} ({} bytes)", url, status, text.len());

        Ok(ApiResponse { status, text, url })
    }
}
