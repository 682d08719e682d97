//! Endpoint trait and request/response envelopes

use super::models::ErrorResponse;
use crate::error::{SearchError, SearchResult};
use anyhow::Context;

/// HTTP GET to be made against an API endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// URL to request
    pub url: String,
    /// Query parameters, sent in insertion order
    pub params: Vec<(String, String)>,
}

impl ApiRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            params: Vec::new(),
        }
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Look up a query parameter
    pub fn get_param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// HTTP response from an endpoint request
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl ApiResponse {
    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> SearchResult<T> {
        let value = serde_json::from_str(&self.text)
            .with_context(|| format!("Failed to decode response from {}", self.url))?;
        Ok(value)
    }

    /// Build the service error for a non-2xx response
    ///
    /// Prefers the API's error envelope; falls back to the status line.
    pub fn service_error(&self) -> SearchError {
        match serde_json::from_str::<ErrorResponse>(&self.text) {
            Ok(envelope) => SearchError::service(envelope.error.code, envelope.error.message),
            Err(_) => {
                let reason = reqwest::StatusCode::from_u16(self.status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("Unknown status");
                SearchError::service(self.status, reason)
            }
        }
    }

    /// Decode a 2xx body, or turn any other status into a service error
    pub fn into_json<T: serde::de::DeserializeOwned>(self) -> SearchResult<T> {
        if !self.is_success() {
            return Err(self.service_error());
        }
        self.json()
    }
}

/// One remote API operation: build its request, parse its response
pub trait Endpoint: Send + Sync {
    /// Input the request is built from
    type Params: ?Sized;
    /// Value extracted from a successful response
    type Output;

    /// Endpoint name, for logs
    fn name(&self) -> &str;

    /// Build the HTTP request
    fn request(&self, params: &Self::Params) -> ApiRequest;

    /// Parse the HTTP response
    fn response(&self, response: ApiResponse) -> SearchResult<Self::Output>;
}
