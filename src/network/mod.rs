//! HTTP networking module
//!
//! Provides the HTTP client used for both API endpoints.

mod client;
mod user_agent;

pub use client::HttpClient;
