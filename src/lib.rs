//! tubesearch: find the most watched recent YouTube videos for a search term
//!
//! Reads a query from the console, searches the YouTube Data API for videos
//! published in the last day, optionally ranks them by exact view count, and
//! prints the results.

pub mod api;
pub mod config;
pub mod error;
pub mod network;
pub mod query;
pub mod results;
pub mod search;

pub use config::{Presentation, Settings};
pub use error::{SearchError, SearchResult};
pub use search::{Search, SearchQuery};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
