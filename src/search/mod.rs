//! Search module
//!
//! Query models and the runner that executes one search end to end.

mod executor;
mod models;

pub use executor::Search;
pub use models::{SearchQuery, SearchResultItem, ORDER_VIEW_COUNT, TYPE_VIDEO};
