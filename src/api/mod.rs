//! YouTube Data API access
//!
//! Defines the Endpoint trait, the wire models, and the two endpoints a run
//! talks to, behind the `VideoService` trait.

mod models;
mod service;
mod traits;

pub mod search;
pub mod videos;

pub use models::*;
pub use service::{VideoService, YouTubeClient};
pub use traits::*;
