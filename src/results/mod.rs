//! Result records, ranking and console output

mod render;
mod types;

pub use render::{Listing, Report, NO_RESULTS};
pub use types::*;
