//! Console rendering for both presentation policies

use super::types::ResultRecord;
use crate::search::SearchResultItem;
use std::io::{self, Write};

const RANKED_RULE: &str =
    "=====================================================================================";
const AS_RETURNED_RULE: &str = "=============================================================";
const DIVIDER: &str = "-------------------------------------------------------------";

pub const NO_RESULTS: &str = " There aren't any results for your query.";

/// What gets listed under the banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// Videos with view counts, already sorted
    Ranked(Vec<ResultRecord>),
    /// Search hits in endpoint order, non-videos included
    AsReturned(Vec<SearchResultItem>),
}

/// Everything needed to print one run's output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub query: String,
    /// Result cap, printed in the banner
    pub max_results: u32,
    /// Number of items the search endpoint returned
    pub hits: usize,
    pub listing: Listing,
}

impl Report {
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match &self.listing {
            Listing::Ranked(records) => {
                self.banner(
                    out,
                    RANKED_RULE,
                    &format!(
                        "Top {} most watched videos in past 24 hours",
                        self.max_results
                    ),
                )?;
                if self.hits == 0 {
                    writeln!(out, "{}", NO_RESULTS)?;
                }
                for record in records {
                    writeln!(
                        out,
                        " Video Id: {}\t||\t Title: {}\t||\t View Count: {}",
                        record.video_id, record.title, record.view_count
                    )?;
                }
            }
            Listing::AsReturned(items) => {
                self.banner(
                    out,
                    AS_RETURNED_RULE,
                    &format!("First {} videos", self.max_results),
                )?;
                if self.hits == 0 {
                    writeln!(out, "{}", NO_RESULTS)?;
                }
                for item in items {
                    let Some(video_id) = item.as_video() else {
                        continue;
                    };
                    writeln!(out, " Video Id: {}", video_id)?;
                    writeln!(out, " Title: {}", item.title)?;
                    if let Some(ref url) = item.thumbnail_url {
                        writeln!(out, " Thumbnail: {}", url)?;
                    }
                    writeln!(out, "\n{}\n", DIVIDER)?;
                }
            }
        }
        out.flush()
    }

    fn banner<W: Write>(&self, out: &mut W, rule: &str, headline: &str) -> io::Result<()> {
        writeln!(out, "\n{}", rule)?;
        writeln!(
            out,
            "   {} for search on \"{}\".",
            headline, self.query
        )?;
        writeln!(out, "{}\n", rule)
    }
}
