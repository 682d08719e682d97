//! Result type definitions

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Arbitrary-precision, non-negative view count
///
/// Stored as canonical decimal digits (no leading zeros, `"0"` for zero), so
/// comparing by length and then lexicographically is numeric order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewCount(String);

impl ViewCount {
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ViewCount {
    fn default() -> Self {
        Self::zero()
    }
}

/// Error for a view count that is not a non-negative integer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid view count {0:?}")]
pub struct ParseViewCountError(String);

impl FromStr for ViewCount {
    type Err = ParseViewCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseViewCountError(s.to_string()));
        }
        let trimmed = s.trim_start_matches('0');
        if trimmed.is_empty() {
            Ok(Self::zero())
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }
}

impl From<u64> for ViewCount {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl Ord for ViewCount {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for ViewCount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ViewCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ViewCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

// The API sends counts as JSON strings; plain numbers are accepted too.
impl<'de> Deserialize<'de> for ViewCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ViewCountVisitor;

        impl<'de> Visitor<'de> for ViewCountVisitor {
            type Value = ViewCount;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a non-negative integer or a string of digits")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ViewCount, E> {
                Ok(ViewCount::from(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<ViewCount, E> {
                u64::try_from(v)
                    .map(ViewCount::from)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ViewCount, E> {
                v.parse()
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(ViewCountVisitor)
    }
}

/// A video with its view count, ready for ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRecord {
    pub video_id: String,
    pub title: String,
    pub view_count: ViewCount,
}

impl ResultRecord {
    pub fn new(video_id: impl Into<String>, title: impl Into<String>, view_count: ViewCount) -> Self {
        Self {
            video_id: video_id.into(),
            title: title.into(),
            view_count,
        }
    }
}

/// Sort most watched first; equal counts keep their original order
pub fn rank_by_views(records: &mut [ResultRecord]) {
    records.sort_by(|a, b| b.view_count.cmp(&a.view_count));
}
