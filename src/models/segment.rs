use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Sample;

/// A time range as delivered by a selection gesture. `start` and `end`
/// may arrive in either order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Returns the range with `start <= end`.
    pub fn normalized(self) -> Self {
        if self.start <= self.end {
            self
        } else {
            Self {
                start: self.end,
                end: self.start,
            }
        }
    }
}

/// A user-declared labeled interval. Always stored normalized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub label: String,
    pub color: String,
}

impl Segment {
    /// Inclusive on both ends.
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp >= self.start && timestamp <= self.end
    }

    pub fn covers(&self, sample: &Sample) -> bool {
        self.contains(sample.timestamp)
    }
}

/// Selection as read from a selections file: a range plus the label typed
/// by the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub label: String,
}

impl Selection {
    pub fn range(&self) -> TimeRange {
        TimeRange::new(self.start, self.end)
    }
}
