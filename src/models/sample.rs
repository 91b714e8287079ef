//! Sample data model.
//!
//! A single `(timestamp, value)` observation of the loaded series.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One observation of a series. Values are always finite.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl Sample {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}
