use chrono::{DateTime, Utc};

use crate::models::{Sample, Segment};

/// Resolves the effective label of a sample against a segment collection.
///
/// When several segments contain a sample, the one added last wins.
#[derive(Debug, Clone, Copy)]
pub struct LabelResolver<'a> {
    segments: &'a [Segment],
    default_label: &'a str,
}

impl<'a> LabelResolver<'a> {
    pub fn new(segments: &'a [Segment], default_label: &'a str) -> Self {
        Self {
            segments,
            default_label,
        }
    }

    pub fn resolve(&self, sample: &Sample) -> &'a str {
        self.resolve_at(sample.timestamp)
    }

    pub fn resolve_at(&self, timestamp: DateTime<Utc>) -> &'a str {
        self.segments
            .iter()
            .rev()
            .find(|segment| segment.contains(timestamp))
            .map(|segment| segment.label.as_str())
            .unwrap_or(self.default_label)
    }
}
