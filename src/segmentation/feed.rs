use serde::Serialize;

use crate::models::{Sample, Segment};

/// Samples covered by one segment, with what a renderer needs to draw it.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SegmentTrace {
    pub segment_id: String,
    pub label: String,
    pub color: String,
    pub samples: Vec<Sample>,
}

/// Everything the chart collaborator draws: the base series and one trace
/// per segment, in segment insertion order.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartFeed {
    pub base: Vec<Sample>,
    pub segments: Vec<SegmentTrace>,
}

impl ChartFeed {
    pub fn build(series: &[Sample], segments: &[Segment]) -> Self {
        let traces = segments
            .iter()
            .map(|segment| SegmentTrace {
                segment_id: segment.id.clone(),
                label: segment.label.clone(),
                color: segment.color.clone(),
                samples: series
                    .iter()
                    .filter(|sample| segment.covers(sample))
                    .copied()
                    .collect(),
            })
            .collect();

        Self {
            base: series.to_vec(),
            segments: traces,
        }
    }
}
