use uuid::Uuid;

use crate::error::{LabelError, Result};
use crate::models::{Segment, TimeRange};
use crate::segmentation::colors::ColorAllocator;
use crate::log_debug;

const ENABLE_LOGS: bool = true;

/// Insertion-ordered collection of labeled segments.
///
/// Overlapping segments are kept as-is; the resolver decides which label
/// wins for a given sample.
#[derive(Debug, Clone, Default)]
pub struct SegmentStore {
    segments: Vec<Segment>,
}

impl SegmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize `range`, pick the label's color and append a new segment.
    /// `label` must already have the empty-label default applied.
    pub fn add(&mut self, range: TimeRange, label: &str, colors: &mut ColorAllocator) -> Segment {
        let range = range.normalized();
        let segment = Segment {
            id: Uuid::new_v4().to_string(),
            start: range.start,
            end: range.end,
            label: label.to_string(),
            color: colors.color_for(label),
        };

        log_debug!(
            "Added segment {} [{} .. {}] label={}",
            segment.id,
            segment.start,
            segment.end,
            segment.label
        );
        self.segments.push(segment.clone());
        segment
    }

    /// Remove the segment at `index`; later segments shift down by one.
    pub fn remove_at(&mut self, index: usize) -> Result<Segment> {
        if index >= self.segments.len() {
            return Err(LabelError::SegmentIndexOutOfRange {
                index,
                len: self.segments.len(),
            });
        }
        Ok(self.segments.remove(index))
    }

    pub fn remove_by_id(&mut self, id: &str) -> Result<Segment> {
        let index = self
            .segments
            .iter()
            .position(|segment| segment.id == id)
            .ok_or_else(|| LabelError::SegmentNotFound(id.to_string()))?;
        Ok(self.segments.remove(index))
    }

    pub fn all(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }
}
