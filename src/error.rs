//! Error types for the labeling core.

use thiserror::Error;

/// Failures surfaced by the labeling core to its caller.
///
/// Malformed CSV rows are not represented here: the codec skips them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LabelError {
    /// Statistics were requested over too few samples.
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Positional removal past the end of the segment collection.
    #[error("Segment index {index} out of range for {len} segments")]
    SegmentIndexOutOfRange { index: usize, len: usize },

    /// Removal by id of a segment that is not in the collection.
    #[error("Segment {0} not found")]
    SegmentNotFound(String),

    /// Writing the labeled export failed.
    #[error("CSV error: {0}")]
    Csv(String),
}

// csv::Error is neither Clone nor PartialEq, so keep only its message.
impl From<csv::Error> for LabelError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl LabelError {
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }
}

pub type Result<T> = std::result::Result<T, LabelError>;
