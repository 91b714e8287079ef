//! CSV import/export for series, catalogs and labeled exports.
//!
//! The format is deliberately minimal: comma-separated, no quoting, first
//! line always a header. Malformed rows are skipped rather than failing the
//! whole parse.

pub mod parse;
pub mod serialize;
pub mod timestamp;

pub use parse::{parse_catalog, parse_samples, parse_samples_detailed, Parsed};
pub use serialize::{export_file_name, serialize_labeled, EXPORT_COLUMNS};
pub use timestamp::{format_timestamp, parse_timestamp};
