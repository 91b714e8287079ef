pub mod catalog;
pub mod sample;
pub mod segment;

pub use catalog::{Catalog, CatalogEntry};
pub use sample::Sample;
pub use segment::{Segment, Selection, TimeRange};
