pub mod colors;
pub mod config;
pub mod feed;
pub mod resolver;
pub mod store;

pub use colors::ColorAllocator;
pub use config::LabelingConfig;
pub use feed::{ChartFeed, SegmentTrace};
pub use resolver::LabelResolver;
pub use store::SegmentStore;
