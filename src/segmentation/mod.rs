pub mod algorithm;
pub mod config;
pub mod runs;

pub use algorithm::segment_durations;
pub use config::{SegmentationConfig, DEFAULT_TIMEOUT_SECS};
pub use runs::{Run, RunMerger};
