use crate::segmentation::DEFAULT_TIMEOUT_SECS;

/// Configuration for the weekly occupancy pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyConfig {
    /// Largest gap (seconds) between consecutive heartbeats of one run
    pub timeout_secs: u32,

    /// Fail with `EmptyInput` instead of returning an all-zero matrix
    pub reject_empty: bool,
}

impl OccupancyConfig {
    pub fn with_timeout(timeout_secs: u32) -> Self {
        Self {
            timeout_secs,
            ..Self::default()
        }
    }
}

impl Default for OccupancyConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            reject_empty: false,
        }
    }
}
