/// Default gap tolerance: 15 minutes.
pub const DEFAULT_TIMEOUT_SECS: u32 = 15 * 60;

/// Configuration for the run-length segmentation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentationConfig {
    /// Largest gap (seconds) between consecutive heartbeats of one run
    pub timeout_secs: u32,

    /// Fail with `EmptyInput` instead of returning an empty mapping
    pub reject_empty: bool,
}

impl SegmentationConfig {
    pub fn with_timeout(timeout_secs: u32) -> Self {
        Self {
            timeout_secs,
            ..Self::default()
        }
    }
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            reject_empty: false,
        }
    }
}
