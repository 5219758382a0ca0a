use serde::{Deserialize, Serialize};

use crate::segmentation::DEFAULT_TIMEOUT_SECS;
use crate::utils::time::SECS_IN_DAY;

pub const MIN_TIMEOUT_SECS: u32 = 1;
pub const MAX_TIMEOUT_SECS: u32 = SECS_IN_DAY;

/// Which cache a timeout drives.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RecomputeTarget {
    Durations,
    Occupancy,
}

impl RecomputeTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecomputeTarget::Durations => "durations",
            RecomputeTarget::Occupancy => "occupancy",
        }
    }
}

/// Current timeout value, kept inside the slider range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeoutState {
    pub timeout_secs: u32,
}

impl Default for TimeoutState {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl TimeoutState {
    pub fn new(timeout_secs: u32) -> Self {
        let mut state = Self::default();
        state.set(timeout_secs);
        state
    }

    /// Stores `timeout_secs` clamped to [`MIN_TIMEOUT_SECS`, `MAX_TIMEOUT_SECS`]
    /// and returns the stored value.
    pub fn set(&mut self, timeout_secs: u32) -> u32 {
        self.timeout_secs = timeout_secs.clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS);
        self.timeout_secs
    }
}
