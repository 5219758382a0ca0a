use crate::error::{validate_timeout, HeartbeatError, Result};
use crate::models::{Duration, DurationMap};
use crate::segmentation::config::SegmentationConfig;
use crate::segmentation::runs::RunMerger;
use crate::store::EventStore;
use crate::{log_debug, log_info};

const ENABLE_LOGS: bool = true;

/// Main segmentation function: merges the store's heartbeats into per-day
/// runs of one category.
///
/// A run closes when the category changes, the date changes, or the next
/// heartbeat lands more than `timeout_secs` after the run's last one. The
/// run still open at the end of the stream is always emitted.
pub fn segment_durations(store: &EventStore, config: &SegmentationConfig) -> Result<DurationMap> {
    let timeout = validate_timeout(config.timeout_secs)?;
    log_info!("Calculating durations (timeout={}s)", timeout);

    // Edge case: nothing recorded yet
    if store.is_empty() {
        if config.reject_empty {
            return Err(HeartbeatError::EmptyInput);
        }
        return Ok(DurationMap::new());
    }

    let mut durations = DurationMap::new();
    for run in RunMerger::new(store.events(), timeout, |category| category) {
        durations.push(
            run.date,
            Duration {
                category: run.key.to_string(),
                start_second: run.start,
                length_seconds: run.length(),
            },
        );
    }

    log_debug!(
        "Segmented {} heartbeats into {} durations over {} days",
        store.len(),
        durations.total_durations(),
        durations.len()
    );

    Ok(durations)
}
