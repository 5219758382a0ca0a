use crate::error::{validate_timeout, HeartbeatError, Result};
use crate::occupancy::config::OccupancyConfig;
use crate::occupancy::matrix::{OccupancyCount, OccupancyMatrix};
use crate::segmentation::RunMerger;
use crate::store::EventStore;
use crate::utils::time::weekday_index;
use crate::{log_debug, log_info};

const ENABLE_LOGS: bool = true;

/// Builds the weekly occupancy matrix from scratch.
///
/// Runs here ignore category: consecutive heartbeats stay in one run as long
/// as they share a date and no gap exceeds `timeout_secs`. Every closed run,
/// including the one still open when the stream ends, adds one to each
/// second it spans on its weekday's row.
pub fn accumulate_occupancy<C: OccupancyCount>(
    store: &EventStore,
    config: &OccupancyConfig,
) -> Result<OccupancyMatrix<C>> {
    let timeout = validate_timeout(config.timeout_secs)?;
    log_info!("Calculating duration counts (timeout={}s)", timeout);

    let mut matrix = OccupancyMatrix::new();
    if store.is_empty() {
        if config.reject_empty {
            return Err(HeartbeatError::EmptyInput);
        }
        return Ok(matrix);
    }

    let mut run_count = 0usize;
    for run in RunMerger::new(store.events(), timeout, |_| ()) {
        matrix.increment_span(weekday_index(run.date), run.start, run.end)?;
        run_count += 1;
    }

    log_debug!(
        "Accumulated {} runs into occupancy matrix (total {})",
        run_count,
        matrix.total()
    );

    Ok(matrix)
}
