use std::collections::HashSet;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::{HeartbeatError, Result};
use crate::log_info;
use crate::models::{DurationMap, HeartbeatInput};
use crate::occupancy::{
    accumulate_occupancy, DefaultCount, OccupancyConfig, OccupancyCount, OccupancyMatrix,
};
use crate::segmentation::{segment_durations, SegmentationConfig};
use crate::store::{CategoryCounter, EventStore};

const ENABLE_LOGS: bool = true;

pub const DEFAULT_LEGEND_LENGTH: usize = 10;

/// One legend slot. The catch-all slot carries no count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

/// Heartbeat store plus the two derived caches.
///
/// Each cache is only written by its `recompute_*` call and is replaced
/// wholesale; a failed recompute leaves the previous value in place.
#[derive(Debug, Clone)]
pub struct HeartbeatData<C: OccupancyCount = DefaultCount> {
    store: EventStore,
    segmentation: SegmentationConfig,
    occupancy_config: OccupancyConfig,
    durations: Option<DurationMap>,
    occupancy: Option<OccupancyMatrix<C>>,
}

impl<C: OccupancyCount> Default for HeartbeatData<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: OccupancyCount> HeartbeatData<C> {
    pub fn new() -> Self {
        Self::with_configs(SegmentationConfig::default(), OccupancyConfig::default())
    }

    pub fn with_configs(
        segmentation: SegmentationConfig,
        occupancy_config: OccupancyConfig,
    ) -> Self {
        Self {
            store: EventStore::new(),
            segmentation,
            occupancy_config,
            durations: None,
            occupancy: None,
        }
    }

    pub fn add_heartbeat(&mut self, category: &str, timestamp: NaiveDateTime) {
        self.store.append(category, timestamp);
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn category_counts(&self) -> &CategoryCounter {
        self.store.category_counts()
    }

    pub fn recompute_durations(&mut self, timeout_secs: u32) -> Result<&DurationMap> {
        let config = SegmentationConfig {
            timeout_secs,
            ..self.segmentation.clone()
        };
        let durations = segment_durations(&self.store, &config)?;
        self.segmentation = config;
        Ok(self.durations.insert(durations))
    }

    pub fn recompute_occupancy(&mut self, timeout_secs: u32) -> Result<&OccupancyMatrix<C>> {
        let config = OccupancyConfig {
            timeout_secs,
            ..self.occupancy_config.clone()
        };
        let matrix = accumulate_occupancy(&self.store, &config)?;
        self.occupancy_config = config;
        Ok(self.occupancy.insert(matrix))
    }

    pub fn durations(&self) -> Result<&DurationMap> {
        self.durations
            .as_ref()
            .ok_or(HeartbeatError::UncomputedState { what: "durations" })
    }

    pub fn occupancy(&self) -> Result<&OccupancyMatrix<C>> {
        self.occupancy.as_ref().ok_or(HeartbeatError::UncomputedState {
            what: "duration counts",
        })
    }

    /// Timeout used by the last successful duration recompute.
    pub fn durations_timeout(&self) -> u32 {
        self.segmentation.timeout_secs
    }

    /// Timeout used by the last successful occupancy recompute.
    pub fn occupancy_timeout(&self) -> u32 {
        self.occupancy_config.timeout_secs
    }

    /// `other_name` followed by the `length - 1` most common categories.
    pub fn legend(&self, length: usize, other_name: &str) -> Vec<LegendEntry> {
        let mut entries = vec![LegendEntry {
            category: other_name.to_string(),
            count: None,
        }];
        entries.extend(
            self.category_counts()
                .most_common(length.saturating_sub(1))
                .into_iter()
                .filter(|(category, _)| *category != other_name)
                .map(|(category, count)| LegendEntry {
                    category: category.to_string(),
                    count: Some(count),
                }),
        );
        entries
    }

    /// Builds the legend and folds every category outside it into
    /// `other_name`, so later recomputes merge them as one category.
    /// Both caches are cleared because they describe the old labels.
    pub fn apply_legend(&mut self, length: usize, other_name: &str) -> Vec<LegendEntry> {
        let entries = self.legend(length, other_name);
        let keep: HashSet<&str> = entries
            .iter()
            .map(|entry| entry.category.as_str())
            .collect();

        let relabeled = self.store.relabel_outside(&keep, other_name);
        if relabeled > 0 {
            log_info!(
                "Folded {} heartbeats outside the top {} categories into {}",
                relabeled,
                length,
                other_name
            );
            self.durations = None;
            self.occupancy = None;
        }
        entries
    }
}

impl<C: OccupancyCount> Extend<HeartbeatInput> for HeartbeatData<C> {
    fn extend<I: IntoIterator<Item = HeartbeatInput>>(&mut self, iter: I) {
        self.store.extend(iter);
    }
}
