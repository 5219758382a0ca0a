use std::time::Instant;

use serde::Serialize;

use crate::error::Result;
use crate::heartbeat_data::HeartbeatData;
use crate::occupancy::{DefaultCount, OccupancyCount};
use crate::{log_info, log_warn};

use super::{RecomputeTarget, TimeoutState};

const ENABLE_LOGS: bool = true;

/// Payload handed to redraw sinks after each recompute.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecomputedEvent {
    pub target: RecomputeTarget,
    pub timeout_secs: u32,
    /// Number of durations, or the occupancy cell total
    pub size: u64,
    pub elapsed_ms: u64,
}

/// Receives a notification whenever a cache has been rebuilt.
pub trait RedrawSink {
    fn request_redraw(&mut self, event: &RecomputedEvent) -> anyhow::Result<()>;
}

impl<F> RedrawSink for F
where
    F: FnMut(&RecomputedEvent) -> anyhow::Result<()>,
{
    fn request_redraw(&mut self, event: &RecomputedEvent) -> anyhow::Result<()> {
        self(event)
    }
}

/// Drives one cache from a timeout value: every change recomputes
/// synchronously, then notifies the registered sinks.
pub struct TimeoutController<C: OccupancyCount = DefaultCount> {
    data: HeartbeatData<C>,
    target: RecomputeTarget,
    state: TimeoutState,
    sinks: Vec<Box<dyn RedrawSink>>,
}

impl<C: OccupancyCount> TimeoutController<C> {
    pub fn new(data: HeartbeatData<C>, target: RecomputeTarget) -> Self {
        Self {
            data,
            target,
            state: TimeoutState::default(),
            sinks: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, sink: impl RedrawSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    pub fn data(&self) -> &HeartbeatData<C> {
        &self.data
    }

    pub fn into_data(self) -> HeartbeatData<C> {
        self.data
    }

    pub fn state(&self) -> TimeoutState {
        self.state
    }

    pub fn target(&self) -> RecomputeTarget {
        self.target
    }

    /// Clamps `timeout_secs` into the slider range, rebuilds the target
    /// cache, and notifies every sink. The stored timeout only changes once
    /// the rebuild succeeds. A sink failure is logged and does not
    /// stop the others.
    pub fn set_timeout(&mut self, timeout_secs: u32) -> Result<RecomputedEvent> {
        let mut next = self.state;
        let timeout_secs = next.set(timeout_secs);
        let started = Instant::now();

        let size = match self.target {
            RecomputeTarget::Durations => {
                self.data.recompute_durations(timeout_secs)?.total_durations() as u64
            }
            RecomputeTarget::Occupancy => self.data.recompute_occupancy(timeout_secs)?.total(),
        };

        let event = RecomputedEvent {
            target: self.target,
            timeout_secs,
            size,
            elapsed_ms: started.elapsed().as_millis() as u64,
        };
        self.state = next;

        log_info!(
            "Refreshing {} (timeout={}s, size={}, {}ms)",
            self.target.as_str(),
            timeout_secs,
            size,
            event.elapsed_ms
        );

        for sink in self.sinks.iter_mut() {
            if let Err(err) = sink.request_redraw(&event) {
                log_warn!("Redraw request failed: {:#}", err);
            }
        }

        Ok(event)
    }

    /// Recomputes with the current timeout.
    pub fn refresh(&mut self) -> Result<RecomputedEvent> {
        self.set_timeout(self.state.timeout_secs)
    }
}
