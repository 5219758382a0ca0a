pub mod controller;
pub mod state;

pub use controller::{RecomputedEvent, RedrawSink, TimeoutController};
pub use state::{RecomputeTarget, TimeoutState, MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS};
