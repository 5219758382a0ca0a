pub mod duration;
pub mod heartbeat;

pub use duration::{DayDurations, Duration, DurationMap};
pub use heartbeat::HeartbeatInput;
