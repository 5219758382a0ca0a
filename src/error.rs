use thiserror::Error;

/// Errors raised by the segmentation and occupancy engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeartbeatError {
    #[error("Tried to read {what} before they have been calculated")]
    UncomputedState { what: &'static str },

    #[error("No heartbeats have been recorded")]
    EmptyInput,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Occupancy count overflowed at weekday {weekday}, second {second}")]
    CountOverflow { weekday: usize, second: usize },
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, HeartbeatError>;

/// Rejects a zero timeout; every other `u32` is a usable gap tolerance.
pub(crate) fn validate_timeout(timeout_secs: u32) -> Result<u32> {
    if timeout_secs == 0 {
        return Err(HeartbeatError::InvalidArgument(
            "timeout must be greater than zero".into(),
        ));
    }
    Ok(timeout_secs)
}
