use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One activity sample as handed to the store: a category label and the
/// local wall-clock time it was observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartbeatInput {
    #[serde(default)]
    pub category: String,
    pub timestamp: NaiveDateTime,
}

impl HeartbeatInput {
    pub fn new(category: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            category: category.into(),
            timestamp,
        }
    }
}
