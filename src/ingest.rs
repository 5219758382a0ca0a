use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::HeartbeatInput;

/// Reads heartbeats from `path`, either a JSON array or one JSON object per
/// line. Blank lines are skipped.
pub fn load_heartbeats(path: &Path) -> Result<Vec<HeartbeatInput>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read heartbeats from {}", path.display()))?;
    parse_heartbeats(&contents)
        .with_context(|| format!("Failed to parse heartbeats in {}", path.display()))
}

pub fn parse_heartbeats(contents: &str) -> Result<Vec<HeartbeatInput>> {
    if contents.trim_start().starts_with('[') {
        return serde_json::from_str(contents).context("invalid heartbeat array");
    }

    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("invalid heartbeat on line {}", idx + 1))
        })
        .collect()
}
