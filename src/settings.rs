use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::RwLock};

use crate::heartbeat_data::DEFAULT_LEGEND_LENGTH;
use crate::log_warn;
use crate::segmentation::DEFAULT_TIMEOUT_SECS;
use crate::store::OTHER_CATEGORY;

const ENABLE_LOGS: bool = true;

/// Environment variable that overrides the persisted timeout.
pub const TIMEOUT_ENV_VAR: &str = "HEARTBEATS_TIMEOUT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserSettings {
    pub timeout_secs: u32,
    pub legend_length: usize,
    pub other_name: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            legend_length: DEFAULT_LEGEND_LENGTH,
            other_name: OTHER_CATEGORY.into(),
        }
    }
}

impl UserSettings {
    /// Applies `HEARTBEATS_TIMEOUT` when it holds a positive integer.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(timeout) = std::env::var(TIMEOUT_ENV_VAR)
            .ok()
            .and_then(|value| value.trim().parse::<u32>().ok())
            .filter(|&value| value > 0)
        {
            self.timeout_secs = timeout;
        }
        self
    }
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<UserSettings>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_else(|err| {
                log_warn!(
                    "Ignoring unreadable settings in {}: {}; using defaults",
                    path.display(),
                    err
                );
                UserSettings::default()
            })
        } else {
            UserSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn settings(&self) -> Result<UserSettings> {
        let guard = self
            .data
            .read()
            .map_err(|_| anyhow!("settings lock poisoned"))?;
        Ok(guard.clone())
    }

    pub fn update(&self, settings: UserSettings) -> Result<()> {
        let mut guard = self
            .data
            .write()
            .map_err(|_| anyhow!("settings lock poisoned"))?;
        *guard = settings;
        self.persist(&guard)
    }

    fn persist(&self, data: &UserSettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json")).unwrap();

        assert_eq!(store.settings().unwrap(), UserSettings::default());
    }

    #[test]
    fn test_update_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let store = SettingsStore::new(path.clone()).unwrap();
        store
            .update(UserSettings {
                timeout_secs: 300,
                ..UserSettings::default()
            })
            .unwrap();

        let reopened = SettingsStore::new(path).unwrap();
        assert_eq!(reopened.settings().unwrap().timeout_secs, 300);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"legendLength": 4}"#).unwrap();

        let settings = SettingsStore::new(path).unwrap().settings().unwrap();
        assert_eq!(settings.legend_length, 4);
        assert_eq!(settings.timeout_secs, 900);
        assert_eq!(settings.other_name, "Other");
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        let store = SettingsStore::new(path).unwrap();
        assert_eq!(store.settings().unwrap(), UserSettings::default());
    }
}
