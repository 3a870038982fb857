//! Persisted override file (`ios.config.json`)
//!
//! The file is read-merge-written on every run, so it always mirrors the last
//! resolved settings and can be hand-edited between runs.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::error::{ConfigError, Result};
use crate::types::IosConfig;

use super::defaults::OVERRIDE_CONFIG_FILE;
use super::sources::text_value;

/// Values read back from the override file.
///
/// Parsed leniently: only entries with the expected JSON type are used.
#[derive(Debug, Clone, Default)]
pub struct OverrideConfig {
    entries: Map<String, Value>,
}

impl OverrideConfig {
    /// Wrap an already parsed document; non-objects are treated as empty
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(entries) => Self { entries },
            _ => Self::default(),
        }
    }

    /// A non-empty text value for `key`
    pub fn text(&self, key: &str) -> Option<String> {
        text_value(self.entries.get(key))
    }

    /// `iphoneOnly`, when set to a boolean
    pub fn iphone_only(&self) -> Option<bool> {
        self.entries.get("iphoneOnly").and_then(Value::as_bool)
    }

    /// String-valued entries of `permissions`
    pub fn permissions(&self) -> BTreeMap<String, String> {
        self.object("permissions")
            .map(|map| {
                map.iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Boolean-valued entries of `infoPlist`
    pub fn info_plist_booleans(&self) -> BTreeMap<String, bool> {
        self.object("infoPlist")
            .map(|map| {
                map.iter()
                    .filter_map(|(k, v)| v.as_bool().map(|b| (k.clone(), b)))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn object(&self, key: &str) -> Option<&Map<String, Value>> {
        self.entries.get(key).and_then(Value::as_object)
    }
}

/// Durable store backed by `<root>/ios.config.json`
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store for the project at `root`
    pub fn new(root: &Path) -> Self {
        Self {
            path: root.join(OVERRIDE_CONFIG_FILE),
        }
    }

    /// Location of the override file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the override file; a missing or malformed file reads as empty
    pub fn load(&self) -> OverrideConfig {
        if !self.path.is_file() {
            debug!(path = %self.path.display(), "no override file");
            return OverrideConfig::default();
        }

        let parsed = std::fs::read_to_string(&self.path)
            .map_err(|e| e.to_string())
            .and_then(|content| {
                serde_json::from_str::<Value>(&content).map_err(|e| e.to_string())
            });

        match parsed {
            Ok(value) => OverrideConfig::from_value(value),
            Err(message) => {
                warn!(path = %self.path.display(), error = %message, "invalid override file, starting fresh");
                OverrideConfig::default()
            }
        }
    }

    /// Write `config` as the new override file contents
    pub fn save(&self, config: &IosConfig) -> Result<()> {
        let content = serde_json::to_string_pretty(config)?;

        // Ensure trailing newline
        let content = format!("{}\n", content);

        std::fs::write(&self.path, content).map_err(|e| ConfigError::WriteFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        debug!(path = %self.path.display(), "override file written");
        Ok(())
    }

    /// Replace the team identifier and persist immediately
    pub fn upsert_team_id(&self, config: &mut IosConfig, team_id: &str) -> Result<()> {
        config.team_id = team_id.to_string();
        self.save(config)?;
        info!(team_id, "team id saved to override file");
        Ok(())
    }
}
