//! Durable key-value settings storage.
//!
//! The language preference survives restarts through this surface. The trait
//! is deliberately narrow: the site stores a single key, and genuine
//! persistence concerns live with whatever implements it.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// A durable string-to-string settings surface.
///
/// `load` is infallible by contract: any read problem is treated as "value
/// absent" so startup never fails on bad persisted state.
pub trait SettingsStore: Send + Sync {
    /// Read a setting. Absent, unreadable, or non-string values are `None`.
    fn load(&self, key: &str) -> Option<String>;

    /// Write a setting.
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

/// Settings persisted as a small JSON object on disk.
pub struct FileSettingsStore {
    path: PathBuf,
    // Write-through cache of the file contents
    values: Mutex<Map<String, Value>>,
}

impl FileSettingsStore {
    /// Open (or lazily create) a settings file.
    ///
    /// A missing file is an empty store. A file that exists but does not
    /// parse is also treated as empty, with a warning; the next `save`
    /// rewrites it.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Map<String, Value>>(&contents) {
                Ok(map) => map,
                Err(e) => {
                    warn!("Ignoring unparseable settings file {:?}: {}", path, e);
                    Map::new()
                }
            },
            Err(_) => Map::new(),
        };

        Self {
            path,
            values: Mutex::new(values),
        }
    }

    fn write_out(&self, values: &Map<String, Value>) -> Result<()> {
        let contents = serde_json::to_string_pretty(values).context("Failed to encode settings")?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write settings file {:?}", self.path))
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self, key: &str) -> Option<String> {
        let values = self.values.lock().unwrap();
        values
            .get(key)
            .and_then(|value| value.as_str())
            .map(|s| s.to_string())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.lock().unwrap();
        values.insert(key.to_string(), Value::String(value.to_string()));
        self.write_out(&values)
    }
}

/// In-memory store for tests and embedding scenarios with no durability
/// requirement.
#[derive(Default)]
pub struct MemorySettingsStore {
    values: Mutex<Map<String, Value>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self, key: &str) -> Option<String> {
        let values = self.values.lock().unwrap();
        values
            .get(key)
            .and_then(|value| value.as_str())
            .map(|s| s.to_string())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.lock().unwrap();
        values.insert(key.to_string(), Value::String(value.to_string()));
        Ok(())
    }
}
