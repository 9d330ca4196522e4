//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Reminder interval
//! - Work-hours window
//! - Reminder message and snooze choices
//! - Exercise selection preferences
//!
//! Configuration is stored at `~/.config/stretchbreak/config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::exercise::Difficulty;
use crate::timer::{WorkHoursWindow, MAX_HOUR};

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/stretchbreak/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Minutes between reminders. Never below 1.
    #[serde(default = "default_interval_minutes")]
    pub interval_minutes: u32,
    #[serde(default = "default_work_hours_start")]
    pub work_hours_start: u8,
    #[serde(default = "default_work_hours_end")]
    pub work_hours_end: u8,
    /// When false, reminders are suspended entirely.
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_custom_message")]
    pub custom_message: String,
    #[serde(default)]
    pub preferred_difficulty: Option<Difficulty>,
    /// Snooze choices offered with a reminder, in minutes.
    #[serde(default = "default_snooze_minutes")]
    pub snooze_minutes: Vec<u32>,
    /// Optional TOML file replacing the bundled exercise library.
    #[serde(default)]
    pub exercise_catalog: Option<PathBuf>,
}

/// Keys that accept "none" to clear them.
const OPTIONAL_KEYS: &[&str] = &["preferred_difficulty", "exercise_catalog"];

// Default functions
fn default_interval_minutes() -> u32 {
    30
}
fn default_work_hours_start() -> u8 {
    9
}
fn default_work_hours_end() -> u8 {
    17
}
fn default_true() -> bool {
    true
}
fn default_custom_message() -> String {
    "Time to stretch!".into()
}
fn default_snooze_minutes() -> Vec<u32> {
    vec![5, 10, 15]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval_minutes: default_interval_minutes(),
            work_hours_start: default_work_hours_start(),
            work_hours_end: default_work_hours_end(),
            enabled: true,
            custom_message: default_custom_message(),
            preferred_difficulty: None,
            snooze_minutes: default_snooze_minutes(),
            exercise_catalog: None,
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }
        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
        nullable: bool,
    ) -> Result<(), ConfigError> {
        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(ConfigError::UnknownKey(key.into()));
        }

        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| ConfigError::UnknownKey(key.into()))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| ConfigError::UnknownKey(key.into()))?;

                let new_value = match existing {
                    _ if nullable && value.eq_ignore_ascii_case("none") => serde_json::Value::Null,
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        let n = value
                            .parse::<u64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?;
                        serde_json::Value::Number(n.into())
                    }
                    serde_json::Value::Array(_) => serde_json::from_str(value)
                        .map_err(|e| invalid(e.to_string()))?,
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current
                .get_mut(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.into()))?;
        }

        Err(ConfigError::UnknownKey(key.into()))
    }

    /// Default location of the config file.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults if the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                Ok(cfg.normalized())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!("falling back to default config: {e}");
                Self::default()
            }
        }
    }

    /// Persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Null => Some("none".into()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key, then re-apply the clamps. Does not save.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be parsed.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        let nullable = OPTIONAL_KEYS.contains(&key);
        Self::set_json_value_by_path(&mut json, key, value, nullable)?;
        let updated: Config =
            serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        *self = updated.normalized();
        Ok(())
    }

    pub fn set_interval_minutes(&mut self, minutes: u32) {
        self.interval_minutes = minutes.max(1);
    }

    pub fn set_work_hours(&mut self, start: u8, end: u8) {
        self.work_hours_start = start.min(MAX_HOUR);
        self.work_hours_end = end.min(MAX_HOUR);
    }

    pub fn interval_ms(&self) -> u64 {
        u64::from(self.interval_minutes.max(1)) * 60 * 1000
    }

    pub fn work_hours(&self) -> WorkHoursWindow {
        WorkHoursWindow::new(self.work_hours_start, self.work_hours_end)
    }

    /// Apply the same clamps the setters use to values read from disk.
    fn normalized(mut self) -> Self {
        self.set_interval_minutes(self.interval_minutes);
        self.set_work_hours(self.work_hours_start, self.work_hours_end);
        self.snooze_minutes.retain(|m| *m > 0);
        self
    }
}
