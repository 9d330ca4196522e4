//! Persistent settings with change notification.
//!
//! Every mutation is clamped, written to disk (when the store has a path)
//! and then broadcast to watchers through a `tokio::sync::watch` channel.

use std::path::{Path, PathBuf};

use tokio::sync::watch;

use super::Config;
use crate::error::Result;
use crate::exercise::Difficulty;

#[derive(Debug)]
pub struct SettingsStore {
    path: Option<PathBuf>,
    tx: watch::Sender<Config>,
}

impl SettingsStore {
    /// Open the store at the default config location.
    pub fn open() -> Result<Self> {
        Self::open_at(&Config::path()?)
    }

    /// Open the store backed by `path`, creating the file with defaults if
    /// it does not exist.
    pub fn open_at(path: &Path) -> Result<Self> {
        let config = Config::load_from(path)?;
        Ok(Self::with_config(config, Some(path.to_path_buf())))
    }

    /// Store that never touches the filesystem.
    pub fn in_memory(config: Config) -> Self {
        Self::with_config(config, None)
    }

    fn with_config(config: Config, path: Option<PathBuf>) -> Self {
        let (tx, _rx) = watch::channel(config);
        Self { path, tx }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Current settings.
    pub fn settings(&self) -> Config {
        self.tx.borrow().clone()
    }

    /// Receiver that is notified after every change.
    pub fn watch(&self) -> watch::Receiver<Config> {
        self.tx.subscribe()
    }

    pub fn set_interval_minutes(&self, minutes: u32) -> Result<Config> {
        self.update(|c| c.set_interval_minutes(minutes))
    }

    pub fn set_work_hours(&self, start: u8, end: u8) -> Result<Config> {
        self.update(|c| c.set_work_hours(start, end))
    }

    pub fn toggle_enabled(&self) -> Result<Config> {
        self.update(|c| c.enabled = !c.enabled)
    }

    pub fn set_custom_message(&self, message: &str) -> Result<Config> {
        self.update(|c| c.custom_message = message.to_string())
    }

    pub fn set_preferred_difficulty(&self, difficulty: Option<Difficulty>) -> Result<Config> {
        self.update(|c| c.preferred_difficulty = difficulty)
    }

    /// Set any key by name, with the same parsing as [`Config::set`].
    pub fn set(&self, key: &str, value: &str) -> Result<Config> {
        let mut next = self.settings();
        next.set(key, value)?;
        self.commit(next)
    }

    pub fn reset_to_defaults(&self) -> Result<Config> {
        self.commit(Config::default())
    }

    fn update(&self, f: impl FnOnce(&mut Config)) -> Result<Config> {
        let mut next = self.settings();
        f(&mut next);
        self.commit(next)
    }

    /// Persist first so a failed write leaves watchers on the old value.
    fn commit(&self, next: Config) -> Result<Config> {
        if let Some(path) = &self.path {
            next.save_to(path)?;
        }
        tracing::debug!(?next, "settings changed");
        self.tx.send_replace(next.clone());
        Ok(next)
    }
}
