//! Persisted user preferences.
//!
//! The only preference is the week start, stored in
//! `<config dir>/git-year/config.toml`:
//!
//! ```toml
//! week_start = "sunday"
//! ```

use crate::error::{GitYearError, Result};
use crate::model::WeekStart;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UserConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_start: Option<String>,
}

/// Base directory for per-user configuration: `$XDG_CONFIG_HOME`, the
/// roaming app-data folder on Windows, otherwise `~/.config`.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(xdg));
    }
    if cfg!(windows) {
        dirs::config_dir()
    } else {
        dirs::home_dir().map(|home| home.join(".config"))
    }
}

pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn default_location() -> Option<Self> {
        config_dir().map(|dir| Self::new(dir.join("git-year").join("config.toml")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved week start, or `None` when nothing usable is stored. A missing or
    /// broken file never fails the run.
    pub fn load_week_start(&self) -> Option<WeekStart> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                tracing::debug!(path = %self.path.display(), error = %err, "no saved preferences");
                return None;
            }
        };

        let config: UserConfig = match toml::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "ignoring malformed config file");
                return None;
            }
        };

        let value = config.week_start?;
        match value.parse() {
            Ok(week_start) => Some(week_start),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "ignoring saved week start");
                None
            }
        }
    }

    pub fn save_week_start(&self, week_start: WeekStart) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let config = UserConfig {
            week_start: Some(week_start.as_str().to_string()),
        };
        let content = toml::to_string(&config).map_err(|e| GitYearError::Config(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        tracing::debug!(path = %self.path.display(), %week_start, "saved week start");
        Ok(())
    }
}

/// Pick the week start for this run. An explicit choice wins and is
/// remembered; otherwise the saved preference, then Monday.
pub fn resolve_week_start(explicit: Option<WeekStart>, store: Option<&PreferenceStore>) -> WeekStart {
    if let Some(week_start) = explicit {
        if let Some(store) = store {
            if let Err(err) = store.save_week_start(week_start) {
                tracing::warn!(path = %store.path().display(), error = %err, "could not save week start");
            }
        }
        return week_start;
    }

    store
        .and_then(PreferenceStore::load_week_start)
        .unwrap_or_default()
}
