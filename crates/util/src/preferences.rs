//! User preference persistence.
//!
//! A small JSON file remembering choices made inside the TUI, currently the
//! preferred theme. Lives at `<config dir>/folio/preferences.json` unless
//! `FOLIO_PREFERENCES_PATH` points elsewhere. When the file cannot be used the
//! caller falls back to [`UserPreferences::ephemeral`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::path_processing::{config_file, env_path_or};

/// Environment variable overriding the preferences file path.
pub const PREFERENCES_PATH_ENV: &str = "FOLIO_PREFERENCES_PATH";

pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("preferences I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("preferences serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// On-disk preference document.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesPayload {
    /// Canonical id of the theme picked with the theme toggle.
    pub preferred_theme: Option<String>,
}

#[derive(Debug)]
pub struct UserPreferences {
    path: Option<PathBuf>,
    payload: Mutex<PreferencesPayload>,
}

impl UserPreferences {
    /// Opens the store at the default (or env-overridden) path.
    pub fn load() -> Result<Self, PreferencesError> {
        Self::open(default_preferences_path())
    }

    /// Opens the store at `path`. A missing file yields defaults; an
    /// unreadable document is logged and replaced by defaults.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PreferencesError> {
        let path = path.into();
        let payload = read_payload(&path)?;
        Ok(Self {
            path: Some(path),
            payload: Mutex::new(payload),
        })
    }

    /// In-memory store that never touches the filesystem.
    pub fn ephemeral() -> Self {
        Self {
            path: None,
            payload: Mutex::new(PreferencesPayload::default()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_persistent(&self) -> bool {
        self.path.is_some()
    }

    pub fn preferred_theme(&self) -> Option<String> {
        self.payload().preferred_theme.clone()
    }

    /// Records the preferred theme and writes the file when persistent.
    pub fn set_preferred_theme(&self, theme_id: Option<String>) -> Result<(), PreferencesError> {
        let mut payload = self.payload();
        payload.preferred_theme = theme_id;
        match &self.path {
            Some(path) => write_payload(path, &payload),
            None => Ok(()),
        }
    }

    fn payload(&self) -> MutexGuard<'_, PreferencesPayload> {
        self.payload.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub fn default_preferences_path() -> PathBuf {
    env_path_or(PREFERENCES_PATH_ENV, || config_file(PREFERENCES_FILE_NAME))
}

fn read_payload(path: &Path) -> Result<PreferencesPayload, PreferencesError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(PreferencesPayload::default()),
        Err(source) => {
            return Err(PreferencesError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    Ok(serde_json::from_str(&data).unwrap_or_else(|error| {
        warn!(path = %path.display(), %error, "ignoring unreadable preferences file");
        PreferencesPayload::default()
    }))
}

fn write_payload(path: &Path, payload: &PreferencesPayload) -> Result<(), PreferencesError> {
    let io_error = |source| PreferencesError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let document = serde_json::to_string_pretty(payload)?;
    fs::write(path, document).map_err(io_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_survives_reopening() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join(PREFERENCES_FILE_NAME);

        let preferences = UserPreferences::open(&path).expect("open");
        assert_eq!(preferences.preferred_theme(), None);
        preferences.set_preferred_theme(Some("nord".into())).expect("save");

        let reopened = UserPreferences::open(&path).expect("reopen");
        assert_eq!(reopened.preferred_theme().as_deref(), Some("nord"));
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(PREFERENCES_FILE_NAME);
        fs::write(&path, "{not json").expect("write");

        let preferences = UserPreferences::open(&path).expect("open");
        assert_eq!(preferences.preferred_theme(), None);
    }

    #[test]
    fn ephemeral_store_keeps_values_in_memory() {
        let preferences = UserPreferences::ephemeral();
        preferences.set_preferred_theme(Some("dracula".into())).expect("set");
        assert_eq!(preferences.preferred_theme().as_deref(), Some("dracula"));
        assert!(!preferences.is_persistent());
    }

    #[test]
    fn env_var_overrides_the_default_path() {
        temp_env::with_var(PREFERENCES_PATH_ENV, Some("/tmp/folio-prefs.json"), || {
            assert_eq!(default_preferences_path(), PathBuf::from("/tmp/folio-prefs.json"));
        });
    }
}
