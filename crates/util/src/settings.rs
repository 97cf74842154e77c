//! Application settings loaded from YAML.
//!
//! Every field is optional in the document; anything left out keeps its
//! default. Example:
//!
//! ```yaml
//! navigation:
//!   hide_threshold: 80
//!   visibility:
//!     threshold: 0.3
//!     root_margins: { top: 0.2, bottom: 0.2 }
//!   smooth_scroll_speed: 0.35
//! splash:
//!   duration_ms: 2000
//!   tick_ms: 200
//! layout:
//!   narrow_breakpoint: 100
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use folio_engine::{LoadingSchedule, NavigationSettings};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::path_processing::{config_file, env_path_or};

/// Environment variable overriding the settings file path.
pub const SETTINGS_PATH_ENV: &str = "FOLIO_SETTINGS_PATH";

pub const SETTINGS_FILE_NAME: &str = "settings.yaml";

/// Terminal width below which the navigation collapses into a menu.
pub const DEFAULT_NARROW_BREAKPOINT: u16 = 100;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub narrow_breakpoint: u16,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            narrow_breakpoint: DEFAULT_NARROW_BREAKPOINT,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub navigation: NavigationSettings,
    pub splash: LoadingSchedule,
    pub layout: LayoutSettings,
}

impl Settings {
    /// Loads settings from the default location, falling back to defaults
    /// when the file is missing or unusable.
    pub fn load() -> Self {
        let path = default_settings_path();
        match Self::load_from(&path) {
            Ok(Some(settings)) => {
                debug!(path = %path.display(), "loaded settings");
                settings
            }
            Ok(None) => Self::default(),
            Err(error) => {
                warn!(%error, "using default settings");
                Self::default()
            }
        }
    }

    /// Reads `path`. Returns `Ok(None)` when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>, SettingsError> {
        let document = match fs::read_to_string(path) {
            Ok(document) => document,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        if document.trim().is_empty() {
            return Ok(Some(Self::default()));
        }
        serde_yaml::from_str(&document).map(Some).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

pub fn default_settings_path() -> PathBuf {
    env_path_or(SETTINGS_PATH_ENV, || config_file(SETTINGS_FILE_NAME))
}
