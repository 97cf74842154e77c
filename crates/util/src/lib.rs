//! Configuration, preference and content helpers shared by the Folio binary
//! and TUI.

pub mod content;
pub mod logging;
pub mod path_processing;
pub mod preferences;
pub mod settings;

pub use content::{ContentFormat, ContentLoadError, load_portfolio, read_portfolio};
pub use logging::{LOG_PATH_ENV, open_log_file, resolve_log_path};
pub use path_processing::expand_tilde;
pub use preferences::{PREFERENCES_PATH_ENV, PreferencesError, UserPreferences};
pub use settings::{LayoutSettings, SETTINGS_PATH_ENV, Settings, SettingsError};
