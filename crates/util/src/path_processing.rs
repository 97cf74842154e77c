use std::env;
use std::path::PathBuf;

use dirs_next::{config_dir, data_dir, home_dir};

/// Directory name used under the platform config and data directories.
pub const APP_DIR_NAME: &str = "folio";

/// Expands a leading `~` to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    let trimmed = path.trim();
    let home = || home_dir().unwrap_or_else(|| PathBuf::from("~"));
    if trimmed == "~" {
        return home();
    }
    if let Some(rest) = trimmed.strip_prefix("~/").or_else(|| trimmed.strip_prefix("~\\")) {
        return home().join(rest);
    }
    PathBuf::from(trimmed)
}

/// Path from `env_key` when set and non-empty, otherwise `fallback`.
pub fn env_path_or(env_key: &str, fallback: impl FnOnce() -> PathBuf) -> PathBuf {
    match env::var(env_key) {
        Ok(value) if !value.trim().is_empty() => expand_tilde(&value),
        _ => fallback(),
    }
}

/// `<config dir>/folio/<file_name>`, or `./folio/<file_name>` without one.
pub fn config_file(file_name: &str) -> PathBuf {
    config_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR_NAME).join(file_name)
}

/// `<data dir>/folio/<file_name>`, or `./folio/<file_name>` without one.
pub fn data_file(file_name: &str) -> PathBuf {
    data_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR_NAME).join(file_name)
}
