//! Log file location and opening.
//!
//! While the TUI owns the terminal, tracing output goes to a file instead of
//! stdout so it does not corrupt the screen.

use std::fs::{File, OpenOptions, create_dir_all};
use std::io;
use std::path::{Path, PathBuf};

use crate::path_processing::{data_file, env_path_or};

/// Environment variable overriding the log file path.
pub const LOG_PATH_ENV: &str = "FOLIO_LOG_PATH";

pub const LOG_FILE_NAME: &str = "folio.log";

pub fn resolve_log_path() -> PathBuf {
    env_path_or(LOG_PATH_ENV, || data_file(LOG_FILE_NAME))
}

/// Opens `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
