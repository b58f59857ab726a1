//! Default values and well-known paths.

use std::path::PathBuf;

/// Default archive base URL (the NEO8 unWISE time-resolved coadds).
pub const DEFAULT_ARCHIVE_URL: &str = "https://portal.nersc.gov/project/cosmo/temp/ameisner/neo8";

/// Default number of download workers (sequential).
pub const DEFAULT_WORKERS: usize = 1;

/// Default log file name inside the config directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "unwise-fetch.log";

/// Get the path to the config directory (~/.unwise-fetch).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".unwise-fetch")
}

/// Get the path to the config file (~/.unwise-fetch/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

/// Get the default log file path (~/.unwise-fetch/unwise-fetch.log).
pub fn default_log_file() -> PathBuf {
    config_directory().join(DEFAULT_LOG_FILE_NAME)
}
