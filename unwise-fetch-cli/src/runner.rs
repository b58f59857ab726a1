//! CLI runner for common setup.
//!
//! Loads the configuration file and initializes logging before a command
//! runs.

use std::path::{Path, PathBuf};

use tracing::info;
use unwise_fetch::config::{ConfigFile, DEFAULT_LOG_FILE_NAME};
use unwise_fetch::http::ReqwestClient;
use unwise_fetch::logging::{init_logging, LoggingGuard};

use crate::error::CliError;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Create a new runner.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Alternate config file; defaults to ~/.unwise-fetch/config.ini
    /// * `debug_mode` - When true, enables debug-level logging regardless of RUST_LOG
    pub fn new(config_path: Option<&Path>, debug_mode: bool) -> Result<Self, CliError> {
        let config = match config_path {
            Some(path) => ConfigFile::load_from(path)?,
            None => ConfigFile::load()?,
        };

        let (log_dir, log_file) = split_log_path(&config.logging.file);
        let logging_guard = init_logging(&log_dir, &log_file, debug_mode)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("unwise-fetch v{}", unwise_fetch::VERSION);
        info!("unwise-fetch CLI: {} command", command);
    }

    /// Create the HTTP client, honoring the configured timeout.
    pub fn create_client(&self) -> Result<ReqwestClient, CliError> {
        let client = match self.config.download.timeout {
            Some(secs) => ReqwestClient::with_timeout(secs)?,
            None => ReqwestClient::new()?,
        };
        Ok(client)
    }
}

/// Split a log file path into directory and file name.
fn split_log_path(path: &Path) -> (PathBuf, String) {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let file = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string());
    (dir, file)
}
