//! Configuration file handling for ~/.unwise-fetch/config.ini.
//!
//! The file is optional: when it is absent every setting takes its default.
//! Parsing lives in [`super::parser`].
//!
//! ```ini
//! [archive]
//! url = https://portal.nersc.gov/project/cosmo/temp/ameisner/neo8
//!
//! [download]
//! workers = 4
//! timeout = 120
//! products = unwise-{tile}-w{band}-img-m.fits, unwise-{tile}-w{band}-img-invvar-m.fits.gz
//!
//! [logging]
//! file = ~/.unwise-fetch/unwise-fetch.log
//! ```

use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::defaults::{
    config_file_path, default_log_file, DEFAULT_ARCHIVE_URL, DEFAULT_WORKERS,
};
use crate::download::ProductTemplate;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },
}

/// `[archive]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSettings {
    /// Base URL of the unWISE archive
    pub url: String,
}

/// `[download]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadSettings {
    /// Number of concurrent download workers
    pub workers: usize,
    /// HTTP request timeout in seconds; `None` keeps the client default
    pub timeout: Option<u64>,
    /// Products downloaded for every (band, epoch)
    pub products: Vec<ProductTemplate>,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}

/// User configuration loaded from the INI file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub archive: ArchiveSettings,
    pub download: DownloadSettings,
    pub logging: LoggingSettings,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            archive: ArchiveSettings {
                url: DEFAULT_ARCHIVE_URL.to_string(),
            },
            download: DownloadSettings {
                workers: DEFAULT_WORKERS,
                timeout: None,
                products: vec![ProductTemplate::default()],
            },
            logging: LoggingSettings {
                file: default_log_file(),
            },
        }
    }
}

impl ConfigFile {
    /// Load configuration from the default path (~/.unwise-fetch/config.ini).
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }
}
