//! Configuration types for unwise-fetch.
//!
//! Two layers:
//!
//! - [`FetchConfig`] is the explicit, read-only configuration of a single run.
//!   It is built once (usually by the CLI) and passed to every component.
//! - [`ConfigFile`] is the optional user configuration at
//!   `~/.unwise-fetch/config.ini` that supplies defaults for the CLI flags.
//!
//! # Example
//!
//! ```
//! use unwise_fetch::config::FetchConfig;
//!
//! let config = FetchConfig::new("/data/unwise", "1612p590")
//!     .with_archive_url("https://example.org/base")
//!     .with_workers(4);
//! assert_eq!(config.workers(), 4);
//! ```

mod defaults;
mod fetch;
mod file;
mod parser;

pub use defaults::{
    config_directory, config_file_path, DEFAULT_ARCHIVE_URL, DEFAULT_LOG_FILE_NAME,
    DEFAULT_WORKERS,
};
pub use fetch::{normalize_archive_url, FetchConfig, InvalidArchiveUrl};
pub use file::{ArchiveSettings, ConfigFile, ConfigFileError, DownloadSettings, LoggingSettings};
