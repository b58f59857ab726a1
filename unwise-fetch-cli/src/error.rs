//! CLI error handling with user-friendly messages.
//!
//! Every failure ends the process with exit status 1 after printing the
//! error and, where useful, a hint.

use std::fmt;
use std::process;
use unwise_fetch::config::{ConfigFileError, InvalidArchiveUrl};
use unwise_fetch::http::HttpError;
use unwise_fetch::FetchError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration file error
    Config(ConfigFileError),
    /// `--unwise-path` is not an http(s) URL
    ArchiveUrl(InvalidArchiveUrl),
    /// Failed to create the HTTP client
    HttpClient(HttpError),
    /// The fetch run failed
    Fetch(FetchError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        if let Some(hint) = self.hint() {
            eprintln!();
            eprintln!("{}", hint);
        }

        process::exit(1)
    }

    /// Additional help for errors the user can fix directly.
    fn hint(&self) -> Option<&'static str> {
        match self {
            CliError::Fetch(FetchError::UnknownTile { .. }) => Some(
                "Tile identifiers are COADD_IDs such as 1612p590; \
                 check that the tile exists in the archive index.",
            ),
            CliError::Fetch(FetchError::IndexDownload { .. }) => Some(
                "Check --unwise-path, or pass a pre-fetched index with --index.",
            ),
            CliError::Config(_) => Some("Fix or remove the configuration file and retry."),
            CliError::ArchiveUrl(_) => {
                Some("The archive URL must start with http:// or https://.")
            }
            _ => None,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::ArchiveUrl(e) => write!(f, "Invalid --unwise-path: {}", e),
            CliError::HttpClient(e) => write!(f, "{}", e),
            CliError::Fetch(e) => match std::error::Error::source(e) {
                Some(source) => write!(f, "{}: {}", e, source),
                None => write!(f, "{}", e),
            },
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::ArchiveUrl(e) => Some(e),
            CliError::HttpClient(e) => Some(e),
            CliError::Fetch(e) => Some(e),
            CliError::LoggingInit(_) => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<InvalidArchiveUrl> for CliError {
    fn from(e: InvalidArchiveUrl) -> Self {
        CliError::ArchiveUrl(e)
    }
}

impl From<FetchError> for CliError {
    fn from(e: FetchError) -> Self {
        CliError::Fetch(e)
    }
}

impl From<HttpError> for CliError {
    fn from(e: HttpError) -> Self {
        CliError::HttpClient(e)
    }
}
