//! Error type shared by every stage of a fetch run.

use std::path::PathBuf;

use thiserror::Error;

use crate::http::HttpError;

/// Result alias for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Errors that can occur while resolving the index or downloading tiles.
///
/// Every variant names the file or URL that failed so the message alone is
/// enough to diagnose a run.
#[derive(Debug, Error)]
pub enum FetchError {
    /// An explicitly provided index path is missing or not a regular file
    #[error("Index file not found at \"{}\"", path.display())]
    IndexNotFound { path: PathBuf },

    /// The index table could not be downloaded from the archive
    #[error("Unable to download index \"{url}\"")]
    IndexDownload {
        url: String,
        #[source]
        source: HttpError,
    },

    /// The index file exists but could not be read as a FITS table
    #[error("Failed to read index \"{}\": {reason}", path.display())]
    IndexRead { path: PathBuf, reason: String },

    /// The index was readable but its contents are unusable
    #[error("Invalid index \"{}\": {reason}", path.display())]
    InvalidIndex { path: PathBuf, reason: String },

    /// No index row matches the requested tile
    #[error("Invalid tile/coadd ID \"{tile}\"")]
    UnknownTile { tile: String },

    /// The output path exists but is not a directory
    #[error("\"{}\" is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// A tile product could not be downloaded
    #[error("Failed to download \"{url}\"")]
    Download {
        url: String,
        #[source]
        source: HttpError,
    },

    /// Local filesystem operation failed
    #[error("I/O error at \"{}\"", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The worker thread pool could not be started
    #[error("Failed to start worker pool: {0}")]
    WorkerPool(String),
}

impl FetchError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FetchError::Io {
            path: path.into(),
            source,
        }
    }
}
