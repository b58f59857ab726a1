//! Locating or downloading the archive index.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{FetchError, FetchResult};
use crate::http::HttpClient;

/// Canonical index file name for an archive: `tr_<last path segment>_index.fits`.
///
/// ```
/// use unwise_fetch::index::index_file_name;
///
/// assert_eq!(
///     index_file_name("https://portal.nersc.gov/project/cosmo/temp/ameisner/neo8"),
///     "tr_neo8_index.fits"
/// );
/// ```
pub fn index_file_name(archive_url: &str) -> String {
    let name = archive_url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();
    format!("tr_{}_index.fits", name)
}

/// Remote URL of the archive index.
pub fn index_url(archive_url: &str) -> String {
    format!(
        "{}/{}",
        archive_url.trim_end_matches('/'),
        index_file_name(archive_url)
    )
}

/// Produces a readable local index path for a run.
pub struct IndexResolver<'a, C: HttpClient> {
    client: &'a C,
    archive_url: &'a str,
    outdir: &'a Path,
}

impl<'a, C: HttpClient> IndexResolver<'a, C> {
    pub fn new(client: &'a C, archive_url: &'a str, outdir: &'a Path) -> Self {
        Self {
            client,
            archive_url,
            outdir,
        }
    }

    /// Path the downloaded index is cached at: `<outdir>/tr_<name>_index.fits`.
    pub fn cached_path(&self) -> PathBuf {
        self.outdir.join(index_file_name(self.archive_url))
    }

    /// Resolve the index file to read.
    ///
    /// An explicit path must already be a regular file. Without one, the
    /// cached index in the output directory is reused, or downloaded from
    /// the archive and saved there first.
    pub fn resolve(&self, explicit: Option<&Path>) -> FetchResult<PathBuf> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(FetchError::IndexNotFound {
                    path: path.to_path_buf(),
                });
            }
            return Ok(path.to_path_buf());
        }

        let path = self.cached_path();
        if path.exists() {
            info!(path = %path.display(), "Using cached index");
            return Ok(path);
        }

        info!(path = %path.display(), "Index not found, downloading");
        let url = index_url(self.archive_url);
        let body = self
            .client
            .get(&url)
            .map_err(|source| FetchError::IndexDownload {
                url: url.clone(),
                source,
            })?;

        fs::write(&path, &body).map_err(|e| FetchError::io(&path, e))?;
        info!(path = %path.display(), bytes = body.len(), "Saved index");

        Ok(path)
    }
}
