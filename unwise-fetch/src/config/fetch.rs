//! Run configuration.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::defaults::{DEFAULT_ARCHIVE_URL, DEFAULT_WORKERS};
use crate::download::ProductTemplate;

/// Configuration for a single fetch run.
///
/// Groups every parameter of a run, providing the archive defaults while
/// allowing customization. Values are read-only once the run starts.
///
/// # Example
///
/// ```
/// use unwise_fetch::config::FetchConfig;
///
/// // Using defaults
/// let config = FetchConfig::new("/tmp/out", "1612p590");
/// assert_eq!(config.workers(), 1);
/// assert!(config.index_path().is_none());
///
/// // Custom configuration
/// let config = FetchConfig::new("/tmp/out", "1612p590")
///     .with_index_path("/tmp/tr_neo8_index.fits")
///     .with_workers(8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Directory receiving the index and the per-epoch tile directories
    outdir: PathBuf,
    /// Coadd identifier to download
    tile: String,
    /// Base URL of the archive
    archive_url: String,
    /// Pre-fetched index table, if any
    index_path: Option<PathBuf>,
    /// Number of concurrent download workers
    workers: usize,
    /// File products downloaded for every (band, epoch)
    products: Vec<ProductTemplate>,
}

impl FetchConfig {
    /// Create a configuration for `tile` writing under `outdir`.
    pub fn new(outdir: impl Into<PathBuf>, tile: impl Into<String>) -> Self {
        Self {
            outdir: outdir.into(),
            tile: tile.into(),
            archive_url: DEFAULT_ARCHIVE_URL.to_string(),
            index_path: None,
            workers: DEFAULT_WORKERS,
            products: vec![ProductTemplate::default()],
        }
    }

    /// Set the archive base URL.
    pub fn with_archive_url(mut self, url: impl Into<String>) -> Self {
        self.archive_url = url.into();
        self
    }

    /// Use a pre-fetched index instead of the cached/downloaded one.
    pub fn with_index_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.index_path = Some(path.into());
        self
    }

    /// Set the number of download workers.
    ///
    /// Values of 0 or 1 run sequentially.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Replace the product list.
    ///
    /// An empty list keeps the current products.
    pub fn with_products(mut self, products: Vec<ProductTemplate>) -> Self {
        if !products.is_empty() {
            self.products = products;
        }
        self
    }

    pub fn outdir(&self) -> &Path {
        &self.outdir
    }

    pub fn tile(&self) -> &str {
        &self.tile
    }

    pub fn archive_url(&self) -> &str {
        &self.archive_url
    }

    pub fn index_path(&self) -> Option<&Path> {
        self.index_path.as_deref()
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn products(&self) -> &[ProductTemplate] {
        &self.products
    }
}

/// Archive URL that is not http(s).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\"{0}\" is not an http(s) URL")]
pub struct InvalidArchiveUrl(pub String);

/// Check that `url` is an http(s) URL and strip surrounding blanks and
/// trailing `/`.
pub fn normalize_archive_url(url: &str) -> Result<String, InvalidArchiveUrl> {
    let url = url.trim();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(InvalidArchiveUrl(url.to_string()));
    }
    Ok(url.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FetchConfig::new("/tmp/out", "1612p590");
        assert_eq!(config.outdir(), Path::new("/tmp/out"));
        assert_eq!(config.tile(), "1612p590");
        assert_eq!(config.archive_url(), DEFAULT_ARCHIVE_URL);
        assert_eq!(config.workers(), DEFAULT_WORKERS);
        assert_eq!(config.products(), &[ProductTemplate::default()]);
        assert!(config.index_path().is_none());
    }

    #[test]
    fn test_builder_chain() {
        let products = vec![
            ProductTemplate::default(),
            ProductTemplate::new("unwise-{tile}-w{band}-img-invvar-m.fits.gz").unwrap(),
        ];
        let config = FetchConfig::new("/tmp/out", "1612p590")
            .with_archive_url("https://example.org/base")
            .with_index_path("/tmp/index.fits")
            .with_workers(4)
            .with_products(products.clone());

        assert_eq!(config.archive_url(), "https://example.org/base");
        assert_eq!(config.index_path(), Some(Path::new("/tmp/index.fits")));
        assert_eq!(config.workers(), 4);
        assert_eq!(config.products(), products.as_slice());
    }

    #[test]
    fn test_empty_products_keep_default() {
        let config = FetchConfig::new("/tmp/out", "1612p590").with_products(Vec::new());
        assert_eq!(config.products().len(), 1);
    }

    #[test]
    fn test_normalize_archive_url() {
        assert_eq!(
            normalize_archive_url(" https://example.org/base// ").unwrap(),
            "https://example.org/base"
        );
        assert_eq!(
            normalize_archive_url("http://example.org").unwrap(),
            "http://example.org"
        );
        assert_eq!(
            normalize_archive_url("portal.nersc.gov/neo8"),
            Err(InvalidArchiveUrl("portal.nersc.gov/neo8".to_string()))
        );
    }
}
