//! Per-job download of tile products.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use super::job::DownloadJob;
use super::template::ProductTemplate;
use crate::error::{FetchError, FetchResult};
use crate::http::HttpClient;

/// Downloads every configured product of a [`DownloadJob`].
///
/// The downloader holds no per-job state and is shared by reference across
/// worker threads.
pub struct TileDownloader<C: HttpClient> {
    client: C,
    products: Vec<ProductTemplate>,
}

impl<C: HttpClient> TileDownloader<C> {
    /// Create a downloader fetching `products` for each job.
    ///
    /// An empty product list falls back to the default image product.
    pub fn new(client: C, products: Vec<ProductTemplate>) -> Self {
        let products = if products.is_empty() {
            vec![ProductTemplate::default()]
        } else {
            products
        };
        Self { client, products }
    }

    pub fn products(&self) -> &[ProductTemplate] {
        &self.products
    }

    pub(crate) fn client(&self) -> &C {
        &self.client
    }

    /// Download all products of `job` into its epoch directory.
    ///
    /// The epoch directory is created if needed. A product is written only
    /// after its full body was received; existing files are overwritten.
    /// Returns the written paths in product order.
    pub fn download(&self, job: &DownloadJob) -> FetchResult<Vec<PathBuf>> {
        let dir = job.local_dir();
        fs::create_dir_all(&dir).map_err(|e| FetchError::io(&dir, e))?;

        let mut written = Vec::with_capacity(self.products.len());
        for product in &self.products {
            let file_name = product.render(&job.tile, job.band);
            let url = job.remote_url(product);
            let target = job.local_path(product);

            info!(file = %file_name, epoch = job.epoch, "Downloading {}", file_name);

            let body = self
                .client
                .get(&url)
                .map_err(|source| FetchError::Download {
                    url: url.clone(),
                    source,
                })?;

            fs::write(&target, &body).map_err(|e| FetchError::io(&target, e))?;
            debug!(
                path = %target.display(),
                bytes = body.len(),
                "Product saved"
            );
            written.push(target);
        }

        Ok(written)
    }
}
