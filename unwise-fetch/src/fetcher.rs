//! High-level facade running a complete tile fetch.
//!
//! ```text
//! prepare outdir → resolve index → read index → filter rows → build jobs → execute
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::FetchConfig;
use crate::download::{DownloadJob, TileDownloader};
use crate::error::{FetchError, FetchResult};
use crate::executor::JobExecutor;
use crate::http::HttpClient;
use crate::index::{IndexReader, IndexResolver, IndexTable};

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSummary {
    /// Requested tile
    pub tile: String,
    /// Index file the jobs were taken from
    pub index_path: PathBuf,
    /// Number of `(band, epoch)` jobs executed
    pub jobs: usize,
    /// Files written
    pub files: Vec<PathBuf>,
}

/// Downloads every indexed product of one tile.
pub struct TileFetcher<C: HttpClient, R: IndexReader> {
    config: FetchConfig,
    downloader: TileDownloader<C>,
    reader: R,
}

impl<C: HttpClient, R: IndexReader> TileFetcher<C, R> {
    pub fn new(config: FetchConfig, client: C, reader: R) -> Self {
        let downloader = TileDownloader::new(client, config.products().to_vec());
        Self {
            config,
            downloader,
            reader,
        }
    }

    /// Run the fetch.
    ///
    /// Nothing is downloaded when the tile has no index rows.
    pub fn run(&self) -> FetchResult<FetchSummary> {
        let outdir = self.config.outdir();
        prepare_output_dir(outdir)?;

        let index_path = IndexResolver::new(
            self.client(),
            self.config.archive_url(),
            outdir,
        )
        .resolve(self.config.index_path())?;
        let index = self.reader.read(&index_path)?;

        let jobs = self.build_jobs(&index)?;
        info!(
            tile = self.config.tile(),
            jobs = jobs.len(),
            workers = self.config.workers(),
            "Tile found in index"
        );

        let report = JobExecutor::new(self.config.workers()).execute(&jobs, &self.downloader)?;

        Ok(FetchSummary {
            tile: self.config.tile().to_string(),
            index_path,
            jobs: report.completed,
            files: report.files,
        })
    }

    /// One job per index row of the configured tile, in index order.
    pub fn build_jobs(&self, index: &IndexTable) -> FetchResult<Vec<DownloadJob>> {
        let rows = index.rows_for_tile(self.config.tile())?;
        Ok(rows
            .into_iter()
            .map(|row| DownloadJob::from_row(row, self.config.archive_url(), self.config.outdir()))
            .collect())
    }

    fn client(&self) -> &C {
        self.downloader.client()
    }
}

/// Create the output directory if missing.
///
/// # Errors
///
/// [`FetchError::NotADirectory`] if the path exists but is not a directory.
pub fn prepare_output_dir(outdir: &Path) -> FetchResult<()> {
    if outdir.exists() {
        if !outdir.is_dir() {
            return Err(FetchError::NotADirectory {
                path: outdir.to_path_buf(),
            });
        }
        return Ok(());
    }

    fs::create_dir_all(outdir).map_err(|e| FetchError::io(outdir, e))?;
    info!(path = %outdir.display(), "Created output directory");
    Ok(())
}
