//! Download jobs and the archive path convention.

use std::path::{Path, PathBuf};

use super::template::ProductTemplate;
use crate::index::IndexRow;

/// One `(tile, band, epoch)` combination to download.
///
/// Jobs are built from matching index rows and consumed once by
/// [`TileDownloader`](super::TileDownloader). They share nothing with each
/// other; rerunning a job overwrites its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadJob {
    pub tile: String,
    pub band: u32,
    pub epoch: u32,
    pub archive_url: String,
    pub outdir: PathBuf,
}

impl DownloadJob {
    /// Build the job for an index row.
    pub fn from_row(row: &IndexRow, archive_url: &str, outdir: &Path) -> Self {
        Self {
            tile: row.tile_id.clone(),
            band: row.band,
            epoch: row.epoch,
            archive_url: archive_url.to_string(),
            outdir: outdir.to_path_buf(),
        }
    }

    /// Epoch directory name, e.g. `e008`.
    pub fn epoch_dir_name(&self) -> String {
        epoch_dir_name(self.epoch)
    }

    /// Local directory receiving this job's files: `<outdir>/e<epoch:03>`.
    pub fn local_dir(&self) -> PathBuf {
        self.outdir.join(self.epoch_dir_name())
    }

    /// Local file path of a product: `<outdir>/e<epoch:03>/<file>`.
    pub fn local_path(&self, product: &ProductTemplate) -> PathBuf {
        self.local_dir().join(product.render(&self.tile, self.band))
    }

    /// Remote URL of a product:
    /// `<archive>/e<epoch:03>/<tile[..3]>/<tile>/<file>`.
    pub fn remote_url(&self, product: &ProductTemplate) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.archive_url.trim_end_matches('/'),
            self.epoch_dir_name(),
            tile_prefix(&self.tile),
            self.tile,
            product.render(&self.tile, self.band)
        )
    }
}

/// Zero-padded epoch segment used both remotely and locally.
pub fn epoch_dir_name(epoch: u32) -> String {
    format!("e{:03}", epoch)
}

/// First three characters of a tile identifier (the whole id if shorter).
fn tile_prefix(tile: &str) -> &str {
    match tile.char_indices().nth(3) {
        Some((idx, _)) => &tile[..idx],
        None => tile,
    }
}
