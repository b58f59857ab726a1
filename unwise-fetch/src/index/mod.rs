//! Archive index table.
//!
//! The archive publishes a FITS table (`tr_<name>_index.fits`) listing every
//! `(COADD_ID, BAND, EPOCH)` product it holds. This module models the rows,
//! locates or downloads the file ([`IndexResolver`]) and reads it
//! ([`IndexReader`], implemented for FITS by [`FitsIndexReader`]).

mod fits;
mod resolver;

pub use fits::{FitsIndexReader, BAND_COLUMN, EPOCH_COLUMN, TILE_COLUMN};
pub use resolver::{index_file_name, index_url, IndexResolver};

use std::path::Path;

use crate::error::{FetchError, FetchResult};

/// One row of the index table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRow {
    /// Coadd identifier (`COADD_ID`)
    pub tile_id: String,
    /// WISE band (`BAND`)
    pub band: u32,
    /// Epoch number (`EPOCH`)
    pub epoch: u32,
}

impl IndexRow {
    pub fn new(tile_id: impl Into<String>, band: u32, epoch: u32) -> Self {
        Self {
            tile_id: tile_id.into(),
            band,
            epoch,
        }
    }
}

/// Index rows in file order. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexTable {
    rows: Vec<IndexRow>,
}

impl IndexTable {
    pub fn new(rows: Vec<IndexRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[IndexRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows whose tile id equals `tile` exactly, in index order.
    ///
    /// # Errors
    ///
    /// [`FetchError::UnknownTile`] when no row matches.
    pub fn rows_for_tile(&self, tile: &str) -> FetchResult<Vec<&IndexRow>> {
        let rows: Vec<&IndexRow> = self.rows.iter().filter(|r| r.tile_id == tile).collect();
        if rows.is_empty() {
            return Err(FetchError::UnknownTile {
                tile: tile.to_string(),
            });
        }
        Ok(rows)
    }
}

/// Loads an index table from a local file.
///
/// Abstracted so the fetch pipeline can be exercised without FITS fixtures.
pub trait IndexReader: Send + Sync {
    fn read(&self, path: &Path) -> FetchResult<IndexTable>;
}
