//! FITS reader for the archive index table.

use std::path::Path;

use fitsio::FitsFile;
use tracing::debug;

use super::{IndexReader, IndexRow, IndexTable};
use crate::error::{FetchError, FetchResult};

/// Coadd identifier column.
pub const TILE_COLUMN: &str = "COADD_ID";

/// Band column.
pub const BAND_COLUMN: &str = "BAND";

/// Epoch column.
pub const EPOCH_COLUMN: &str = "EPOCH";

/// Reads the index from the first extension (HDU 1) of a FITS file.
///
/// Only the `COADD_ID`, `BAND` and `EPOCH` columns are read; any other
/// columns in the table are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct FitsIndexReader;

impl IndexReader for FitsIndexReader {
    fn read(&self, path: &Path) -> FetchResult<IndexTable> {
        let read_err = |e: fitsio::errors::Error| FetchError::IndexRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };

        let mut fptr = FitsFile::open(path).map_err(read_err)?;
        let hdu = fptr.hdu(1).map_err(read_err)?;

        let tiles: Vec<String> = hdu.read_col(&mut fptr, TILE_COLUMN).map_err(read_err)?;
        let bands: Vec<i32> = hdu.read_col(&mut fptr, BAND_COLUMN).map_err(read_err)?;
        let epochs: Vec<i32> = hdu.read_col(&mut fptr, EPOCH_COLUMN).map_err(read_err)?;

        let table = build_table(path, tiles, bands, epochs)?;
        debug!(path = %path.display(), rows = table.len(), "Index loaded");
        Ok(table)
    }
}

/// Zip the index columns into rows, validating lengths and value ranges.
fn build_table(
    path: &Path,
    tiles: Vec<String>,
    bands: Vec<i32>,
    epochs: Vec<i32>,
) -> FetchResult<IndexTable> {
    let invalid = |reason: String| FetchError::InvalidIndex {
        path: path.to_path_buf(),
        reason,
    };

    if tiles.len() != bands.len() || tiles.len() != epochs.len() {
        return Err(invalid(format!(
            "column lengths differ ({}={}, {}={}, {}={})",
            TILE_COLUMN,
            tiles.len(),
            BAND_COLUMN,
            bands.len(),
            EPOCH_COLUMN,
            epochs.len()
        )));
    }

    tiles
        .into_iter()
        .zip(bands)
        .zip(epochs)
        .enumerate()
        .map(|(i, ((tile, band), epoch))| {
            let band = u32::try_from(band)
                .map_err(|_| invalid(format!("row {}: {} out of range: {}", i, BAND_COLUMN, band)))?;
            let epoch = u32::try_from(epoch).map_err(|_| {
                invalid(format!("row {}: {} out of range: {}", i, EPOCH_COLUMN, epoch))
            })?;
            Ok(IndexRow::new(tile.trim_end(), band, epoch))
        })
        .collect::<FetchResult<Vec<_>>>()
        .map(IndexTable::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitsio::tables::{ColumnDataType, ColumnDescription};
    use tempfile::TempDir;

    fn write_index(path: &Path, tiles: &[&str], bands: &[i32], epochs: &[i32]) {
        let mut fptr = FitsFile::create(path).open().unwrap();
        let columns = [
            ColumnDescription::new(TILE_COLUMN)
                .with_type(ColumnDataType::String)
                .that_repeats(8)
                .create()
                .unwrap(),
            ColumnDescription::new(BAND_COLUMN)
                .with_type(ColumnDataType::Int)
                .create()
                .unwrap(),
            ColumnDescription::new(EPOCH_COLUMN)
                .with_type(ColumnDataType::Int)
                .create()
                .unwrap(),
        ];
        let hdu = fptr.create_table("INDEX".to_string(), &columns).unwrap();
        let tiles: Vec<String> = tiles.iter().map(|t| t.to_string()).collect();
        hdu.write_col(&mut fptr, TILE_COLUMN, &tiles).unwrap();
        hdu.write_col(&mut fptr, BAND_COLUMN, bands).unwrap();
        hdu.write_col(&mut fptr, EPOCH_COLUMN, epochs).unwrap();
    }

    #[test]
    fn test_reads_rows_in_file_order() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tr_neo8_index.fits");
        write_index(
            &path,
            &["1612p590", "0000p000", "1612p590"],
            &[1, 1, 2],
            &[0, 3, 8],
        );

        let table = FitsIndexReader.read(&path).unwrap();

        assert_eq!(
            table.rows(),
            &[
                IndexRow::new("1612p590", 1, 0),
                IndexRow::new("0000p000", 1, 3),
                IndexRow::new("1612p590", 2, 8),
            ]
        );
    }

    #[test]
    fn test_short_tile_ids_are_trimmed() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("index.fits");
        write_index(&path, &["abc"], &[1], &[0]);

        let table = FitsIndexReader.read(&path).unwrap();
        assert_eq!(table.rows()[0].tile_id, "abc");
    }

    #[test]
    fn test_not_a_fits_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("index.fits");
        std::fs::write(&path, b"<html>not found</html>").unwrap();

        let err = FitsIndexReader.read(&path).unwrap_err();
        assert!(matches!(err, FetchError::IndexRead { .. }));
    }

    #[test]
    fn test_negative_epoch_rejected() {
        let err = build_table(
            Path::new("index.fits"),
            vec!["1612p590".to_string()],
            vec![1],
            vec![-1],
        )
        .unwrap_err();
        assert!(err.to_string().contains("EPOCH"));
    }

    #[test]
    fn test_column_length_mismatch_rejected() {
        let err = build_table(
            Path::new("index.fits"),
            vec!["1612p590".to_string(), "0000p000".to_string()],
            vec![1],
            vec![0, 0],
        )
        .unwrap_err();
        assert!(matches!(err, FetchError::InvalidIndex { .. }));
    }
}
