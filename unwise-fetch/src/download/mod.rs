//! Tile product downloads.
//!
//! A [`DownloadJob`] names one `(tile, band, epoch)` row of the index. The
//! [`TileDownloader`] turns it into archive URLs and local files following the
//! archive layout:
//!
//! ```text
//! remote: <archive>/e<epoch:03>/<tile[..3]>/<tile>/<file>
//! local:  <outdir>/e<epoch:03>/<file>
//! ```
//!
//! File names come from [`ProductTemplate`]s, by default
//! `unwise-<tile>-w<band>-img-m.fits`.

mod downloader;
mod job;
mod template;

pub use downloader::TileDownloader;
pub use job::{epoch_dir_name, DownloadJob};
pub use template::{ProductTemplate, ProductTemplateError, DEFAULT_PRODUCT_TEMPLATE};
