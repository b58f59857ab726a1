//! unwise-fetch - Download unWISE coadd tiles from a remote archive
//!
//! This library resolves the archive's FITS index table, selects the rows for
//! a single tile and downloads one set of image products per `(band, epoch)`
//! combination, either sequentially or on a fixed pool of worker threads.
//!
//! # High-Level API
//!
//! For most use cases, the [`fetcher`] module provides a simplified facade:
//!
//! ```ignore
//! use unwise_fetch::config::FetchConfig;
//! use unwise_fetch::fetcher::TileFetcher;
//! use unwise_fetch::http::ReqwestClient;
//! use unwise_fetch::index::FitsIndexReader;
//!
//! let config = FetchConfig::new("/data/unwise", "1612p590").with_workers(4);
//! let fetcher = TileFetcher::new(config, ReqwestClient::new()?, FitsIndexReader);
//! let summary = fetcher.run()?;
//! ```

pub mod config;
pub mod download;
pub mod error;
pub mod executor;
pub mod fetcher;
pub mod http;
pub mod index;
pub mod logging;

pub use error::{FetchError, FetchResult};

/// Version of the unwise-fetch library and CLI.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
