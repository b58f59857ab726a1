//! unwise-fetch CLI - Command-line interface
//!
//! Downloads the unWISE coadd images of one tile into `<outdir>/e<epoch>/`.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::Parser;
use unwise_fetch::download::ProductTemplate;

use commands::fetch::{self, FetchArgs};

#[derive(Parser, Debug)]
#[command(name = "unwise-fetch")]
#[command(version, about = "Download unWISE coadd tiles listed in the archive index", long_about = None)]
struct Args {
    /// Where to save files
    outdir: PathBuf,

    /// What tile to download (e.g., 1612p590)
    tile: String,

    /// Base URL of the unWISE archive [default: from config, else the NEO8 archive]
    #[arg(long)]
    unwise_path: Option<String>,

    /// Pre-fetched index table (downloaded into <OUTDIR> when omitted)
    #[arg(long)]
    index: Option<PathBuf>,

    /// Number of concurrent workers [default: from config, else 1]
    #[arg(long)]
    n_workers: Option<usize>,

    /// Product file template with {tile} and {band} placeholders (repeatable)
    #[arg(long = "product", value_name = "TEMPLATE")]
    products: Vec<ProductTemplate>,

    /// Configuration file [default: ~/.unwise-fetch/config.ini]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl From<Args> for FetchArgs {
    fn from(args: Args) -> Self {
        FetchArgs {
            outdir: args.outdir,
            tile: args.tile,
            unwise_path: args.unwise_path,
            index: args.index,
            n_workers: args.n_workers,
            products: args.products,
            config: args.config,
            debug: args.debug,
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = fetch::run(args.into()) {
        e.exit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_arguments() {
        let args = Args::try_parse_from(["unwise-fetch", "/tmp/out", "1612p590"]).unwrap();

        assert_eq!(args.outdir, PathBuf::from("/tmp/out"));
        assert_eq!(args.tile, "1612p590");
        assert!(args.unwise_path.is_none());
        assert!(args.index.is_none());
        assert!(args.n_workers.is_none());
        assert!(args.products.is_empty());
        assert!(!args.debug);
    }

    #[test]
    fn test_all_options() {
        let args = Args::try_parse_from([
            "unwise-fetch",
            "/tmp/out",
            "1612p590",
            "--unwise-path",
            "https://example.org/base",
            "--index",
            "/tmp/tr_base_index.fits",
            "--n-workers",
            "4",
            "--product",
            "unwise-{tile}-w{band}-img-m.fits",
            "--product",
            "unwise-{tile}-w{band}-img-invvar-m.fits.gz",
            "--debug",
        ])
        .unwrap();

        assert_eq!(args.unwise_path.as_deref(), Some("https://example.org/base"));
        assert_eq!(args.index, Some(PathBuf::from("/tmp/tr_base_index.fits")));
        assert_eq!(args.n_workers, Some(4));
        assert_eq!(args.products.len(), 2);
        assert!(args.debug);
    }

    #[test]
    fn test_missing_tile_is_rejected() {
        assert!(Args::try_parse_from(["unwise-fetch", "/tmp/out"]).is_err());
    }

    #[test]
    fn test_invalid_worker_count_is_rejected() {
        let result =
            Args::try_parse_from(["unwise-fetch", "/tmp/out", "1612p590", "--n-workers", "-2"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_product_is_rejected() {
        let result = Args::try_parse_from([
            "unwise-fetch",
            "/tmp/out",
            "1612p590",
            "--product",
            "no-placeholders.fits",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_convert_to_fetch_args() {
        let args = Args::try_parse_from(["unwise-fetch", "out", "0000p000", "--n-workers", "3"])
            .unwrap();
        let fetch_args = FetchArgs::from(args);
        assert_eq!(fetch_args.tile, "0000p000");
        assert_eq!(fetch_args.n_workers, Some(3));
    }
}
