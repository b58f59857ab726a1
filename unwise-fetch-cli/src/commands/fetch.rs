//! Fetch command - download every indexed product of one tile.

use std::path::PathBuf;

use tracing::info;
use unwise_fetch::config::{normalize_archive_url, ConfigFile, FetchConfig};
use unwise_fetch::download::ProductTemplate;
use unwise_fetch::fetcher::TileFetcher;
use unwise_fetch::index::FitsIndexReader;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the fetch command.
#[derive(Debug, Clone, Default)]
pub struct FetchArgs {
    pub outdir: PathBuf,
    pub tile: String,
    pub unwise_path: Option<String>,
    pub index: Option<PathBuf>,
    pub n_workers: Option<usize>,
    pub products: Vec<ProductTemplate>,
    pub config: Option<PathBuf>,
    pub debug: bool,
}

/// Run the fetch command.
pub fn run(args: FetchArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(args.config.as_deref(), args.debug)?;
    runner.log_startup("fetch");

    let config = build_fetch_config(&args, runner.config())?;
    info!(
        tile = config.tile(),
        outdir = %config.outdir().display(),
        archive = config.archive_url(),
        workers = config.workers(),
        "Fetch requested"
    );

    let client = runner.create_client()?;
    let summary = TileFetcher::new(config, client, FitsIndexReader).run()?;

    info!(
        tile = %summary.tile,
        jobs = summary.jobs,
        files = summary.files.len(),
        "Fetch complete"
    );
    println!(
        "Downloaded {} file(s) for tile {} ({} band/epoch combination(s))",
        summary.files.len(),
        summary.tile,
        summary.jobs
    );

    Ok(())
}

/// Merge command-line arguments over the configuration file.
///
/// `--unwise-path` is validated the same way as `[archive] url`.
pub fn build_fetch_config(args: &FetchArgs, file: &ConfigFile) -> Result<FetchConfig, CliError> {
    let archive_url = match &args.unwise_path {
        Some(url) => normalize_archive_url(url)?,
        None => file.archive.url.clone(),
    };
    let workers = args.n_workers.unwrap_or(file.download.workers);
    let products = if args.products.is_empty() {
        file.download.products.clone()
    } else {
        args.products.clone()
    };

    let config = FetchConfig::new(&args.outdir, &args.tile)
        .with_archive_url(archive_url)
        .with_workers(workers)
        .with_products(products);

    Ok(match &args.index {
        Some(index) => config.with_index_path(index),
        None => config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn args() -> FetchArgs {
        FetchArgs {
            outdir: PathBuf::from("/tmp/out"),
            tile: "1612p590".to_string(),
            ..FetchArgs::default()
        }
    }

    #[test]
    fn test_defaults_come_from_config_file() {
        let mut file = ConfigFile::default();
        file.archive.url = "https://example.org/base".to_string();
        file.download.workers = 6;

        let config = build_fetch_config(&args(), &file).unwrap();

        assert_eq!(config.archive_url(), "https://example.org/base");
        assert_eq!(config.workers(), 6);
        assert_eq!(config.products(), &[ProductTemplate::default()]);
        assert!(config.index_path().is_none());
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let mut file = ConfigFile::default();
        file.download.workers = 6;
        let invvar = ProductTemplate::new("unwise-{tile}-w{band}-img-invvar-m.fits.gz").unwrap();
        let args = FetchArgs {
            unwise_path: Some("https://example.org/other".to_string()),
            index: Some(PathBuf::from("/tmp/index.fits")),
            n_workers: Some(2),
            products: vec![invvar.clone()],
            ..args()
        };

        let config = build_fetch_config(&args, &file).unwrap();

        assert_eq!(config.archive_url(), "https://example.org/other");
        assert_eq!(config.workers(), 2);
        assert_eq!(config.products(), &[invvar]);
        assert_eq!(config.index_path(), Some(Path::new("/tmp/index.fits")));
        assert_eq!(config.outdir(), Path::new("/tmp/out"));
        assert_eq!(config.tile(), "1612p590");
    }

    #[test]
    fn test_unwise_path_trailing_slash_trimmed() {
        let args = FetchArgs {
            unwise_path: Some("https://example.org/other/".to_string()),
            ..args()
        };

        let config = build_fetch_config(&args, &ConfigFile::default()).unwrap();

        assert_eq!(config.archive_url(), "https://example.org/other");
    }

    #[test]
    fn test_unwise_path_must_be_http() {
        let args = FetchArgs {
            unwise_path: Some("portal.nersc.gov/neo8".to_string()),
            ..args()
        };

        let err = build_fetch_config(&args, &ConfigFile::default()).unwrap_err();

        assert!(matches!(err, CliError::ArchiveUrl(_)));
    }
}
