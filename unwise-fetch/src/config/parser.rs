//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::fetch::normalize_archive_url;
use super::file::{ConfigFile, ConfigFileError};
use crate::download::ProductTemplate;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [archive] section
    if let Some(section) = ini.section(Some("archive")) {
        if let Some(v) = section.get("url") {
            config.archive.url = normalize_archive_url(v)
                .map_err(|_| invalid("archive", "url", v.trim(), "must be an http(s) URL"))?;
        }
    }

    // [download] section
    if let Some(section) = ini.section(Some("download")) {
        if let Some(v) = section.get("workers") {
            config.download.workers = v
                .trim()
                .parse()
                .map_err(|_| invalid("download", "workers", v, "expected a whole number"))?;
        }
        if let Some(v) = section.get("timeout") {
            let v = v.trim();
            if !v.is_empty() {
                let secs: u64 = v.parse().map_err(|_| {
                    invalid("download", "timeout", v, "expected a number of seconds")
                })?;
                if secs == 0 {
                    return Err(invalid("download", "timeout", v, "must be greater than 0"));
                }
                config.download.timeout = Some(secs);
            }
        }
        if let Some(v) = section.get("products") {
            let products = v
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(|p| {
                    ProductTemplate::new(p)
                        .map_err(|e| invalid("download", "products", p, &e.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            if !products.is_empty() {
                config.download.products = products;
            }
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Expand a leading `~` to the home directory.
fn expand_tilde(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(rest),
        None => PathBuf::from(path),
    }
}
