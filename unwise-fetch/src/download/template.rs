//! File-name templates for the per-tile data products.

use std::fmt;

use thiserror::Error;

/// Placeholder replaced by the coadd identifier.
const TILE_PLACEHOLDER: &str = "{tile}";

/// Placeholder replaced by the band number.
const BAND_PLACEHOLDER: &str = "{band}";

/// The co-added image product every run downloads unless told otherwise.
pub const DEFAULT_PRODUCT_TEMPLATE: &str = "unwise-{tile}-w{band}-img-m.fits";

/// Rejected product templates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductTemplateError {
    #[error("product template is empty")]
    Empty,

    #[error("product template must not contain path separators: '{0}'")]
    PathSeparator(String),

    #[error("product template must contain {placeholder}: '{template}'")]
    MissingPlaceholder {
        template: String,
        placeholder: &'static str,
    },
}

/// File-name pattern of one data product, e.g. `unwise-{tile}-w{band}-img-m.fits`.
///
/// Rendered names are plain file names: they land directly in the epoch
/// directory locally and at the end of the remote tile path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductTemplate(String);

impl ProductTemplate {
    /// Validate and wrap a template.
    ///
    /// Both `{tile}` and `{band}` must appear so that different rows never
    /// render to the same file name within an epoch directory.
    pub fn new(template: impl Into<String>) -> Result<Self, ProductTemplateError> {
        let template = template.into();
        let trimmed = template.trim();

        if trimmed.is_empty() {
            return Err(ProductTemplateError::Empty);
        }
        if trimmed.contains('/') || trimmed.contains('\\') {
            return Err(ProductTemplateError::PathSeparator(trimmed.to_string()));
        }
        for placeholder in [TILE_PLACEHOLDER, BAND_PLACEHOLDER] {
            if !trimmed.contains(placeholder) {
                return Err(ProductTemplateError::MissingPlaceholder {
                    template: trimmed.to_string(),
                    placeholder,
                });
            }
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Render the file name for a tile and band.
    pub fn render(&self, tile: &str, band: u32) -> String {
        self.0
            .replace(TILE_PLACEHOLDER, tile)
            .replace(BAND_PLACEHOLDER, &band.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProductTemplate {
    fn default() -> Self {
        Self(DEFAULT_PRODUCT_TEMPLATE.to_string())
    }
}

impl fmt::Display for ProductTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ProductTemplate {
    type Err = ProductTemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
