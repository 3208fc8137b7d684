//! Item catalogs.
//!
//! A catalog is a file listing the search keys to index. The format is chosen
//! from the file extension:
//!
//! - `.json`: an array of strings, `["hotdog", "hot sandwhich"]`
//! - `.toml`: a table with an `items` array, `items = ["hotdog"]`
//! - anything else: one search key per line, blank lines skipped

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::catalog::CatalogError;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Deserialize)]
struct TomlCatalog {
    items: Vec<String>,
}

/// Supported catalog layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// JSON array of strings
    Json,
    /// TOML table with an `items` array
    Toml,
    /// One key per line
    Lines,
}

impl CatalogFormat {
    /// Picks the format matching the extension of `path`.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::Json,
            Some("toml") => Self::Toml,
            _ => Self::Lines,
        }
    }
}

/// Reads the search keys listed in the catalog at `path`.
///
/// # Arguments
///
/// * `path` - The catalog file.
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The keys, in file order.
/// * `Err(CatalogError)` - If the file cannot be read or does not match its format.
pub fn load_catalog(path: &Path) -> CatalogResult<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let format = CatalogFormat::from_path(path);
    let keys = parse_catalog(&contents, format)?;
    debug!(path = %path.display(), ?format, keys = keys.len(), "loaded catalog");
    Ok(keys)
}

/// Parses catalog `contents` laid out as `format`.
pub fn parse_catalog(contents: &str, format: CatalogFormat) -> CatalogResult<Vec<String>> {
    match format {
        CatalogFormat::Json => Ok(serde_json::from_str(contents)?),
        CatalogFormat::Toml => Ok(toml::from_str::<TomlCatalog>(contents)?.items),
        CatalogFormat::Lines => Ok(contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect()),
    }
}
