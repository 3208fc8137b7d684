//! Catalog error module.
//!
//! Errors raised while reading search keys from an item catalog file.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an item catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        /// The catalog that failed
        path: PathBuf,
        /// The underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// A JSON catalog is not an array of strings.
    #[error("Malformed JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// A TOML catalog is not a table with an `items` string array.
    #[error("Malformed TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),
}
