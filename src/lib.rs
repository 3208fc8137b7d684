//! Kilo Search Library
//!
//! This library contains an in-memory prefix-search index and the pieces
//! needed to host it: configuration loading, item catalogs, and error
//! reporting. The binary crate builds on it, but the index can be used on
//! its own as a dependency by other projects.
//!
//! # Architecture
//!
//! - [`data_structures::kilo_trie`]: the trie, its builder and searcher
//! - [`catalog`]: loading search keys from JSON, TOML or plain-text files
//! - [`config`]: layered configuration (defaults, file, environment)
//! - [`error`]: error types and the error reporter

pub mod catalog;
pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Kilo Search.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
