//! Data structures for Kilo Search.
//!
//! This module contains the in-memory structures the search index is built
//! from. All implementations adhere to the project requirements:
//! - No unsafe code
//! - Explicit ownership, no reference-counted node graphs
//! - Read paths that never allocate more than their result

pub mod kilo_trie;

// Re-export common data structures
pub use kilo_trie::{KiloTrie, KiloTrieConfig, PublishedKiloTrie, Searchable, SharedKiloTrie};
