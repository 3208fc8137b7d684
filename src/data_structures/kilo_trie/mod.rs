// Copyright (c) 2025 Kilo Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Kilo Trie for word-prefix search.
//!
//! An in-memory index answering "which items have a word starting with this
//! prefix?". Every item exposes a search key; the key is split into words on
//! a configurable delimiter and each word becomes a path in a character trie.
//! A query walks its own path and returns everything stored below it.
//!
//! # Features
//!
//! - Generic over any [`Searchable`] item type.
//! - Case-insensitive matching (configurable).
//! - Additive inserts into an existing trie without rebuilding.
//! - Fail-fast search: a query whose path does not exist costs at most its
//!   own length.
//! - Optional wrappers for sharing across threads ([`SharedKiloTrie`]) and
//!   for publishing the latest result to subscribers ([`PublishedKiloTrie`]).
//!
//! # Example
//!
//! ```
//! use kilo_search_lib::data_structures::kilo_trie::{KiloTrie, KiloTrieConfig};
//!
//! let mut trie = KiloTrie::new(vec!["hot sandwhich".to_string(), "hotdog".to_string()]);
//! assert_eq!(trie.search("hot").len(), 2);
//! assert_eq!(trie.search("SAND").len(), 1);
//! assert!(trie.search("cold").is_empty());
//!
//! trie.insert(vec!["cold sandwhich".to_string()]);
//! assert_eq!(trie.search("sandwhich").len(), 2);
//!
//! let snake = KiloTrie::with_config(
//!     vec!["pepperoni_pizza".to_string()],
//!     KiloTrieConfig::new().with_delimiter('_'),
//! );
//! assert_eq!(snake.search("piz").len(), 1);
//! ```

mod builder;
mod config;
mod item;
mod node;
mod published;
mod search;
mod shared;

pub use config::{KiloTrieConfig, DEFAULT_DELIMITER};
pub use item::Searchable;
pub use published::{PublishedKiloTrie, SearchSnapshot};
pub use shared::SharedKiloTrie;

use item::ItemStore;
use node::NodeArena;

/// Prefix-search index over items of type `T`.
///
/// The trie owns one copy of every distinct item and a tree of character
/// nodes. Inserting requires `&mut self` and searching `&self`, so any number
/// of concurrent searches may run while no insert is in progress.
#[derive(Debug)]
pub struct KiloTrie<T> {
    /// Arena of trie nodes, root at index 0
    nodes: NodeArena,

    /// Distinct items referenced from the nodes
    items: ItemStore<T>,

    /// Delimiter and case handling, fixed for the lifetime of the trie
    config: KiloTrieConfig,
}

impl<T: Searchable> KiloTrie<T> {
    /// Builds a trie from `items`, splitting keys on spaces.
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_config(items, KiloTrieConfig::default())
    }

    /// Builds a trie from `items`, splitting keys on `delimiter`.
    pub fn with_delimiter<I>(items: I, delimiter: char) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_config(items, KiloTrieConfig::new().with_delimiter(delimiter))
    }

    /// Builds a trie from `items` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `items` - Items to index initially. May be empty.
    /// * `config` - Configuration for the trie.
    pub fn with_config<I>(items: I, config: KiloTrieConfig) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut trie = Self::empty(config);
        trie.insert(items);
        trie
    }
}

impl<T> KiloTrie<T> {
    fn empty(config: KiloTrieConfig) -> Self {
        Self {
            nodes: NodeArena::new(),
            items: ItemStore::new(),
            config,
        }
    }

    /// Number of distinct items recorded.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no item has been recorded.
    pub fn is_empty(&self) -> bool {
        self.items.len() == 0
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The delimiter splitting search keys into words.
    pub fn delimiter(&self) -> char {
        self.config.delimiter()
    }

    /// The configuration this trie was built with.
    pub fn config(&self) -> &KiloTrieConfig {
        &self.config
    }
}

impl<T> Default for KiloTrie<T> {
    fn default() -> Self {
        Self::empty(KiloTrieConfig::default())
    }
}

impl<T: Searchable> FromIterator<T> for KiloTrie<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T: Searchable> Extend<T> for KiloTrie<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Item {
        search_key: String,
    }

    impl Item {
        fn new(search_key: &str) -> Self {
            Self {
                search_key: search_key.to_string(),
            }
        }
    }

    impl Searchable for Item {
        fn search_key(&self) -> Cow<'_, str> {
            Cow::Borrowed(&self.search_key)
        }
    }

    const TERMS: [&str; 11] = [
        "tennis",
        "sports",
        "burgers",
        "hotdog",
        "hot sandwhich",
        "cold sandwhich",
        "turkey",
        "pizza",
        "pepperoni pizza",
        "salami",
        "sushi",
    ];

    fn service() -> KiloTrie<Item> {
        KiloTrie::new(TERMS.iter().map(|term| Item::new(term)))
    }

    #[test]
    fn test_letter_search() {
        let trie = service();
        let results = trie.search("s");
        assert_eq!(results.len(), 5);
        for key in ["sports", "hot sandwhich", "cold sandwhich", "salami", "sushi"] {
            assert!(results.contains(&&Item::new(key)), "missing {key}");
        }
    }

    #[test]
    fn test_starting_word_search() {
        assert_eq!(service().search("hot").len(), 2);
    }

    #[test]
    fn test_ending_word_search() {
        let trie = service();
        assert_eq!(trie.search("sandwhich").len(), 2);
        assert_eq!(trie.search("pizza").len(), 2);
    }

    #[test]
    fn test_custom_delimiter_search() {
        let trie = KiloTrie::with_delimiter(
            TERMS.iter().map(|term| Item::new(&term.replace(' ', "_"))),
            '_',
        );
        assert_eq!(trie.delimiter(), '_');
        assert_eq!(trie.search("s").len(), 5);
    }

    #[test]
    fn test_insert_items() {
        let mut trie = service();
        let item = Item::new("zzzzzz");
        trie.insert(vec![item.clone()]);

        let results = trie.search("zz");
        assert_eq!(results, vec![&item]);
    }

    #[test]
    fn test_empty_construction() {
        let trie = KiloTrie::<Item>::new(Vec::new());
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
        assert!(trie.search("").is_empty());
        assert!(trie.search("a").is_empty());
    }

    #[test]
    fn test_case_insensitive_query() {
        let trie = service();
        assert_eq!(trie.search("S"), trie.search("s"));
        assert_eq!(trie.search("PePPeRoNi").len(), 1);
    }

    #[test]
    fn test_case_sensitive_config() {
        let trie = KiloTrie::with_config(
            vec![Item::new("Pizza"), Item::new("pizza")],
            KiloTrieConfig::new().with_case_sensitive(true),
        );
        assert_eq!(trie.search("P"), vec![&Item::new("Pizza")]);
        assert_eq!(trie.search("p"), vec![&Item::new("pizza")]);
    }

    #[test]
    fn test_collect_and_extend() {
        let mut trie: KiloTrie<String> = ["tennis", "turkey"].iter().map(|s| s.to_string()).collect();
        trie.extend(["tacos".to_string()]);
        assert_eq!(trie.search("t").len(), 3);
        assert_eq!(trie.len(), 3);
    }
}
