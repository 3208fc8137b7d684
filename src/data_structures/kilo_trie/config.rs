// Copyright (c) 2025 Kilo Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Kilo Trie.

use std::borrow::Cow;

/// Delimiter used when none is configured.
pub const DEFAULT_DELIMITER: char = ' ';

/// Configuration for the Kilo Trie.
///
/// Both settings are fixed once a trie is built. Indexing the same items with
/// a different delimiter requires building a new trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KiloTrieConfig {
    /// Character splitting a search key into words
    delimiter: char,

    /// Whether keys and queries keep their case
    case_sensitive: bool,
}

impl KiloTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - delimiter: `' '`
    /// - case_sensitive: false
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            case_sensitive: false,
        }
    }

    /// Set the character that separates words in a search key.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Keep the original case of keys and queries instead of lowercasing them.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Get the word delimiter
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Get whether matching is case sensitive
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Normalizes a key or query before it touches the trie.
    pub(crate) fn fold<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.case_sensitive {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(text.to_lowercase())
        }
    }

    /// Splits a normalized key into its non-empty words.
    pub(crate) fn words<'a>(&self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        key.split(self.delimiter).filter(|word| !word.is_empty())
    }
}

impl Default for KiloTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}
