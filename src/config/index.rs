//! Index configuration.
//!
//! Settings applied when the command-line host builds a trie from a catalog.

use serde::{Deserialize, Serialize};

use super::{ConfigResult, Validate};
use crate::data_structures::kilo_trie::{KiloTrieConfig, DEFAULT_DELIMITER};
use crate::error::config::ConfigError;

/// Configuration for the search index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IndexConfig {
    /// Single character separating words in a search key
    pub delimiter: String,

    /// Whether keys and queries keep their case
    pub case_sensitive: bool,

    /// Maximum number of results printed per query (None for all)
    pub result_limit: Option<usize>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            case_sensitive: false,
            result_limit: None,
        }
    }
}

impl IndexConfig {
    /// The delimiter as a character.
    ///
    /// # Returns
    ///
    /// * `Ok(char)` if the delimiter is exactly one character
    /// * `Err(ConfigError)` otherwise
    pub fn delimiter_char(&self) -> ConfigResult<char> {
        let mut chars = self.delimiter.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(ConfigError::ValidationError(format!(
                "delimiter must be exactly one character, got {:?}",
                self.delimiter
            ))),
        }
    }

    /// Builds the trie configuration described by these settings.
    pub fn trie_config(&self) -> ConfigResult<KiloTrieConfig> {
        Ok(KiloTrieConfig::new()
            .with_delimiter(self.delimiter_char()?)
            .with_case_sensitive(self.case_sensitive))
    }
}

impl Validate for IndexConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.delimiter_char()?;

        if self.result_limit == Some(0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "index.result_limit".to_string(),
                message: "must be greater than 0 when set".to_string(),
            });
        }

        Ok(())
    }
}
