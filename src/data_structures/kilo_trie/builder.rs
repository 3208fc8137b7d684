//! Incremental construction of the Kilo Trie.

use tracing::debug;

use super::item::{ItemId, Searchable};
use super::node::{NodeArena, NodeId};
use super::KiloTrie;

impl<T: Searchable> KiloTrie<T> {
    /// Indexes `items` into the trie, keeping everything indexed before.
    ///
    /// Every item's search key is case folded and split on the configured
    /// delimiter. Each word is walked from the root, creating missing nodes,
    /// and the item is attached to the node where the word ends. An item
    /// already attached to that node is not attached twice.
    ///
    /// Keys made only of delimiters contribute no words and leave the trie
    /// untouched. An item equal to one already stored keeps the stored value
    /// but is also reachable through the words of the new key.
    ///
    /// # Arguments
    ///
    /// * `items` - The items to index.
    pub fn insert<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let nodes_before = self.nodes.len();
        let mut batch = 0usize;
        let mut words = 0usize;

        for item in items {
            batch += 1;
            let key = self.config.fold(&item.search_key()).into_owned();
            let item_words: Vec<&str> = self.config.words(&key).collect();
            if item_words.is_empty() {
                continue;
            }

            let id = self.items.intern(item);
            words += item_words.len();
            for word in item_words {
                index_word(&mut self.nodes, word, id);
            }
        }

        debug!(
            items = batch,
            words,
            new_nodes = self.nodes.len() - nodes_before,
            "indexed items"
        );
    }
}

/// Walks `word` from the root, creating nodes on demand, and attaches `item`
/// to the terminal node.
fn index_word(nodes: &mut NodeArena, word: &str, item: ItemId) {
    let terminal = word
        .chars()
        .fold(NodeId::ROOT, |node, c| nodes.child_or_insert(node, c));
    nodes.get_mut(terminal).attach(item);
}
