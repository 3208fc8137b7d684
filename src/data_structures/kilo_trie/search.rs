//! Prefix search over the Kilo Trie.
//!
//! A search runs in two phases. The query is first walked from the root one
//! character at a time; a missing child ends the search with no results. The
//! node reached is then expanded breadth first, collecting the items of every
//! node in its subtree.

use std::collections::VecDeque;

use fnv::FnvBuildHasher;
use hashbrown::HashSet;
use tracing::{debug, trace};

use super::item::ItemId;
use super::node::NodeId;
use super::KiloTrie;

impl<T> KiloTrie<T> {
    /// Finds every item having a word that starts with `query`.
    ///
    /// The query is case folded like the indexed keys. Results come in the
    /// order the breadth-first walk first meets them, each item at most once.
    /// An empty query returns every indexed item reachable through a word.
    ///
    /// # Arguments
    ///
    /// * `query` - The prefix to search for.
    ///
    /// # Returns
    ///
    /// The matching items, or an empty vector when no word starts with `query`.
    pub fn search(&self, query: &str) -> Vec<&T> {
        let folded = self.config.fold(query);

        let Some(start) = self.descend(&folded) else {
            trace!(query, "no node matches query");
            return Vec::new();
        };

        let found = self.collect_subtree(start);
        debug!(query, results = found.len(), "search complete");

        found.into_iter().map(|id| self.items.get(id)).collect()
    }

    /// Like [`search`](Self::search), returning owned copies of the items.
    pub fn search_owned(&self, query: &str) -> Vec<T>
    where
        T: Clone,
    {
        self.search(query).into_iter().cloned().collect()
    }

    /// Follows `prefix` from the root. Returns `None` as soon as a character
    /// has no matching child.
    fn descend(&self, prefix: &str) -> Option<NodeId> {
        prefix
            .chars()
            .try_fold(NodeId::ROOT, |node, c| self.nodes.child(node, c))
    }

    /// Breadth-first walk of the subtree rooted at `start`, gathering items
    /// in first-seen order.
    fn collect_subtree(&self, start: NodeId) -> Vec<ItemId> {
        let mut queue = VecDeque::from([start]);
        let mut seen: HashSet<ItemId, FnvBuildHasher> = HashSet::default();
        let mut found = Vec::new();

        while let Some(id) = queue.pop_front() {
            let node = self.nodes.get(id);
            found.extend(node.items.iter().copied().filter(|item| seen.insert(*item)));
            queue.extend(node.children.values().copied());
        }

        found
    }
}
