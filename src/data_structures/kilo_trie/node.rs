//! Node storage for the Kilo Trie.
//!
//! Nodes live in a single arena and are addressed by [`NodeId`]. Each child id
//! is created by, and stored in, exactly one parent, so the arena always
//! describes a tree rooted at [`NodeId::ROOT`].

use fnv::FnvHashMap;

use super::item::ItemId;

/// Stable handle of a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    /// The root node, present in every arena.
    pub(crate) const ROOT: NodeId = NodeId(0);
}

/// A node in the Kilo Trie.
///
/// Each node represents one character along a word's path. Items are attached
/// to the node where their word ends.
#[derive(Debug, Default)]
pub(crate) struct TrieNode {
    /// The character this node represents (`None` for the root)
    pub value: Option<char>,

    /// Map of characters to child nodes
    pub children: FnvHashMap<char, NodeId>,

    /// Items whose word ends here, in insertion order
    pub items: Vec<ItemId>,
}

impl TrieNode {
    /// Creates the valueless root node.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates an empty node for `value`.
    pub fn with_value(value: char) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    /// Appends `item` unless it is already attached. Returns whether the
    /// item was added.
    pub fn attach(&mut self, item: ItemId) -> bool {
        if self.items.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }
}

/// Arena owning every node of a trie.
#[derive(Debug)]
pub(crate) struct NodeArena {
    nodes: Vec<TrieNode>,
}

impl NodeArena {
    /// Creates an arena holding only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::root()],
        }
    }

    pub fn get(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.0]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut TrieNode {
        &mut self.nodes[id.0]
    }

    /// Looks up the child of `parent` reached through `c`.
    pub fn child(&self, parent: NodeId, c: char) -> Option<NodeId> {
        self.get(parent).children.get(&c).copied()
    }

    /// Returns the child of `parent` reached through `c`, creating it if it
    /// does not exist yet.
    pub fn child_or_insert(&mut self, parent: NodeId, c: char) -> NodeId {
        if let Some(existing) = self.child(parent, c) {
            return existing;
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(TrieNode::with_value(c));
        self.get_mut(parent).children.insert(c, id);
        id
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_arena_has_valueless_root() {
        let arena = NodeArena::new();
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.get(NodeId::ROOT).value, None);
        assert!(arena.get(NodeId::ROOT).children.is_empty());
    }

    #[test]
    fn test_child_or_insert_reuses_existing() {
        let mut arena = NodeArena::new();
        let h = arena.child_or_insert(NodeId::ROOT, 'h');
        let o = arena.child_or_insert(h, 'o');

        assert_eq!(arena.child_or_insert(NodeId::ROOT, 'h'), h);
        assert_eq!(arena.child(h, 'o'), Some(o));
        assert_eq!(arena.child(o, 't'), None);
        assert_eq!(arena.get(o).value, Some('o'));
        assert_eq!(arena.len(), 3);
    }
}
