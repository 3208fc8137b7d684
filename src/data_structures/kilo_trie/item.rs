// Copyright (c) 2025 Kilo Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! The item capability and the item store backing the Kilo Trie.

use std::borrow::Cow;
use std::hash::{BuildHasher, Hash};
use std::sync::Arc;

use fnv::FnvBuildHasher;
use hashbrown::HashTable;

/// A value that can be indexed by a [`KiloTrie`](super::KiloTrie).
///
/// Equality and hashing decide whether two values are the same entry. The
/// search key is the text split into words and walked into the trie.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use kilo_search_lib::data_structures::kilo_trie::Searchable;
///
/// #[derive(PartialEq, Eq, Hash)]
/// struct Dish {
///     id: u32,
///     name: String,
/// }
///
/// impl Searchable for Dish {
///     fn search_key(&self) -> Cow<'_, str> {
///         Cow::Borrowed(&self.name)
///     }
/// }
/// ```
pub trait Searchable: Eq + Hash {
    /// The text used to index this value.
    fn search_key(&self) -> Cow<'_, str>;
}

impl Searchable for String {
    fn search_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl Searchable for &str {
    fn search_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Searchable for Box<str> {
    fn search_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl<T: Searchable> Searchable for Arc<T> {
    fn search_key(&self) -> Cow<'_, str> {
        self.as_ref().search_key()
    }
}

/// Stable handle of an item inside an [`ItemStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ItemId(usize);

/// Owns every distinct item recorded by a trie.
///
/// Nodes refer to items by [`ItemId`], so an item indexed under several
/// words is stored once. Equal items collapse into the same slot.
#[derive(Debug)]
pub(crate) struct ItemStore<T> {
    items: Vec<T>,
    lookup: HashTable<ItemId>,
    hasher: FnvBuildHasher,
}

impl<T> ItemStore<T> {
    pub(crate) fn new() -> Self {
        Self {
            items: Vec::new(),
            lookup: HashTable::new(),
            hasher: FnvBuildHasher::default(),
        }
    }

    pub(crate) fn get(&self, id: ItemId) -> &T {
        &self.items[id.0]
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T: Hash + Eq> ItemStore<T> {
    /// Records `item`, returning the id of the equal item already stored if
    /// there is one.
    pub(crate) fn intern(&mut self, item: T) -> ItemId {
        let hash = self.hasher.hash_one(&item);
        let items = &self.items;
        if let Some(&id) = self.lookup.find(hash, |&id| items[id.0] == item) {
            return id;
        }

        let id = ItemId(self.items.len());
        self.items.push(item);

        let items = &self.items;
        let hasher = &self.hasher;
        self.lookup
            .insert_unique(hash, id, |&id| hasher.hash_one(&items[id.0]));
        id
    }
}

impl<T> Default for ItemStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
