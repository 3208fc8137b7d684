//! Thread-shareable handle around a [`KiloTrie`].
//!
//! The trie itself has no internal locking. `SharedKiloTrie` puts it behind a
//! single reader-writer lock: inserts take the write lock, searches the read
//! lock, so searches only ever observe a fully applied insert.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use super::{KiloTrie, Searchable};

/// A cloneable, thread-safe handle to one [`KiloTrie`].
#[derive(Debug)]
pub struct SharedKiloTrie<T> {
    inner: Arc<RwLock<KiloTrie<T>>>,
}

impl<T: Searchable + Clone> SharedKiloTrie<T> {
    /// Moves `trie` behind a shared lock.
    pub fn new(trie: KiloTrie<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(trie)),
        }
    }

    /// Indexes `items`, blocking searches until the insert completes.
    pub fn insert<I>(&self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.inner.write().insert(items);
    }

    /// Searches under the read lock and returns owned results.
    pub fn search(&self, query: &str) -> Vec<T> {
        self.inner.read().search_owned(query)
    }
}

impl<T> SharedKiloTrie<T> {
    /// Number of distinct items recorded.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if no item has been recorded.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Read access to the trie, for several searches under one lock.
    pub fn read(&self) -> RwLockReadGuard<'_, KiloTrie<T>> {
        self.inner.read()
    }
}

impl<T> Clone for SharedKiloTrie<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
