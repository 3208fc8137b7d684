//! Push-based publication of search results.
//!
//! [`PublishedKiloTrie`] keeps the result of the most recent search in a
//! `tokio::sync::watch` channel. Consumers subscribe once and are notified
//! every time a new search completes, instead of polling for results.

use std::sync::Arc;

use tokio::sync::watch;

use super::{KiloTrie, Searchable};

/// Immutable snapshot of one search result.
pub type SearchSnapshot<T> = Arc<[T]>;

/// A [`KiloTrie`] that publishes every search result to subscribers.
///
/// # Examples
///
/// ```
/// use kilo_search_lib::data_structures::kilo_trie::{KiloTrie, PublishedKiloTrie};
///
/// let published = PublishedKiloTrie::new(KiloTrie::new(vec!["sushi".to_string()]));
/// let receiver = published.subscribe();
///
/// published.search("su");
/// assert_eq!(receiver.borrow().len(), 1);
/// ```
#[derive(Debug)]
pub struct PublishedKiloTrie<T> {
    trie: KiloTrie<T>,
    sender: watch::Sender<SearchSnapshot<T>>,
}

impl<T: Searchable + Clone> PublishedKiloTrie<T> {
    /// Wraps `trie`. The published result starts out empty.
    pub fn new(trie: KiloTrie<T>) -> Self {
        let (sender, _) = watch::channel(SearchSnapshot::<T>::from(Vec::new()));
        Self { trie, sender }
    }

    /// Indexes `items` into the wrapped trie. The published result is left
    /// untouched until the next search.
    pub fn insert<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.trie.insert(items);
    }

    /// Runs [`KiloTrie::search`] and publishes the result.
    pub fn search(&self, query: &str) -> SearchSnapshot<T> {
        let snapshot: SearchSnapshot<T> = self.trie.search_owned(query).into();
        self.sender.send_replace(Arc::clone(&snapshot));
        snapshot
    }

    /// Returns a receiver observing every future result.
    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot<T>> {
        self.sender.subscribe()
    }

    /// The most recently published result.
    pub fn latest(&self) -> SearchSnapshot<T> {
        Arc::clone(&self.sender.borrow())
    }
}

impl<T> PublishedKiloTrie<T> {
    /// The wrapped trie.
    pub fn trie(&self) -> &KiloTrie<T> {
        &self.trie
    }

    /// Unwraps the trie, dropping the channel.
    pub fn into_inner(self) -> KiloTrie<T> {
        self.trie
    }
}
