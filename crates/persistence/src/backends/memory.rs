//! In-memory backend.
//!
//! Holds bookmarks in a `Vec` behind a [`parking_lot::RwLock`] and evaluates
//! filters in-process. Useful for tests, demos and small seeded datasets.

use std::collections::{BTreeSet, HashSet};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::core::{BookmarkSearchProvider, BookmarkStorage};
use crate::error::{ResourceError, StorageResult};
use crate::types::{Bookmark, BookmarkQuery};

/// In-memory bookmark store.
///
/// # Example
///
/// ```
/// use bookmarks_persistence::backends::memory::MemoryBackend;
/// use bookmarks_persistence::types::Bookmark;
///
/// let backend = MemoryBackend::with_bookmarks(vec![
///     Bookmark::new("Example", "https://example.com/").unwrap(),
/// ]);
/// assert_eq!(backend.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryBackend {
    bookmarks: RwLock<Vec<Bookmark>>,
}

impl MemoryBackend {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with bookmarks.
    pub fn with_bookmarks(bookmarks: Vec<Bookmark>) -> Self {
        Self {
            bookmarks: RwLock::new(bookmarks),
        }
    }

    /// Returns the number of stored bookmarks.
    pub fn len(&self) -> usize {
        self.bookmarks.read().len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.bookmarks.read().is_empty()
    }
}

#[async_trait]
impl BookmarkStorage for MemoryBackend {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn insert(&self, bookmark: Bookmark) -> StorageResult<Bookmark> {
        let mut bookmarks = self.bookmarks.write();
        if bookmarks.iter().any(|b| b.id == bookmark.id) {
            return Err(ResourceError::AlreadyExists { id: bookmark.id }.into());
        }
        bookmarks.push(bookmark.clone());
        Ok(bookmark)
    }

    /// Stores every bookmark or none of them.
    async fn insert_all(&self, batch: Vec<Bookmark>) -> StorageResult<usize> {
        let mut bookmarks = self.bookmarks.write();

        let mut seen: HashSet<&str> = bookmarks.iter().map(|b| b.id.as_str()).collect();
        if let Some(duplicate) = batch.iter().find(|b| !seen.insert(b.id.as_str())) {
            return Err(ResourceError::AlreadyExists {
                id: duplicate.id.clone(),
            }
            .into());
        }

        let inserted = batch.len();
        bookmarks.extend(batch);
        Ok(inserted)
    }

    async fn count(&self) -> StorageResult<u64> {
        Ok(self.bookmarks.read().len() as u64)
    }
}

#[async_trait]
impl BookmarkSearchProvider for MemoryBackend {
    async fn search(&self, query: &BookmarkQuery) -> StorageResult<Vec<Bookmark>> {
        let mut matches: Vec<Bookmark> = self
            .bookmarks
            .read()
            .iter()
            .filter(|b| query.filter.matches(b))
            .cloned()
            .collect();

        matches.sort_by(|a, b| query.sort.compare(a, b));

        tracing::trace!(matched = matches.len(), "Memory search completed");
        Ok(matches)
    }

    async fn distinct_hostnames(&self) -> StorageResult<Vec<String>> {
        let hostnames: BTreeSet<String> = self
            .bookmarks
            .read()
            .iter()
            .map(|b| b.url.hostname.clone())
            .collect();
        Ok(hostnames.into_iter().collect())
    }
}
