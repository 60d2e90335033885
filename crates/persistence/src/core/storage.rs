//! Core bookmark storage trait.
//!
//! This module defines the [`BookmarkStorage`] trait, which provides the
//! write and bookkeeping operations every backend supports.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::Bookmark;

/// Core storage trait for bookmarks.
///
/// Records are immutable once stored; the search path never writes.
///
/// # Example
///
/// ```ignore
/// use bookmarks_persistence::core::BookmarkStorage;
/// use bookmarks_persistence::types::Bookmark;
///
/// async fn example<S: BookmarkStorage>(storage: &S) -> StorageResult<()> {
///     let bookmark = Bookmark::new("Example", "https://example.com/")?;
///     let stored = storage.insert(bookmark).await?;
///     println!("Stored {} in {}", stored.id, storage.backend_name());
///     assert_eq!(storage.count().await?, 1);
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait BookmarkStorage: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Stores a new bookmark.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(AlreadyExists)` - If a bookmark with the same ID exists
    /// * `StorageError::Backend` - If the backend fails
    async fn insert(&self, bookmark: Bookmark) -> StorageResult<Bookmark>;

    /// Stores several bookmarks, stopping at the first failure.
    ///
    /// The default keeps whatever was stored before the failure. Backends
    /// override it to store all or nothing.
    async fn insert_all(&self, bookmarks: Vec<Bookmark>) -> StorageResult<usize> {
        let mut inserted = 0;
        for bookmark in bookmarks {
            self.insert(bookmark).await?;
            inserted += 1;
        }
        Ok(inserted)
    }

    /// Returns the number of stored bookmarks.
    async fn count(&self) -> StorageResult<u64>;

    /// Verifies the backend can serve requests.
    async fn health_check(&self) -> StorageResult<()> {
        self.count().await.map(|_| ())
    }
}
