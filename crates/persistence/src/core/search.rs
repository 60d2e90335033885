//! Search provider trait.
//!
//! [`BookmarkSearchProvider`] is the read side the search service depends
//! on: executing a filter/sort query and enumerating the distinct hostnames
//! across all records.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::{Bookmark, BookmarkQuery};

use super::storage::BookmarkStorage;

/// Search capability over stored bookmarks.
#[async_trait]
pub trait BookmarkSearchProvider: BookmarkStorage {
    /// Executes a query.
    ///
    /// Returns every bookmark satisfying `query.filter`, ordered by
    /// `query.sort`. An empty result is not an error.
    async fn search(&self, query: &BookmarkQuery) -> StorageResult<Vec<Bookmark>>;

    /// Returns the distinct `url.hostname` values across all bookmarks,
    /// sorted ascending.
    async fn distinct_hostnames(&self) -> StorageResult<Vec<String>>;
}
