//! Core storage traits.
//!
//! - [`BookmarkStorage`] - Insert, count and health checks
//! - [`BookmarkSearchProvider`] - Query execution and hostname enumeration
//!
//! ```text
//! BookmarkStorage
//!     └── BookmarkSearchProvider
//! ```
//!
//! # Example: Implementing a Storage Backend
//!
//! ```ignore
//! use async_trait::async_trait;
//! use bookmarks_persistence::core::{BookmarkSearchProvider, BookmarkStorage};
//! use bookmarks_persistence::error::StorageResult;
//! use bookmarks_persistence::types::{Bookmark, BookmarkQuery};
//!
//! struct MyBackend;
//!
//! #[async_trait]
//! impl BookmarkStorage for MyBackend {
//!     fn backend_name(&self) -> &'static str {
//!         "my-backend"
//!     }
//!
//!     async fn insert(&self, bookmark: Bookmark) -> StorageResult<Bookmark> {
//!         todo!()
//!     }
//!
//!     async fn count(&self) -> StorageResult<u64> {
//!         todo!()
//!     }
//! }
//!
//! #[async_trait]
//! impl BookmarkSearchProvider for MyBackend {
//!     async fn search(&self, query: &BookmarkQuery) -> StorageResult<Vec<Bookmark>> {
//!         todo!()
//!     }
//!
//!     async fn distinct_hostnames(&self) -> StorageResult<Vec<String>> {
//!         todo!()
//!     }
//! }
//! ```

pub mod search;
pub mod storage;

pub use search::BookmarkSearchProvider;
pub use storage::BookmarkStorage;
