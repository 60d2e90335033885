//! API test harness.
//!
//! Builds a [`TestServer`] over an in-memory or SQLite backend, or over a
//! backend whose every call fails.

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use bookmarks_persistence::backends::memory::MemoryBackend;
use bookmarks_persistence::backends::sqlite::SqliteBackend;
use bookmarks_persistence::core::{BookmarkSearchProvider, BookmarkStorage};
use bookmarks_persistence::error::{BackendError, StorageError, StorageResult};
use bookmarks_persistence::types::{Bookmark, BookmarkQuery};

use bookmarks_rest::{AppState, ServerConfig, create_app_with_config, create_app_with_state};

/// Creates a test server over an in-memory backend holding `bookmarks`.
pub fn memory_server(bookmarks: Vec<Bookmark>) -> (TestServer, Arc<MemoryBackend>) {
    let backend = Arc::new(MemoryBackend::with_bookmarks(bookmarks));
    let state = AppState::new(Arc::clone(&backend), ServerConfig::for_testing());
    let server =
        TestServer::new(create_app_with_state(state)).expect("Failed to create test server");
    (server, backend)
}

/// Creates a test server with a custom configuration.
pub fn memory_server_with_config(bookmarks: Vec<Bookmark>, config: ServerConfig) -> TestServer {
    let app = create_app_with_config(MemoryBackend::with_bookmarks(bookmarks), config);
    TestServer::new(app).expect("Failed to create test server")
}

/// Creates a test server over a seeded in-memory SQLite database.
pub async fn sqlite_server(bookmarks: Vec<Bookmark>) -> TestServer {
    let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
    backend.init_schema().expect("Failed to init schema");
    backend
        .insert_all(bookmarks)
        .await
        .expect("Failed to seed bookmarks");

    let app = create_app_with_config(backend, ServerConfig::for_testing());
    TestServer::new(app).expect("Failed to create test server")
}

/// Which store call should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePoint {
    /// Hostname enumeration fails.
    Hostnames,
    /// Query execution fails.
    Search,
}

/// A backend that reports itself unreachable at a chosen point.
pub struct FailingBackend {
    inner: MemoryBackend,
    failure: FailurePoint,
}

impl FailingBackend {
    pub fn new(failure: FailurePoint) -> Self {
        Self {
            inner: MemoryBackend::new(),
            failure,
        }
    }

    fn unavailable(&self) -> StorageError {
        StorageError::Backend(BackendError::Unavailable {
            backend_name: "failing".to_string(),
            message: "connection refused".to_string(),
        })
    }
}

#[async_trait]
impl BookmarkStorage for FailingBackend {
    fn backend_name(&self) -> &'static str {
        "failing"
    }

    async fn insert(&self, bookmark: Bookmark) -> StorageResult<Bookmark> {
        self.inner.insert(bookmark).await
    }

    async fn count(&self) -> StorageResult<u64> {
        Err(self.unavailable())
    }
}

#[async_trait]
impl BookmarkSearchProvider for FailingBackend {
    async fn search(&self, query: &BookmarkQuery) -> StorageResult<Vec<Bookmark>> {
        if self.failure == FailurePoint::Search {
            return Err(self.unavailable());
        }
        self.inner.search(query).await
    }

    async fn distinct_hostnames(&self) -> StorageResult<Vec<String>> {
        if self.failure == FailurePoint::Hostnames {
            return Err(self.unavailable());
        }
        self.inner.distinct_hostnames().await
    }
}

/// Creates a test server over a [`FailingBackend`].
pub fn failing_server(failure: FailurePoint) -> TestServer {
    let app = create_app_with_config(FailingBackend::new(failure), ServerConfig::for_testing());
    TestServer::new(app).expect("Failed to create test server")
}
