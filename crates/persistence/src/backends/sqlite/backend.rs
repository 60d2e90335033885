//! SQLite backend implementation.

use std::fmt::Debug;
use std::path::Path;
use std::time::Duration;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use serde::{Deserialize, Serialize};

use crate::error::{BackendError, StorageError, StorageResult};

use super::{functions, schema};

pub(crate) const BACKEND_NAME: &str = "sqlite";

/// Pool sizing and connection lifetimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PoolLimits {
    max_size: u32,
    min_idle: u32,
    idle_timeout: Option<Duration>,
    max_lifetime: Option<Duration>,
}

impl PoolLimits {
    const IDLE_TIMEOUT: Duration = Duration::from_secs(10 * 60);
    const MAX_LIFETIME: Duration = Duration::from_secs(30 * 60);

    fn new(config: &SqliteBackendConfig, is_memory: bool) -> Self {
        if is_memory {
            // Closing the only connection drops the database.
            return Self {
                max_size: 1,
                min_idle: 1,
                idle_timeout: None,
                max_lifetime: None,
            };
        }

        let max_size = config.max_connections.max(1);
        Self {
            max_size,
            min_idle: config.min_connections.min(max_size),
            idle_timeout: Some(Self::IDLE_TIMEOUT),
            max_lifetime: Some(Self::MAX_LIFETIME),
        }
    }
}

/// SQLite backend for bookmark storage.
///
/// Every pooled connection gets a `REGEXP` function, so bookmark filters run
/// inside the database.
pub struct SqliteBackend {
    pool: Pool<SqliteConnectionManager>,
    config: SqliteBackendConfig,
    is_memory: bool,
}

impl Debug for SqliteBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteBackend")
            .field("config", &self.config)
            .field("is_memory", &self.is_memory)
            .finish_non_exhaustive()
    }
}

/// Configuration for the SQLite backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqliteBackendConfig {
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Minimum number of idle connections.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Connection timeout in milliseconds.
    #[serde(default = "default_connection_timeout_ms")]
    pub connection_timeout_ms: u64,

    /// SQLite busy timeout in milliseconds.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,

    /// Enable WAL mode for file databases.
    #[serde(default = "default_true")]
    pub enable_wal: bool,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connection_timeout_ms() -> u64 {
    30000
}

fn default_busy_timeout_ms() -> u64 {
    5000
}

fn default_true() -> bool {
    true
}

impl Default for SqliteBackendConfig {
    fn default() -> Self {
        Self {
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connection_timeout_ms: default_connection_timeout_ms(),
            busy_timeout_ms: default_busy_timeout_ms(),
            enable_wal: true,
        }
    }
}

impl SqliteBackend {
    /// Creates a new in-memory SQLite backend.
    pub fn in_memory() -> StorageResult<Self> {
        Self::with_config(":memory:", SqliteBackendConfig::default())
    }

    /// Opens or creates a file-based SQLite database.
    pub fn open<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        Self::with_config(path, SqliteBackendConfig::default())
    }

    /// Creates a backend with custom configuration.
    ///
    /// An in-memory database lives only as long as its connection, so the
    /// pool is pinned to a single connection that is never reaped.
    pub fn with_config<P: AsRef<Path>>(
        path: P,
        config: SqliteBackendConfig,
    ) -> StorageResult<Self> {
        let is_memory = path.as_ref().to_string_lossy() == ":memory:";

        let busy_timeout = Duration::from_millis(config.busy_timeout_ms);
        let manager = SqliteConnectionManager::file(path.as_ref()).with_init(move |conn| {
            conn.busy_timeout(busy_timeout)?;
            functions::register_regexp(conn)
        });

        let limits = PoolLimits::new(&config, is_memory);
        let max_size = limits.max_size;
        let pool = Pool::builder()
            .max_size(limits.max_size)
            .min_idle(Some(limits.min_idle))
            .idle_timeout(limits.idle_timeout)
            .max_lifetime(limits.max_lifetime)
            .connection_timeout(Duration::from_millis(config.connection_timeout_ms))
            .build(manager)
            .map_err(|e| connection_failed(e.to_string()))?;

        let backend = Self {
            pool,
            config,
            is_memory,
        };

        backend.configure_connection()?;

        tracing::debug!(is_memory, max_size, "SQLite pool created");
        Ok(backend)
    }

    /// Initialize the database schema.
    pub fn init_schema(&self) -> StorageResult<()> {
        let conn = self.get_connection()?;
        schema::initialize_schema(&conn)
    }

    /// Returns true if this backend holds an in-memory database.
    pub fn is_memory(&self) -> bool {
        self.is_memory
    }

    /// Returns the backend configuration.
    pub fn config(&self) -> &SqliteBackendConfig {
        &self.config
    }

    /// Get a connection from the pool.
    pub(crate) fn get_connection(
        &self,
    ) -> StorageResult<PooledConnection<SqliteConnectionManager>> {
        self.pool
            .get()
            .map_err(|e| StorageError::Backend(BackendError::Unavailable {
                backend_name: BACKEND_NAME.to_string(),
                message: e.to_string(),
            }))
    }

    /// Applies database-wide settings.
    fn configure_connection(&self) -> StorageResult<()> {
        if self.is_memory || !self.config.enable_wal {
            return Ok(());
        }

        let conn = self.get_connection()?;
        let mode: String = conn
            .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
            .map_err(|e| internal_error("Failed to enable WAL mode", e))?;
        tracing::debug!(journal_mode = %mode, "SQLite journal mode set");

        Ok(())
    }
}

fn connection_failed(message: String) -> StorageError {
    StorageError::Backend(BackendError::ConnectionFailed {
        backend_name: BACKEND_NAME.to_string(),
        message,
    })
}

/// Wraps a rusqlite error with context.
pub(crate) fn internal_error(context: &str, e: rusqlite::Error) -> StorageError {
    StorageError::Backend(BackendError::Internal {
        backend_name: BACKEND_NAME.to_string(),
        message: format!("{}: {}", context, e),
        source: Some(Box::new(e)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_backend() {
        let backend = SqliteBackend::in_memory().unwrap();
        assert!(backend.is_memory());
        backend.init_schema().unwrap();
    }

    #[test]
    fn test_file_backend() {
        let dir = tempfile::tempdir().unwrap();
        let backend = SqliteBackend::open(dir.path().join("bookmarks.db")).unwrap();
        assert!(!backend.is_memory());
        backend.init_schema().unwrap();
    }

    #[test]
    fn test_memory_pool_connection_is_never_reaped() {
        let config = SqliteBackendConfig {
            max_connections: 8,
            min_connections: 0,
            ..Default::default()
        };

        let limits = PoolLimits::new(&config, true);

        assert_eq!(limits.max_size, 1);
        assert_eq!(limits.min_idle, 1);
        assert_eq!(limits.idle_timeout, None);
        assert_eq!(limits.max_lifetime, None);
    }

    #[test]
    fn test_file_pool_limits_follow_config() {
        let config = SqliteBackendConfig {
            max_connections: 4,
            min_connections: 9,
            ..Default::default()
        };

        let limits = PoolLimits::new(&config, false);

        assert_eq!(limits.max_size, 4);
        assert_eq!(limits.min_idle, 4);
        assert!(limits.idle_timeout.is_some());
        assert!(limits.max_lifetime.is_some());
    }

    #[test]
    fn test_in_memory_data_survives_connection_checkouts() {
        let backend = SqliteBackend::in_memory().unwrap();
        backend.init_schema().unwrap();
        backend
            .get_connection()
            .unwrap()
            .execute(
                "INSERT INTO bookmarks (id, title, description, href, protocol, hostname, pathname, created) \
                 VALUES ('a', 't', '', 'https://a.example/', 'https:', 'a.example', '/', '2024-01-01T00:00:00.000000Z')",
                [],
            )
            .unwrap();

        for _ in 0..3 {
            let conn = backend.get_connection().unwrap();
            let count: i64 = conn
                .query_row("SELECT COUNT(*) FROM bookmarks", [], |row| row.get(0))
                .unwrap();
            assert_eq!(count, 1);
        }
    }

    #[test]
    fn test_config_defaults() {
        let config: SqliteBackendConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.busy_timeout_ms, 5000);
        assert!(config.enable_wal);
    }
}
