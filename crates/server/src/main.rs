//! Bookmark search server.
//!
//! Parses configuration, builds the selected storage backend, optionally
//! seeds it, and serves the search API.

mod seed;

use bookmarks_persistence::backends::memory::MemoryBackend;
use bookmarks_persistence::core::{BookmarkSearchProvider, BookmarkStorage};
use bookmarks_rest::{ServerConfig, StorageBackendMode, create_app_with_config, init_logging};
use clap::Parser;
use tracing::info;

#[cfg(feature = "sqlite")]
use bookmarks_persistence::backends::sqlite::SqliteBackend;

/// Creates and initializes a SQLite backend from the server configuration.
#[cfg(feature = "sqlite")]
fn create_sqlite_backend(config: &ServerConfig) -> anyhow::Result<SqliteBackend> {
    let db_path = config.database_url.as_deref().unwrap_or(":memory:");
    info!(database = %db_path, "Initializing SQLite backend");

    let backend = SqliteBackend::open(db_path)?;
    backend.init_schema()?;

    Ok(backend)
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Seeds `backend` if configured, then serves it.
async fn start<S>(backend: S, config: ServerConfig) -> anyhow::Result<()>
where
    S: BookmarkSearchProvider + Send + Sync + 'static,
{
    if let Some(path) = &config.seed_file {
        seed::seed_from_file(&backend, path).await?;
    }

    let count = backend.count().await?;
    info!(backend = backend.backend_name(), bookmarks = count, "Storage ready");

    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        storage_backend = %config.storage,
        "Starting bookmark search server"
    );

    match config.storage {
        StorageBackendMode::Memory => start(MemoryBackend::new(), config).await,
        StorageBackendMode::Sqlite => start_sqlite(config).await,
    }
}

/// Starts the server with the SQLite backend.
#[cfg(feature = "sqlite")]
async fn start_sqlite(config: ServerConfig) -> anyhow::Result<()> {
    let backend = create_sqlite_backend(&config)?;
    start(backend, config).await
}

/// Fallback when sqlite feature is not enabled.
#[cfg(not(feature = "sqlite"))]
async fn start_sqlite(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The sqlite backend requires the 'sqlite' feature. \
         Build with: cargo build -p bookmarks-server --features sqlite"
    )
}
