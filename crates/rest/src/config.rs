//! Server configuration for the bookmark search API.
//!
//! This module provides configuration types for the server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `BOOKMARKS_SERVER_PORT` | 8080 | Server port |
//! | `BOOKMARKS_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `BOOKMARKS_LOG_LEVEL` | info | Log level |
//! | `BOOKMARKS_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `BOOKMARKS_ENABLE_CORS` | true | Enable CORS |
//! | `BOOKMARKS_CORS_ORIGINS` | * | Allowed origins |
//! | `BOOKMARKS_CORS_METHODS` | GET,OPTIONS | Allowed methods |
//! | `BOOKMARKS_CORS_HEADERS` | Content-Type,Accept | Allowed headers |
//! | `BOOKMARKS_STORAGE` | memory | Storage backend (`memory` or `sqlite`) |
//! | `BOOKMARKS_DATABASE_URL` | (none) | SQLite database path |
//! | `BOOKMARKS_SEED_FILE` | (none) | JSON file of bookmarks loaded at startup |
//! | `BOOKMARKS_JSONP_CALLBACK` | callback | Query parameter naming the JSONP callback |
//!
//! # Example
//!
//! ```rust
//! use bookmarks_rest::ServerConfig;
//!
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     ..Default::default()
//! };
//! assert_eq!(config.socket_addr(), "0.0.0.0:3000");
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Storage backend selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StorageBackendMode {
    /// Bookmarks held in process memory.
    #[default]
    Memory,
    /// Bookmarks held in a SQLite database.
    Sqlite,
}

impl std::fmt::Display for StorageBackendMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendMode::Memory => write!(f, "memory"),
            StorageBackendMode::Sqlite => write!(f, "sqlite"),
        }
    }
}

/// Server configuration for the bookmark search API.
///
/// Built from command line arguments and environment variables with
/// [`ServerConfig::parse`], from the environment alone with
/// [`ServerConfig::from_env`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "bookmarks")]
#[command(about = "Bookmark search server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "BOOKMARKS_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "BOOKMARKS_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "BOOKMARKS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "BOOKMARKS_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "BOOKMARKS_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "BOOKMARKS_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(long, env = "BOOKMARKS_CORS_METHODS", default_value = "GET,OPTIONS")]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(
        long,
        env = "BOOKMARKS_CORS_HEADERS",
        default_value = "Content-Type,Accept"
    )]
    pub cors_headers: String,

    /// Storage backend.
    #[arg(long, env = "BOOKMARKS_STORAGE", value_enum, default_value_t = StorageBackendMode::Memory)]
    pub storage: StorageBackendMode,

    /// SQLite database path (in-memory when omitted).
    #[arg(long, env = "BOOKMARKS_DATABASE_URL")]
    pub database_url: Option<String>,

    /// JSON file containing an array of bookmarks to load at startup.
    #[arg(long, env = "BOOKMARKS_SEED_FILE")]
    pub seed_file: Option<PathBuf>,

    /// Query parameter naming the JSONP callback.
    #[arg(long, env = "BOOKMARKS_JSONP_CALLBACK", default_value = "callback")]
    pub jsonp_callback_param: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,OPTIONS".to_string(),
            cors_headers: "Content-Type,Accept".to_string(),
            storage: StorageBackendMode::Memory,
            database_url: None,
            seed_file: None,
            jsonp_callback_param: "callback".to_string(),
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// Falls back to defaults when the environment does not parse.
    pub fn from_env() -> Self {
        Self::try_parse_from(["bookmarks"]).unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.jsonp_callback_param.trim().is_empty() {
            errors.push("JSONP callback parameter name cannot be empty".to_string());
        }

        if self.database_url.is_some() && self.storage != StorageBackendMode::Sqlite {
            errors.push("Database URL requires the sqlite storage backend".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            log_level: "debug".to_string(),
            request_timeout: 5,
            enable_cors: false,
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            ..Default::default()
        }
    }
}
