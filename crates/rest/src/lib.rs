//! # bookmarks-rest - Bookmark Search API
//!
//! This crate exposes bookmark search over HTTP. A request's optional
//! parameters are turned into a filter and sort over the bookmark store, the
//! query is executed, and the result is shaped as HTML, JSON or JSONP.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bookmarks_rest::{create_app, ServerConfig};
//! use bookmarks_persistence::backends::memory::MemoryBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let app = create_app(MemoryBackend::new());
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `GET /search` | Search bookmarks |
//! | `GET /health` | Health check |
//! | `GET /_liveness` | Liveness probe |
//! | `GET /_readiness` | Readiness probe (checks storage) |
//!
//! ## Search Parameters
//!
//! | Parameter | Description |
//! |-----------|-------------|
//! | `hostname` | Regex matched case-sensitively against the bookmark's hostname |
//! | `q` | Regex matched case-insensitively against title, description or href |
//! | `format` | `json`, `jsonp`, or anything else for HTML |
//! | `callback` | JSONP callback name (parameter name is configurable) |
//!
//! A pattern that is not a valid regular expression is matched as a literal
//! substring instead, and a warning is logged. Results are always ordered
//! newest first.
//!
//! ## Error Handling
//!
//! Errors are returned as `{"error": {"status", "code", "message"}}`:
//!
//! | HTTP Status | Code | Description |
//! |-------------|------|-------------|
//! | 400 | invalid | Undecodable query string |
//! | 500 | exception | Storage or rendering failure |
//! | 503 | unavailable | Storage unreachable |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and JSON error bodies
//! - [`config`] - Server configuration
//! - [`state`] - Application state (storage, configuration, collaborators)
//! - [`diagnostics`] - Reporting of invalid search patterns
//! - [`extractors`] - Search parameter extraction and query building
//! - [`middleware`] - Known-hostname lookup
//! - [`handlers`] - HTTP request handlers
//! - [`responses`] - JSON, JSONP and HTML response shaping
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod responses;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::{ServerConfig, StorageBackendMode};
pub use diagnostics::{PatternDiagnostics, TracingDiagnostics};
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use bookmarks_persistence::core::BookmarkSearchProvider;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`] or [`create_app_with_state`].
pub fn create_app<S>(storage: S) -> Router
where
    S: BookmarkSearchProvider + Send + Sync + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// # Example
///
/// ```rust,ignore
/// use bookmarks_rest::{create_app_with_config, ServerConfig};
/// use bookmarks_persistence::backends::memory::MemoryBackend;
///
/// let config = ServerConfig {
///     enable_cors: false,
///     ..Default::default()
/// };
/// let app = create_app_with_config(MemoryBackend::new(), config);
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: BookmarkSearchProvider + Send + Sync + 'static,
{
    create_app_with_state(AppState::new(Arc::new(storage), config))
}

/// Creates the Axum application from prepared state.
///
/// Use this to supply custom diagnostics or a custom page renderer.
pub fn create_app_with_state<S>(state: AppState<S>) -> Router
where
    S: BookmarkSearchProvider + Send + Sync + 'static,
{
    let config = state.config().clone();

    info!(
        "Creating bookmark search API with backend: {}",
        state.storage().backend_name()
    );

    let router = routing::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    // Add CORS if enabled
    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG` overrides
/// `level` when set.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "bookmarks_rest={level},bookmarks_persistence={level},bookmarks={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
