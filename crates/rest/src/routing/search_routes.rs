//! Route configuration.

use axum::{Router, middleware, routing::get};
use bookmarks_persistence::core::BookmarkSearchProvider;

use crate::handlers;
use crate::middleware::hostnames_middleware;
use crate::state::AppState;

/// Creates all API routes.
///
/// # Routes
///
/// - `GET /search` - Bookmark search (preceded by hostname lookup)
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
/// - `GET /_readiness` - Readiness probe
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: BookmarkSearchProvider + Send + Sync + 'static,
{
    let search = Router::new()
        .route("/search", get(handlers::search_handler::<S>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            hostnames_middleware::<S>,
        ));

    Router::new()
        .merge(search)
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::liveness_handler))
        .route("/_readiness", get(handlers::readiness_handler::<S>))
        .with_state(state)
}
