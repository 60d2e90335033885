//! Known-hostnames middleware.
//!
//! Looks up every distinct hostname in the store before the search handler
//! runs and stores the list in request extensions as [`KnownHostnames`].
//! A failed lookup fails the request.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use bookmarks_persistence::core::BookmarkSearchProvider;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Distinct hostnames across all stored bookmarks, sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownHostnames(pub Vec<String>);

/// Middleware function for hostname enumeration.
///
/// Use with `axum::middleware::from_fn_with_state`.
pub async fn hostnames_middleware<S>(
    State(state): State<AppState<S>>,
    mut request: Request,
    next: Next,
) -> RestResult<Response>
where
    S: BookmarkSearchProvider + Send + Sync + 'static,
{
    let hostnames = state.storage().distinct_hostnames().await?;
    debug!(count = hostnames.len(), "Loaded known hostnames");

    request.extensions_mut().insert(KnownHostnames(hostnames));
    Ok(next.run(request).await)
}
