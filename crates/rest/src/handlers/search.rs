//! Search handler.
//!
//! `GET /search?hostname=..&q=..&format=..&callback=..`
//!
//! Builds a query from the parameters, runs it, and shapes the result as
//! JSON, JSONP or an HTML page.

use axum::{
    Extension, Json,
    extract::State,
    response::{Html, IntoResponse, Response},
};
use bookmarks_persistence::core::BookmarkSearchProvider;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{SearchParams, build_search_query};
use crate::middleware::KnownHostnames;
use crate::responses::{BookmarkList, SearchFormat, SearchPageContext, jsonp_response};
use crate::state::AppState;

/// Handler for bookmark search.
///
/// # Response
///
/// - `format=json` - `{"bookmarks": [...]}`
/// - `format=jsonp` - the same payload wrapped in the callback
/// - otherwise - the rendered results page
///
/// Invalid patterns and empty results are still `200 OK`. Store failures
/// become 5xx responses.
pub async fn search_handler<S>(
    State(state): State<AppState<S>>,
    Extension(KnownHostnames(hostnames)): Extension<KnownHostnames>,
    params: SearchParams,
) -> RestResult<Response>
where
    S: BookmarkSearchProvider + Send + Sync + 'static,
{
    let format = params.format();
    debug!(
        hostname = ?params.hostname,
        q = ?params.q,
        format = %format,
        "Processing search request"
    );

    let query = build_search_query(&params, state.diagnostics());
    let bookmarks = state.storage().search(&query).await?;

    debug!(count = bookmarks.len(), "Search completed");

    match format {
        SearchFormat::Json => Ok(Json(BookmarkList {
            bookmarks: &bookmarks,
        })
        .into_response()),
        SearchFormat::Jsonp => jsonp_response(
            &BookmarkList {
                bookmarks: &bookmarks,
            },
            params.callback.as_deref(),
        ),
        SearchFormat::Html => {
            let context = SearchPageContext::new(bookmarks, params, hostnames);
            let page = state.renderer().render(&context)?;
            Ok(Html(page).into_response())
        }
    }
}
