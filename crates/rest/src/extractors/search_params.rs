//! Search parameters extractor.
//!
//! Extracts the recognized search parameters from the query string. Any
//! other parameter is dropped here and never reaches the query builder.

use std::collections::HashMap;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Serialize;

use crate::error::RestError;
use crate::responses::SearchFormat;
use crate::state::AppState;

/// Axum extractor for bookmark search parameters.
///
/// Empty values are treated as absent. Serializes back to the parameters the
/// caller supplied so a page can re-populate its form.
///
/// # Example
///
/// ```rust,ignore
/// use bookmarks_rest::extractors::SearchParams;
///
/// async fn search_handler(params: SearchParams) {
///     if let Some(hostname) = &params.hostname {
///         println!("hostname = {}", hostname);
///     }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    /// Pattern matched against the bookmark's hostname.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    /// Pattern matched against title, description and href.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,

    /// Requested output format, as given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// JSONP callback name, as given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<String>,
}

impl SearchParams {
    /// Creates empty search params.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates search params from a query map.
    ///
    /// `callback_param` names the query parameter carrying the JSONP callback.
    pub fn from_map(mut params: HashMap<String, String>, callback_param: &str) -> Self {
        let mut take = |name: &str| params.remove(name).filter(|v| !v.is_empty());

        Self {
            hostname: take("hostname"),
            q: take("q"),
            format: take("format"),
            callback: take(callback_param),
        }
    }

    /// Returns the negotiated output format.
    pub fn format(&self) -> SearchFormat {
        SearchFormat::parse(self.format.as_deref())
    }
}

impl<S> FromRequestParts<AppState<S>> for SearchParams
where
    S: Send + Sync + 'static,
{
    type Rejection = RestError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<S>,
    ) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| RestError::BadRequest {
                message: format!("Invalid query parameters: {}", e.body_text()),
            })?;

        Ok(SearchParams::from_map(params, state.jsonp_callback_param()))
    }
}
