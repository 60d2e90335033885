//! JSONP response building.
//!
//! Follows the widely deployed convention for script-tag JSONP:
//!
//! ```text
//! /**/ typeof cb === 'function' && cb({"bookmarks":[]});
//! ```
//!
//! The callback name is reduced to `[A-Za-z0-9_$.\[\]]` and U+2028 / U+2029
//! are escaped. Without a usable callback the payload is returned as plain JSON.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::{HeaderValue, StatusCode, header};
use serde::Serialize;

use crate::error::RestResult;

/// Content type of a JSONP body.
pub const JAVASCRIPT_UTF_8: &str = "text/javascript; charset=utf-8";

/// Strips every character not allowed in a callback name.
///
/// Returns `None` when nothing usable remains.
pub fn sanitize_callback(name: &str) -> Option<String> {
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '.' | '[' | ']'))
        .collect();

    if cleaned.is_empty() { None } else { Some(cleaned) }
}

/// Wraps serialized JSON in a guarded callback invocation.
pub fn wrap_callback(callback: &str, json: &str) -> String {
    let body = json.replace('\u{2028}', "\\u2028").replace('\u{2029}', "\\u2029");
    format!(
        "/**/ typeof {cb} === 'function' && {cb}({body});",
        cb = callback,
        body = body
    )
}

/// Builds a JSONP response for `payload`.
pub fn jsonp_response<T: Serialize>(payload: &T, callback: Option<&str>) -> RestResult<Response> {
    let Some(callback) = callback.and_then(sanitize_callback) else {
        return Ok((StatusCode::OK, Json(payload)).into_response());
    };

    let json = serde_json::to_string(payload)?;
    let body = wrap_callback(&callback, &json);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(JAVASCRIPT_UTF_8)),
            (
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ),
        ],
        body,
    )
        .into_response())
}
