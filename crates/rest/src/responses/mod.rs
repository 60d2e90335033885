//! Response shaping for search results.
//!
//! - [`format`] - Output format negotiation
//! - [`jsonp`] - JSONP callback wrapping
//! - [`render`] - HTML page rendering

pub mod format;
pub mod jsonp;
pub mod render;

use bookmarks_persistence::types::Bookmark;
use serde::Serialize;

pub use format::SearchFormat;
pub use jsonp::jsonp_response;
pub use render::{
    ListingRenderer, PageRenderer, RenderError, SEARCH_PAGE_TITLE, SearchPageContext,
};

/// Machine-readable search payload: `{"bookmarks": [...]}`.
#[derive(Debug, Serialize)]
pub struct BookmarkList<'a> {
    /// Matching bookmarks, newest first.
    pub bookmarks: &'a [Bookmark],
}
