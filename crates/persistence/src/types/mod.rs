//! Core types for the persistence layer.
//!
//! - [`Bookmark`], [`BookmarkUrl`], [`BookmarkDraft`] - Records and seed input
//! - [`BookmarkFilter`], [`FieldMatch`], [`TextPattern`] - Filter predicates
//! - [`BookmarkQuery`], [`SortDirective`] - Complete queries
//!
//! # Building a Query
//!
//! ```
//! use bookmarks_persistence::types::{
//!     BookmarkField, BookmarkFilter, BookmarkQuery, FieldMatch, SortDirective, TextPattern,
//! };
//!
//! let filter = BookmarkFilter::new().and(FieldMatch::new(
//!     BookmarkField::Hostname,
//!     TextPattern::regex("example", true).unwrap(),
//! ));
//!
//! let query = BookmarkQuery::new()
//!     .with_filter(filter)
//!     .with_sort(SortDirective::NewestFirst);
//! ```

mod bookmark;
mod filter;
mod query;

pub use bookmark::{Bookmark, BookmarkDraft, BookmarkField, BookmarkUrl};
pub use filter::{BookmarkFilter, FieldMatch, TextPattern};
pub use query::{BookmarkQuery, SortDirective};
