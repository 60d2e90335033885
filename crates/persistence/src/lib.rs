//! Bookmark persistence layer.
//!
//! This crate stores bookmark records and answers filtered, ordered queries
//! over them. Queries are expressed with the types in [`types`] and executed
//! by any backend implementing the traits in [`core`].
//!
//! # Architecture
//!
//! - [`types`] - Bookmark records, text patterns, filters and queries
//! - [`error`] - Error types for all operations
//! - [`core`] - Storage and search traits
//! - [`backends`] - Backend implementations (memory, SQLite)
//!
//! # Quick Start
//!
//! ```
//! use bookmarks_persistence::types::{
//!     Bookmark, BookmarkField, BookmarkFilter, BookmarkQuery, FieldMatch, TextPattern,
//! };
//!
//! let bookmark = Bookmark::new("Rust", "https://www.rust-lang.org/").unwrap();
//!
//! let query = BookmarkQuery::new().with_filter(BookmarkFilter::new().and(FieldMatch::new(
//!     BookmarkField::Hostname,
//!     TextPattern::regex("rust-lang", true).unwrap(),
//! )));
//!
//! assert!(query.filter.matches(&bookmark));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod types;

pub use error::{StorageError, StorageResult};
pub use types::{Bookmark, BookmarkQuery};

pub use core::{BookmarkSearchProvider, BookmarkStorage};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
