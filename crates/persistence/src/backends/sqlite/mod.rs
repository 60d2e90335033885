//! SQLite backend implementation.
//!
//! Supports in-memory databases (handy for tests) and file-based databases.
//! Filters are translated to SQL using a `REGEXP` function registered on
//! each connection, so matching semantics follow the `regex` crate in both
//! this backend and the in-memory one.
//!
//! # Example
//!
//! ```no_run
//! use bookmarks_persistence::backends::sqlite::SqliteBackend;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = SqliteBackend::open("./data/bookmarks.db")?;
//! backend.init_schema()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE bookmarks (
//!     id TEXT NOT NULL PRIMARY KEY,
//!     title TEXT NOT NULL,
//!     description TEXT NOT NULL DEFAULT '',
//!     href TEXT NOT NULL,
//!     protocol TEXT NOT NULL DEFAULT '',
//!     hostname TEXT NOT NULL DEFAULT '',
//!     pathname TEXT NOT NULL DEFAULT '',
//!     created TEXT NOT NULL
//! );
//! ```

mod backend;
mod functions;
mod schema;
mod search;
mod storage;

pub use backend::{SqliteBackend, SqliteBackendConfig};
pub use schema::SCHEMA_VERSION;
