//! HTTP request handlers.
//!
//! - [`search`] - Bookmark search
//! - [`health`] - Health, liveness and readiness probes

pub mod health;
pub mod search;

pub use health::{health_handler, liveness_handler, readiness_handler};
pub use search::search_handler;
