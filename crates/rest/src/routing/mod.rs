//! Route configuration for the bookmark search API.

pub mod search_routes;

pub use search_routes::create_routes;
