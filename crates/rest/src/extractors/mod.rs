//! Axum extractors and request-to-query translation.
//!
//! - [`SearchParams`] - Extract the recognized search parameters
//! - [`build_search_query`] - Turn them into a persistence query

mod search_params;
pub mod search_query_builder;

pub use search_params::SearchParams;
pub use search_query_builder::{build_search_query, compile_or_literal};
