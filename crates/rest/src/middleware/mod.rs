//! HTTP middleware for the bookmark search API.
//!
//! - [`hostnames`] - Known-hostname lookup ahead of search

pub mod hostnames;

pub use hostnames::{KnownHostnames, hostnames_middleware};
