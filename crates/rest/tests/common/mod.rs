//! Common test utilities for API testing.
//!
//! - [`harness`] - Test server construction and failing backends
//! - [`fixtures`] - Bookmark fixtures

#![allow(dead_code)]

pub mod fixtures;
pub mod harness;
