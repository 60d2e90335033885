//! Diagnostics for search patterns that fail to compile.
//!
//! The query builder never fails on a bad pattern. It falls back to a literal
//! match and reports the problem through a [`PatternDiagnostics`]
//! implementation held in application state.

use std::error::Error;

/// Receives reports about pattern compilation failures.
pub trait PatternDiagnostics: Send + Sync {
    /// Called when `pattern`, supplied through `parameter`, is not a valid
    /// regular expression and is being matched literally instead.
    fn invalid_pattern(&self, parameter: &str, pattern: &str, error: &dyn Error);
}

/// Reports invalid patterns as `tracing` warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl PatternDiagnostics for TracingDiagnostics {
    fn invalid_pattern(&self, parameter: &str, pattern: &str, error: &dyn Error) {
        tracing::warn!(
            parameter,
            pattern,
            error = %error,
            "Bad regex pattern, falling back to substring match"
        );
    }
}
