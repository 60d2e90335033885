//! Error types for the persistence layer.
//!
//! Errors are split by category: resource state, record validation and
//! backend failures. The search path only ever surfaces [`BackendError`];
//! the other categories belong to the write path used for seeding.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Record state errors
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors related to record state.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// A bookmark with the given ID already exists.
    #[error("bookmark already exists: {id}")]
    AlreadyExists { id: String },
}

/// Errors related to bookmark validation.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The link could not be parsed as an absolute URL.
    #[error("invalid href '{href}': {message}")]
    InvalidHref { href: String, message: String },

    /// Missing required field.
    #[error("missing required field: {field}")]
    MissingRequiredField { field: String },
}

/// Errors originating from the database backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend is currently unavailable.
    #[error("backend unavailable: {backend_name}")]
    Unavailable {
        backend_name: String,
        message: String,
    },

    /// Connection to the backend failed.
    #[error("connection failed to {backend_name}: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// Schema migration error.
    #[error("schema migration failed: {message}")]
    MigrationError { message: String },

    /// Internal backend error.
    #[error("internal error in {backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl BackendError {
    /// Returns true if the error means the backend could not be reached at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            BackendError::Unavailable { .. } | BackendError::ConnectionFailed { .. }
        )
    }
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::Resource(ResourceError::AlreadyExists {
            id: "bm-1".to_string(),
        });
        assert_eq!(err.to_string(), "bookmark already exists: bm-1");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidHref {
            href: "not a url".to_string(),
            message: "relative URL without a base".to_string(),
        };
        assert!(err.to_string().starts_with("invalid href 'not a url'"));
    }

    #[test]
    fn test_backend_error_display() {
        let err = BackendError::ConnectionFailed {
            backend_name: "sqlite".to_string(),
            message: "timed out".to_string(),
        };
        assert_eq!(err.to_string(), "connection failed to sqlite: timed out");
    }

    #[test]
    fn test_backend_error_is_unavailable() {
        assert!(
            BackendError::Unavailable {
                backend_name: "memory".to_string(),
                message: "down".to_string(),
            }
            .is_unavailable()
        );
        assert!(
            !BackendError::MigrationError {
                message: "syntax".to_string(),
            }
            .is_unavailable()
        );
    }

    #[test]
    fn test_storage_error_from_backend_error() {
        let err: StorageError = BackendError::MigrationError {
            message: "boom".to_string(),
        }
        .into();
        assert!(matches!(err, StorageError::Backend(_)));
    }
}
