//! Application state for the bookmark search API.
//!
//! This module defines the shared state available to all request handlers:
//! the storage backend, configuration, the pattern diagnostics sink and the
//! page renderer.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::diagnostics::{PatternDiagnostics, TracingDiagnostics};
use crate::responses::{ListingRenderer, PageRenderer};

/// Shared application state.
///
/// # Type Parameters
///
/// * `S` - The storage backend type
///
/// # Example
///
/// ```rust,ignore
/// use bookmarks_rest::{AppState, ServerConfig};
/// use bookmarks_persistence::backends::memory::MemoryBackend;
/// use std::sync::Arc;
///
/// let state = AppState::new(Arc::new(MemoryBackend::new()), ServerConfig::default());
/// ```
pub struct AppState<S> {
    /// The storage backend.
    storage: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,

    /// Where invalid pattern reports go.
    diagnostics: Arc<dyn PatternDiagnostics>,

    /// Renders the HTML results page.
    renderer: Arc<dyn PageRenderer>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            config: Arc::clone(&self.config),
            diagnostics: Arc::clone(&self.diagnostics),
            renderer: Arc::clone(&self.renderer),
        }
    }
}

impl<S> AppState<S> {
    /// Creates a new AppState with tracing diagnostics and the built-in
    /// [`ListingRenderer`].
    pub fn new(storage: Arc<S>, config: ServerConfig) -> Self {
        Self {
            storage,
            config: Arc::new(config),
            diagnostics: Arc::new(TracingDiagnostics),
            renderer: Arc::new(ListingRenderer),
        }
    }

    /// Replaces the diagnostics sink.
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn PatternDiagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Replaces the page renderer.
    pub fn with_renderer(mut self, renderer: Arc<dyn PageRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Returns a reference to the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns a clone of the storage Arc.
    pub fn storage_arc(&self) -> Arc<S> {
        Arc::clone(&self.storage)
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the diagnostics sink.
    pub fn diagnostics(&self) -> &dyn PatternDiagnostics {
        self.diagnostics.as_ref()
    }

    /// Returns the page renderer.
    pub fn renderer(&self) -> &dyn PageRenderer {
        self.renderer.as_ref()
    }

    /// Returns the query parameter naming the JSONP callback.
    pub fn jsonp_callback_param(&self) -> &str {
        &self.config.jsonp_callback_param
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responses::{RenderError, SearchPageContext};

    struct MockStorage;

    struct StaticRenderer;

    impl PageRenderer for StaticRenderer {
        fn render(&self, _context: &SearchPageContext) -> Result<String, RenderError> {
            Ok("static".to_string())
        }
    }

    #[test]
    fn test_app_state_config_access() {
        let config = ServerConfig {
            jsonp_callback_param: "cb".to_string(),
            ..Default::default()
        };
        let state = AppState::new(Arc::new(MockStorage), config);

        assert_eq!(state.jsonp_callback_param(), "cb");
        assert_eq!(state.config().port, 8080);
    }

    #[test]
    fn test_app_state_with_renderer() {
        let state = AppState::new(Arc::new(MockStorage), ServerConfig::default())
            .with_renderer(Arc::new(StaticRenderer));

        let context = SearchPageContext::new(vec![], Default::default(), vec![]);
        assert_eq!(state.renderer().render(&context).unwrap(), "static");
    }

    #[test]
    fn test_app_state_clone_shares_storage() {
        let state = AppState::new(Arc::new(MockStorage), ServerConfig::default());
        let cloned = state.clone();

        assert!(Arc::ptr_eq(&state.storage_arc(), &cloned.storage_arc()));
    }
}
