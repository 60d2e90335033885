//! Output format negotiation for search results.

use serde::Serialize;

/// Output format requested through the `format` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchFormat {
    /// Rendered HTML page (default).
    #[default]
    Html,
    /// `{"bookmarks": [...]}`.
    Json,
    /// The JSON payload wrapped in a callback invocation.
    Jsonp,
}

impl SearchFormat {
    /// Resolves a raw `format` value. Absent or unrecognized values fall back
    /// to [`SearchFormat::Html`].
    ///
    /// Matching is exact, so `JSON` is not `json`.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("json") => SearchFormat::Json,
            Some("jsonp") => SearchFormat::Jsonp,
            _ => SearchFormat::Html,
        }
    }

    /// Returns the canonical parameter value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchFormat::Html => "html",
            SearchFormat::Json => "json",
            SearchFormat::Jsonp => "jsonp",
        }
    }
}

impl std::fmt::Display for SearchFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(SearchFormat::parse(Some("json")), SearchFormat::Json);
        assert_eq!(SearchFormat::parse(Some("jsonp")), SearchFormat::Jsonp);
        assert_eq!(SearchFormat::parse(Some("html")), SearchFormat::Html);
        assert_eq!(SearchFormat::parse(None), SearchFormat::Html);
    }

    #[test]
    fn test_unrecognized_is_html() {
        assert_eq!(SearchFormat::parse(Some("xml")), SearchFormat::Html);
        assert_eq!(SearchFormat::parse(Some("JSON")), SearchFormat::Html);
        assert_eq!(SearchFormat::parse(Some("")), SearchFormat::Html);
    }
}
