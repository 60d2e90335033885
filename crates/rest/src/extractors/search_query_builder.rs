//! Search query builder.
//!
//! Converts [`SearchParams`] into a persistence layer [`BookmarkQuery`].

use bookmarks_persistence::types::{
    BookmarkField, BookmarkFilter, BookmarkQuery, FieldMatch, SortDirective, TextPattern,
};

use super::SearchParams;
use crate::diagnostics::PatternDiagnostics;

/// Fields searched by the free-text `q` parameter.
pub const TEXT_FIELDS: [BookmarkField; 3] = [
    BookmarkField::Title,
    BookmarkField::Description,
    BookmarkField::Href,
];

/// Compiles `pattern` as a regular expression, or matches it literally if it
/// does not compile.
///
/// The failure is reported to `diagnostics`; it never reaches the caller.
pub fn compile_or_literal(
    parameter: &str,
    pattern: &str,
    case_sensitive: bool,
    diagnostics: &dyn PatternDiagnostics,
) -> TextPattern {
    match TextPattern::regex(pattern, case_sensitive) {
        Ok(compiled) => compiled,
        Err(e) => {
            diagnostics.invalid_pattern(parameter, pattern, &e);
            TextPattern::literal(pattern, case_sensitive)
        }
    }
}

/// Builds a BookmarkQuery from request parameters.
///
/// - `hostname` adds a case-sensitive clause on `url.hostname`.
/// - `q` adds a case-insensitive OR-group over title, description and href.
/// - Results are always sorted newest first.
pub fn build_search_query(
    params: &SearchParams,
    diagnostics: &dyn PatternDiagnostics,
) -> BookmarkQuery {
    let mut filter = BookmarkFilter::new();

    if let Some(hostname) = params.hostname.as_deref().filter(|h| !h.is_empty()) {
        let pattern = compile_or_literal("hostname", hostname, true, diagnostics);
        filter = filter.and(FieldMatch::new(BookmarkField::Hostname, pattern));
    }

    if let Some(q) = params.q.as_deref().filter(|q| !q.is_empty()) {
        let pattern = compile_or_literal("q", q, false, diagnostics);
        filter = filter.or(TEXT_FIELDS
            .iter()
            .map(|field| FieldMatch::new(*field, pattern.clone()))
            .collect());
    }

    BookmarkQuery::new()
        .with_filter(filter)
        .with_sort(SortDirective::NewestFirst)
}
