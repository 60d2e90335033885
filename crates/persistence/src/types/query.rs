//! Bookmark query types.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::bookmark::Bookmark;
use super::filter::BookmarkFilter;

/// Result ordering.
///
/// Results are always newest first; no request input changes this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirective {
    /// `created` descending, ties broken by ID ascending.
    #[default]
    NewestFirst,
}

impl SortDirective {
    /// Orders two bookmarks by this directive.
    pub fn compare(&self, a: &Bookmark, b: &Bookmark) -> Ordering {
        match self {
            SortDirective::NewestFirst => b
                .created
                .cmp(&a.created)
                .then_with(|| a.id.cmp(&b.id)),
        }
    }
}

/// A complete bookmark query: filter plus ordering.
///
/// # Examples
///
/// ```
/// use bookmarks_persistence::types::{BookmarkFilter, BookmarkQuery, SortDirective};
///
/// let query = BookmarkQuery::new().with_filter(BookmarkFilter::new());
/// assert_eq!(query.sort, SortDirective::NewestFirst);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookmarkQuery {
    /// Records must satisfy this filter.
    pub filter: BookmarkFilter,

    /// Result ordering.
    pub sort: SortDirective,
}

impl BookmarkQuery {
    /// Creates a query matching everything, newest first.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the filter.
    pub fn with_filter(mut self, filter: BookmarkFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the sort directive.
    pub fn with_sort(mut self, sort: SortDirective) -> Self {
        self.sort = sort;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_newest_first() {
        use chrono::{Duration, Utc};

        let now = Utc::now();
        let older = Bookmark::new("Older", "https://a.example/")
            .unwrap()
            .with_created(now - Duration::days(1));
        let newer = Bookmark::new("Newer", "https://b.example/")
            .unwrap()
            .with_created(now);

        let mut items = vec![older.clone(), newer.clone()];
        items.sort_by(|a, b| SortDirective::NewestFirst.compare(a, b));
        assert_eq!(items, vec![newer, older]);
    }

    #[test]
    fn test_compare_ties_by_id() {
        let created = chrono::Utc::now();
        let a = Bookmark::new("A", "https://a.example/")
            .unwrap()
            .with_id("a")
            .with_created(created);
        let b = Bookmark::new("B", "https://b.example/")
            .unwrap()
            .with_id("b")
            .with_created(created);

        assert_eq!(SortDirective::NewestFirst.compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_default_query() {
        let query = BookmarkQuery::new();
        assert!(query.filter.is_empty());
        assert_eq!(query.sort, SortDirective::NewestFirst);
    }
}
