//! Filter predicates over bookmark fields.
//!
//! A [`BookmarkFilter`] is the conjunction of plain field clauses and
//! OR-groups of field clauses. Each clause pairs a [`BookmarkField`] with a
//! [`TextPattern`], which is either a compiled regular expression or an
//! escaped literal.
//!
//! Backends evaluate filters in two ways:
//!
//! - in-process, via [`BookmarkFilter::matches`]
//! - by translating clauses into their own query language, using
//!   [`TextPattern::source`] as an equivalent regular expression

use regex::{Regex, RegexBuilder};

use super::bookmark::{Bookmark, BookmarkField};

/// A pattern matched (unanchored) against a field value.
///
/// Literals are compiled as escaped regular expressions, so in-process
/// matching and [`TextPattern::source`] agree on case folding.
#[derive(Debug, Clone)]
pub struct TextPattern {
    /// `None` only for a literal too large to compile; it matches nothing.
    regex: Option<Regex>,
    literal: bool,
    case_sensitive: bool,
    source: String,
}

impl TextPattern {
    /// Compiles `pattern` as a regular expression.
    pub fn regex(pattern: &str, case_sensitive: bool) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(!case_sensitive)
            .build()?;

        Ok(Self {
            regex: Some(regex),
            literal: false,
            case_sensitive,
            source: with_case_flag(pattern.to_string(), case_sensitive),
        })
    }

    /// Builds a plain substring pattern. Never fails.
    pub fn literal(text: &str, case_sensitive: bool) -> Self {
        let escaped = regex::escape(text);
        let regex = RegexBuilder::new(&escaped)
            .case_insensitive(!case_sensitive)
            .size_limit(usize::MAX)
            .build()
            .ok();

        Self {
            regex,
            literal: true,
            case_sensitive,
            source: with_case_flag(escaped, case_sensitive),
        }
    }

    /// Returns true if the pattern occurs anywhere in `haystack`.
    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex
            .as_ref()
            .is_some_and(|regex| regex.is_match(haystack))
    }

    /// Returns true if this pattern was built from an escaped literal.
    pub fn is_literal(&self) -> bool {
        self.literal
    }

    /// Returns true if matching is case-sensitive.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Returns a regular expression equivalent to this pattern.
    ///
    /// Case-insensitive patterns carry an inline `(?i)` flag, so the source
    /// can be handed to any engine using the `regex` crate's syntax.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl PartialEq for TextPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.case_sensitive == other.case_sensitive
            && self.is_literal() == other.is_literal()
    }
}

fn with_case_flag(pattern: String, case_sensitive: bool) -> String {
    if case_sensitive {
        pattern
    } else {
        format!("(?i){}", pattern)
    }
}

/// A single field condition.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMatch {
    /// The field being tested.
    pub field: BookmarkField,
    /// The pattern the field must contain.
    pub pattern: TextPattern,
}

impl FieldMatch {
    /// Creates a new field condition.
    pub fn new(field: BookmarkField, pattern: TextPattern) -> Self {
        Self { field, pattern }
    }

    /// Evaluates the condition against a bookmark.
    pub fn matches(&self, bookmark: &Bookmark) -> bool {
        self.pattern.is_match(bookmark.field(self.field))
    }
}

/// Filter predicate: AND of all clauses and of every OR-group.
///
/// An empty filter matches every bookmark.
///
/// # Examples
///
/// ```
/// use bookmarks_persistence::types::{
///     Bookmark, BookmarkField, BookmarkFilter, FieldMatch, TextPattern,
/// };
///
/// let pattern = TextPattern::regex("rust", false).unwrap();
/// let filter = BookmarkFilter::new()
///     .and(FieldMatch::new(
///         BookmarkField::Hostname,
///         TextPattern::regex(r"\.org$", true).unwrap(),
///     ))
///     .or(vec![
///         FieldMatch::new(BookmarkField::Title, pattern.clone()),
///         FieldMatch::new(BookmarkField::Href, pattern),
///     ]);
///
/// let bookmark = Bookmark::new("Learn Rust", "https://www.rust-lang.org/learn").unwrap();
/// assert!(filter.matches(&bookmark));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookmarkFilter {
    clauses: Vec<FieldMatch>,
    groups: Vec<Vec<FieldMatch>>,
}

impl BookmarkFilter {
    /// Creates a filter that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a clause that must hold.
    pub fn and(mut self, clause: FieldMatch) -> Self {
        self.clauses.push(clause);
        self
    }

    /// Adds an OR-group; at least one of its clauses must hold.
    ///
    /// An empty group is ignored.
    pub fn or(mut self, group: Vec<FieldMatch>) -> Self {
        if !group.is_empty() {
            self.groups.push(group);
        }
        self
    }

    /// Returns the AND-clauses.
    pub fn clauses(&self) -> &[FieldMatch] {
        &self.clauses
    }

    /// Returns the OR-groups.
    pub fn groups(&self) -> &[Vec<FieldMatch>] {
        &self.groups
    }

    /// Returns true if the filter has no conditions.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty() && self.groups.is_empty()
    }

    /// Evaluates the filter against a bookmark.
    pub fn matches(&self, bookmark: &Bookmark) -> bool {
        self.clauses.iter().all(|c| c.matches(bookmark))
            && self
                .groups
                .iter()
                .all(|group| group.iter().any(|c| c.matches(bookmark)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bookmark(title: &str, href: &str) -> Bookmark {
        Bookmark::new(title, href).unwrap()
    }

    #[test]
    fn test_regex_case_sensitive() {
        let pattern = TextPattern::regex("^exa", true).unwrap();
        assert!(pattern.is_match("example.com"));
        assert!(!pattern.is_match("EXAMPLE.com"));
        assert_eq!(pattern.source(), "^exa");
        assert!(!pattern.is_literal());
    }

    #[test]
    fn test_regex_case_insensitive_source_has_flag() {
        let pattern = TextPattern::regex("rust|go", false).unwrap();
        assert!(pattern.is_match("Learning RUST"));
        assert_eq!(pattern.source(), "(?i)rust|go");
    }

    #[test]
    fn test_regex_rejects_malformed() {
        assert!(TextPattern::regex("[abc", true).is_err());
        assert!(TextPattern::regex("(unclosed", false).is_err());
    }

    #[test]
    fn test_literal_matches_substring() {
        let pattern = TextPattern::literal("[abc", true);
        assert!(pattern.is_match("xx[abcyy"));
        assert!(!pattern.is_match("abc"));
        assert!(pattern.is_literal());
        assert_eq!(pattern.source(), r"\[abc");
    }

    #[test]
    fn test_literal_case_insensitive() {
        let pattern = TextPattern::literal("C++(", false);
        assert!(pattern.is_match("learn c++( today"));
        assert_eq!(pattern.source(), r"(?i)C\+\+\(");
    }

    #[test]
    fn test_literal_case_folding_matches_source() {
        // U+017F folds to 's' under Unicode simple case folding.
        let literal = TextPattern::literal("\u{17F}(", false);
        let regex = Regex::new(literal.source()).unwrap();

        assert!(literal.is_match("S( title"));
        assert_eq!(literal.is_match("S( title"), regex.is_match("S( title"));
    }

    #[test]
    fn test_literal_source_compiles_to_same_matches() {
        let literal = TextPattern::literal("a.b*", true);
        let regex = Regex::new(literal.source()).unwrap();
        assert!(regex.is_match("xa.b*x"));
        assert!(!regex.is_match("aXbb"));
        assert!(!literal.is_match("aXbb"));
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let filter = BookmarkFilter::new();
        assert!(filter.is_empty());
        assert!(filter.matches(&bookmark("Anything", "https://a.example/")));
    }

    #[test]
    fn test_and_clause() {
        let filter = BookmarkFilter::new().and(FieldMatch::new(
            BookmarkField::Hostname,
            TextPattern::regex("example", true).unwrap(),
        ));
        assert!(filter.matches(&bookmark("A", "https://example.com/")));
        assert!(!filter.matches(&bookmark("B", "https://test.org/")));
    }

    #[test]
    fn test_or_group() {
        let pattern = TextPattern::regex("docs", false).unwrap();
        let filter = BookmarkFilter::new().or(vec![
            FieldMatch::new(BookmarkField::Title, pattern.clone()),
            FieldMatch::new(BookmarkField::Description, pattern.clone()),
            FieldMatch::new(BookmarkField::Href, pattern),
        ]);

        assert!(filter.matches(&bookmark("Docs", "https://a.example/")));
        assert!(filter.matches(&bookmark("x", "https://docs.rs/")));
        assert!(
            filter.matches(&bookmark("x", "https://a.example/").with_description("API docs"))
        );
        assert!(!filter.matches(&bookmark("x", "https://a.example/")));
    }

    #[test]
    fn test_and_combined_with_or() {
        let text = TextPattern::regex("rust", false).unwrap();
        let filter = BookmarkFilter::new()
            .and(FieldMatch::new(
                BookmarkField::Hostname,
                TextPattern::regex("github", true).unwrap(),
            ))
            .or(vec![FieldMatch::new(BookmarkField::Title, text)]);

        assert!(filter.matches(&bookmark("Rust repo", "https://github.com/rust-lang/rust")));
        assert!(!filter.matches(&bookmark("Go repo", "https://github.com/golang/go")));
        assert!(!filter.matches(&bookmark("Rust book", "https://doc.rust-lang.org/book")));
    }

    #[test]
    fn test_empty_or_group_is_ignored() {
        let filter = BookmarkFilter::new().or(vec![]);
        assert!(filter.is_empty());
    }
}
