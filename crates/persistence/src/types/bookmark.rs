//! Bookmark record types.
//!
//! This module defines the [`Bookmark`] record as it is held by a store, and
//! [`BookmarkDraft`], the loosely-specified input used when seeding a store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A bookmark record.
///
/// The nested [`BookmarkUrl`] is derived from `href` when the record is
/// built and is what hostname filters match against.
///
/// # Examples
///
/// ```
/// use bookmarks_persistence::types::Bookmark;
///
/// let bookmark = Bookmark::new("Rust", "https://www.rust-lang.org/learn")
///     .unwrap()
///     .with_description("The Rust programming language");
///
/// assert_eq!(bookmark.url.hostname, "www.rust-lang.org");
/// assert_eq!(bookmark.url.pathname, "/learn");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// The record's logical ID.
    pub id: String,

    /// Human-readable title.
    pub title: String,

    /// Free-form description.
    #[serde(default)]
    pub description: String,

    /// The bookmarked link.
    pub href: String,

    /// Components parsed from `href`.
    pub url: BookmarkUrl,

    /// When the bookmark was created.
    pub created: DateTime<Utc>,
}

/// URL components of a bookmark's link.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookmarkUrl {
    /// Scheme with trailing colon, e.g. `https:`.
    pub protocol: String,

    /// Host name without port, e.g. `example.com`.
    pub hostname: String,

    /// Path component, e.g. `/docs/index.html`.
    pub pathname: String,
}

impl BookmarkUrl {
    /// Parses the components out of an absolute URL.
    pub fn parse(href: &str) -> Result<Self, ValidationError> {
        let parsed = url::Url::parse(href).map_err(|e| ValidationError::InvalidHref {
            href: href.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            protocol: format!("{}:", parsed.scheme()),
            hostname: parsed.host_str().unwrap_or_default().to_string(),
            pathname: parsed.path().to_string(),
        })
    }
}

/// A searchable text field of a bookmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookmarkField {
    /// The `title` field.
    Title,
    /// The `description` field.
    Description,
    /// The `href` field.
    Href,
    /// The nested `url.hostname` field.
    Hostname,
}

impl BookmarkField {
    /// Returns the field path as exposed in serialized records.
    pub fn path(&self) -> &'static str {
        match self {
            BookmarkField::Title => "title",
            BookmarkField::Description => "description",
            BookmarkField::Href => "href",
            BookmarkField::Hostname => "url.hostname",
        }
    }
}

impl std::fmt::Display for BookmarkField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

impl Bookmark {
    /// Creates a bookmark with a generated ID, created now.
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Result<Self, ValidationError> {
        let href = href.into();
        let url = BookmarkUrl::parse(&href)?;

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            description: String::new(),
            href,
            url,
            created: Utc::now(),
        })
    }

    /// Sets the ID.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the creation timestamp.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    /// Returns the value of a searchable field.
    pub fn field(&self, field: BookmarkField) -> &str {
        match field {
            BookmarkField::Title => &self.title,
            BookmarkField::Description => &self.description,
            BookmarkField::Href => &self.href,
            BookmarkField::Hostname => &self.url.hostname,
        }
    }
}

/// Input shape for bookmarks loaded from seed files.
///
/// Only `title` and `href` are required; everything else is filled in
/// by [`BookmarkDraft::into_bookmark`].
#[derive(Debug, Clone, Deserialize)]
pub struct BookmarkDraft {
    /// Optional explicit ID.
    #[serde(default)]
    pub id: Option<String>,

    /// Title of the bookmark.
    pub title: String,

    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,

    /// The link.
    pub href: String,

    /// Optional creation time (RFC 3339).
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

impl BookmarkDraft {
    /// Validates the draft and converts it into a full record.
    pub fn into_bookmark(self) -> Result<Bookmark, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingRequiredField {
                field: "title".to_string(),
            });
        }

        let mut bookmark = Bookmark::new(self.title, self.href)?;
        if let Some(id) = self.id {
            bookmark = bookmark.with_id(id);
        }
        if let Some(description) = self.description {
            bookmark = bookmark.with_description(description);
        }
        if let Some(created) = self.created {
            bookmark = bookmark.with_created(created);
        }
        Ok(bookmark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_derives_url_components() {
        let bookmark = Bookmark::new("Example", "http://example.com:8080/a/b?x=1").unwrap();
        assert_eq!(bookmark.url.protocol, "http:");
        assert_eq!(bookmark.url.hostname, "example.com");
        assert_eq!(bookmark.url.pathname, "/a/b");
        assert!(bookmark.description.is_empty());
        assert!(!bookmark.id.is_empty());
    }

    #[test]
    fn test_new_rejects_relative_href() {
        let result = Bookmark::new("Broken", "/just/a/path");
        assert!(matches!(result, Err(ValidationError::InvalidHref { .. })));
    }

    #[test]
    fn test_field_access() {
        let bookmark = Bookmark::new("Title", "https://docs.rs/regex")
            .unwrap()
            .with_description("Regex docs");
        assert_eq!(bookmark.field(BookmarkField::Title), "Title");
        assert_eq!(bookmark.field(BookmarkField::Description), "Regex docs");
        assert_eq!(bookmark.field(BookmarkField::Href), "https://docs.rs/regex");
        assert_eq!(bookmark.field(BookmarkField::Hostname), "docs.rs");
    }

    #[test]
    fn test_field_path() {
        assert_eq!(BookmarkField::Hostname.path(), "url.hostname");
        assert_eq!(BookmarkField::Href.to_string(), "href");
    }

    #[test]
    fn test_draft_into_bookmark() {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let draft: BookmarkDraft = serde_json::from_value(serde_json::json!({
            "id": "bm-1",
            "title": "Example",
            "href": "https://example.com/",
            "created": "2024-03-01T12:00:00Z"
        }))
        .unwrap();

        let bookmark = draft.into_bookmark().unwrap();
        assert_eq!(bookmark.id, "bm-1");
        assert_eq!(bookmark.created, created);
        assert_eq!(bookmark.url.hostname, "example.com");
    }

    #[test]
    fn test_draft_requires_title() {
        let draft = BookmarkDraft {
            id: None,
            title: "   ".to_string(),
            description: None,
            href: "https://example.com".to_string(),
            created: None,
        };
        assert!(matches!(
            draft.into_bookmark(),
            Err(ValidationError::MissingRequiredField { .. })
        ));
    }

    #[test]
    fn test_serialized_shape() {
        let bookmark = Bookmark::new("Example", "https://example.com/x")
            .unwrap()
            .with_id("bm-1");
        let value = serde_json::to_value(&bookmark).unwrap();
        assert_eq!(value["id"], "bm-1");
        assert_eq!(value["url"]["hostname"], "example.com");
        assert!(value["created"].is_string());
    }
}
