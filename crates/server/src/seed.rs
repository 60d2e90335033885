//! Startup seeding from a JSON file.
//!
//! The file holds an array of bookmark objects. `id` and `created` are
//! optional; `url` is always derived from `href`.
//!
//! ```json
//! [
//!   {"title": "Rust", "href": "https://www.rust-lang.org/", "created": "2024-01-01T00:00:00Z"}
//! ]
//! ```

use std::path::Path;

use anyhow::Context;
use bookmarks_persistence::core::BookmarkStorage;
use bookmarks_persistence::types::{Bookmark, BookmarkDraft};
use tracing::info;

/// Parses a seed document into bookmarks.
pub fn parse_seed(json: &str) -> anyhow::Result<Vec<Bookmark>> {
    let drafts: Vec<BookmarkDraft> =
        serde_json::from_str(json).context("Seed file is not a JSON array of bookmarks")?;

    drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| {
            draft
                .into_bookmark()
                .with_context(|| format!("Invalid bookmark at index {}", index))
        })
        .collect()
}

/// Loads the seed file at `path` into `storage`. Returns the number inserted.
pub async fn seed_from_file<S>(storage: &S, path: &Path) -> anyhow::Result<usize>
where
    S: BookmarkStorage + ?Sized,
{
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;

    let bookmarks = parse_seed(&json)?;
    let inserted = storage
        .insert_all(bookmarks)
        .await
        .context("Failed to store seed bookmarks")?;

    info!(path = %path.display(), inserted, "Seeded bookmarks");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookmarks_persistence::backends::memory::MemoryBackend;
    use std::io::Write;

    #[test]
    fn test_parse_seed() {
        let bookmarks = parse_seed(
            r#"[
                {"id": "a", "title": "Example", "href": "https://example.com/x", "created": "2024-06-01T12:00:00Z"},
                {"title": "Test", "href": "https://test.org/", "description": "A test"}
            ]"#,
        )
        .unwrap();

        assert_eq!(bookmarks.len(), 2);
        assert_eq!(bookmarks[0].id, "a");
        assert_eq!(bookmarks[0].url.hostname, "example.com");
        assert_eq!(bookmarks[1].description, "A test");
        assert!(!bookmarks[1].id.is_empty());
    }

    #[test]
    fn test_parse_seed_rejects_bad_href() {
        let err = parse_seed(r#"[{"title": "Broken", "href": "not a url"}]"#).unwrap_err();
        assert!(err.to_string().contains("index 0"));
    }

    #[test]
    fn test_parse_seed_rejects_non_array() {
        assert!(parse_seed(r#"{"title": "x"}"#).is_err());
    }

    #[tokio::test]
    async fn test_seed_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"title": "Example", "href": "https://example.com/"}}]"#
        )
        .unwrap();

        let backend = MemoryBackend::new();
        let inserted = seed_from_file(&backend, file.path()).await.unwrap();

        assert_eq!(inserted, 1);
        assert_eq!(backend.len(), 1);
    }

    #[tokio::test]
    async fn test_seed_from_missing_file() {
        let backend = MemoryBackend::new();
        let result = seed_from_file(&backend, Path::new("/nonexistent/seed.json")).await;
        assert!(result.is_err());
    }
}
