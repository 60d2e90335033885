//! BookmarkStorage and BookmarkSearchProvider for SQLite.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{ErrorCode, Row, params, params_from_iter};

use crate::core::{BookmarkSearchProvider, BookmarkStorage};
use crate::error::{ResourceError, StorageResult};
use crate::types::{Bookmark, BookmarkQuery, BookmarkUrl};

use super::SqliteBackend;
use super::backend::{BACKEND_NAME, internal_error};
use super::search::build_select;

/// Formats a timestamp as fixed-width UTC text.
fn format_created(created: &DateTime<Utc>) -> String {
    created.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn row_to_bookmark(row: &Row<'_>) -> rusqlite::Result<Bookmark> {
    let created: String = row.get(7)?;
    let created = DateTime::parse_from_rfc3339(&created)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e)))?
        .with_timezone(&Utc);

    Ok(Bookmark {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        href: row.get(3)?,
        url: BookmarkUrl {
            protocol: row.get(4)?,
            hostname: row.get(5)?,
            pathname: row.get(6)?,
        },
        created,
    })
}

#[async_trait]
impl BookmarkStorage for SqliteBackend {
    fn backend_name(&self) -> &'static str {
        BACKEND_NAME
    }

    async fn insert(&self, bookmark: Bookmark) -> StorageResult<Bookmark> {
        let conn = self.get_connection()?;

        let result = conn.execute(
            "INSERT INTO bookmarks (id, title, description, href, protocol, hostname, pathname, created)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                bookmark.id,
                bookmark.title,
                bookmark.description,
                bookmark.href,
                bookmark.url.protocol,
                bookmark.url.hostname,
                bookmark.url.pathname,
                format_created(&bookmark.created),
            ],
        );

        match result {
            Ok(_) => Ok(bookmark),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == ErrorCode::ConstraintViolation =>
            {
                Err(ResourceError::AlreadyExists { id: bookmark.id }.into())
            }
            Err(e) => Err(internal_error("Failed to insert bookmark", e)),
        }
    }

    async fn insert_all(&self, bookmarks: Vec<Bookmark>) -> StorageResult<usize> {
        let mut conn = self.get_connection()?;
        let tx = conn
            .transaction()
            .map_err(|e| internal_error("Failed to begin transaction", e))?;

        let count = bookmarks.len();
        {
            let mut stmt = tx
                .prepare(
                    "INSERT INTO bookmarks (id, title, description, href, protocol, hostname, pathname, created)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                )
                .map_err(|e| internal_error("Failed to prepare insert", e))?;

            for bookmark in &bookmarks {
                stmt.execute(params![
                    bookmark.id,
                    bookmark.title,
                    bookmark.description,
                    bookmark.href,
                    bookmark.url.protocol,
                    bookmark.url.hostname,
                    bookmark.url.pathname,
                    format_created(&bookmark.created),
                ])
                .map_err(|e| match e {
                    rusqlite::Error::SqliteFailure(f, _)
                        if f.code == ErrorCode::ConstraintViolation =>
                    {
                        ResourceError::AlreadyExists {
                            id: bookmark.id.clone(),
                        }
                        .into()
                    }
                    e => internal_error("Failed to insert bookmark", e),
                })?;
            }
        }

        tx.commit()
            .map_err(|e| internal_error("Failed to commit transaction", e))?;

        Ok(count)
    }

    async fn count(&self) -> StorageResult<u64> {
        let conn = self.get_connection()?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM bookmarks", [], |row| row.get(0))
            .map_err(|e| internal_error("Failed to count bookmarks", e))?;
        Ok(count as u64)
    }
}

#[async_trait]
impl BookmarkSearchProvider for SqliteBackend {
    async fn search(&self, query: &BookmarkQuery) -> StorageResult<Vec<Bookmark>> {
        let conn = self.get_connection()?;
        let select = build_select(query);

        tracing::trace!(sql = %select.sql, params = ?select.params, "Executing bookmark search");

        let mut stmt = conn
            .prepare(&select.sql)
            .map_err(|e| internal_error("Failed to prepare search", e))?;

        let rows = stmt
            .query_map(params_from_iter(select.params.iter()), row_to_bookmark)
            .map_err(|e| internal_error("Failed to execute search", e))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| internal_error("Failed to read search results", e))
    }

    async fn distinct_hostnames(&self) -> StorageResult<Vec<String>> {
        let conn = self.get_connection()?;
        let mut stmt = conn
            .prepare("SELECT DISTINCT hostname FROM bookmarks ORDER BY hostname")
            .map_err(|e| internal_error("Failed to prepare hostname query", e))?;

        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| internal_error("Failed to list hostnames", e))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| internal_error("Failed to read hostnames", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_created_format_is_fixed_width() {
        let a = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let b = Utc.with_ymd_and_hms(2024, 11, 12, 13, 14, 15).unwrap();
        assert_eq!(format_created(&a), "2024-01-02T03:04:05.000000Z");
        assert_eq!(format_created(&a).len(), format_created(&b).len());
        assert!(format_created(&a) < format_created(&b));
    }
}
