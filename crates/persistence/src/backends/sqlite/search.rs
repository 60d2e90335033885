//! Translation of bookmark queries into SQL.

use crate::types::{BookmarkField, BookmarkQuery, FieldMatch, SortDirective};

/// A parameterized SELECT statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SqlQuery {
    pub sql: String,
    pub params: Vec<String>,
}

pub(crate) const SELECT_COLUMNS: &str =
    "id, title, description, href, protocol, hostname, pathname, created";

/// Builds the SELECT for a query. Every pattern becomes a bound parameter.
pub(crate) fn build_select(query: &BookmarkQuery) -> SqlQuery {
    let mut params = Vec::new();
    let mut conditions = Vec::new();

    for clause in query.filter.clauses() {
        conditions.push(clause_sql(clause, &mut params));
    }

    for group in query.filter.groups() {
        let alternatives: Vec<String> = group
            .iter()
            .map(|clause| clause_sql(clause, &mut params))
            .collect();
        conditions.push(format!("({})", alternatives.join(" OR ")));
    }

    let mut sql = format!("SELECT {} FROM bookmarks", SELECT_COLUMNS);
    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }
    sql.push_str(order_by(query.sort));

    SqlQuery { sql, params }
}

fn clause_sql(clause: &FieldMatch, params: &mut Vec<String>) -> String {
    params.push(clause.pattern.source().to_string());
    format!("{} REGEXP ?{}", column(clause.field), params.len())
}

fn column(field: BookmarkField) -> &'static str {
    match field {
        BookmarkField::Title => "title",
        BookmarkField::Description => "description",
        BookmarkField::Href => "href",
        BookmarkField::Hostname => "hostname",
    }
}

fn order_by(sort: SortDirective) -> &'static str {
    match sort {
        SortDirective::NewestFirst => " ORDER BY created DESC, id ASC",
    }
}
