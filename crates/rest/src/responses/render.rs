//! HTML page rendering for search results.
//!
//! Rendering is delegated to a [`PageRenderer`] held in application state.
//! [`ListingRenderer`] is the built-in implementation; deployments that want
//! real templates supply their own.

use std::fmt::Write;

use bookmarks_persistence::types::Bookmark;
use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::Serialize;
use thiserror::Error;

use crate::extractors::SearchParams;

/// Page title for search results.
pub const SEARCH_PAGE_TITLE: &str = "Bookmarks - Search Results";

/// Everything a renderer needs to draw the results page.
#[derive(Debug, Clone, Serialize)]
pub struct SearchPageContext {
    /// Matching bookmarks, newest first.
    pub bookmarks: Vec<Bookmark>,
    /// Fixed page title.
    pub title: &'static str,
    /// The request parameters, for re-populating form fields.
    pub query: SearchParams,
    /// Every hostname known to the store.
    pub hostnames: Vec<String>,
}

impl SearchPageContext {
    /// Creates a context with the standard title.
    pub fn new(bookmarks: Vec<Bookmark>, query: SearchParams, hostnames: Vec<String>) -> Self {
        Self {
            bookmarks,
            title: SEARCH_PAGE_TITLE,
            query,
            hostnames,
        }
    }
}

/// Errors raised while rendering a page.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing to the output buffer failed.
    #[error("failed to write page: {0}")]
    Write(#[from] std::fmt::Error),

    /// A template could not be rendered.
    #[error("template error: {0}")]
    Template(String),
}

/// Turns a [`SearchPageContext`] into an HTML document.
pub trait PageRenderer: Send + Sync {
    /// Renders the search results page.
    fn render(&self, context: &SearchPageContext) -> Result<String, RenderError>;
}

/// Minimal built-in renderer: a search form and a list of links.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListingRenderer;

impl PageRenderer for ListingRenderer {
    fn render(&self, context: &SearchPageContext) -> Result<String, RenderError> {
        let mut out = String::with_capacity(1024 + context.bookmarks.len() * 256);
        let title = encode_text(context.title);

        write!(
            out,
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n<h1>{}</h1>\n",
            title, title
        )?;

        self.render_form(&mut out, context)?;

        if context.bookmarks.is_empty() {
            out.push_str("<p class=\"empty\">No bookmarks found.</p>\n");
        } else {
            out.push_str("<ul class=\"bookmarks\">\n");
            for bookmark in &context.bookmarks {
                self.render_bookmark(&mut out, bookmark)?;
            }
            out.push_str("</ul>\n");
        }

        out.push_str("</body>\n</html>\n");
        Ok(out)
    }
}

impl ListingRenderer {
    fn render_form(&self, out: &mut String, context: &SearchPageContext) -> std::fmt::Result {
        let selected = context.query.hostname.as_deref().unwrap_or("");
        let q = context.query.q.as_deref().unwrap_or("");

        out.push_str("<form method=\"get\" action=\"/search\">\n");
        out.push_str("<select name=\"hostname\">\n<option value=\"\">Any host</option>\n");
        for hostname in &context.hostnames {
            write!(
                out,
                "<option value=\"{}\"{}>{}</option>\n",
                encode_double_quoted_attribute(hostname),
                if hostname == selected { " selected" } else { "" },
                encode_text(hostname)
            )?;
        }
        out.push_str("</select>\n");
        write!(
            out,
            "<input type=\"text\" name=\"q\" value=\"{}\">\n",
            encode_double_quoted_attribute(q)
        )?;
        out.push_str("<button type=\"submit\">Search</button>\n</form>\n");
        Ok(())
    }

    fn render_bookmark(&self, out: &mut String, bookmark: &Bookmark) -> std::fmt::Result {
        write!(
            out,
            "<li><a href=\"{}\">{}</a> <span class=\"hostname\">{}</span> <time datetime=\"{}\">{}</time>",
            encode_double_quoted_attribute(&bookmark.href),
            encode_text(&bookmark.title),
            encode_text(&bookmark.url.hostname),
            bookmark.created.to_rfc3339(),
            bookmark.created.format("%Y-%m-%d"),
        )?;
        if !bookmark.description.is_empty() {
            write!(out, "<p>{}</p>", encode_text(&bookmark.description))?;
        }
        out.push_str("</li>\n");
        Ok(())
    }
}
