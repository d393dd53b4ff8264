//! Turning a search view into something to look at
//!
//! `visible_rows` is the one place that decides which entries are shown and
//! how their cells read. The text, HTML and JSON renderers below, the TUI
//! and the GUI all go through it.

use crate::model::{SearchResult, TermCount};
use crate::view::{SearchOutcome, SearchView};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cell text for a date or author the server did not provide
pub const MISSING_CELL: &str = "-";

/// Column headings, in display order
pub const HEADERS: [&str; 4] = ["Title", "Date", "Author", "Source"];

/// One displayable table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub title: String,
    pub link: String,
    pub date: String,
    pub author: String,
    pub source: String,
}

impl TableRow {
    /// Cells in heading order
    pub fn cells(&self) -> [&str; 4] {
        [&self.title, &self.date, &self.author, &self.source]
    }
}

/// Rows for a result: entries without a title or without a usable link are
/// dropped, order is kept.
pub fn visible_rows(result: &SearchResult) -> Vec<TableRow> {
    result
        .results
        .iter()
        .filter_map(|entry| {
            let title = entry.title.as_ref()?;
            let link = entry.link.as_ref()?;
            Some(TableRow {
                title: title.clone(),
                link: link.clone(),
                date: entry.date.clone().unwrap_or_else(|| MISSING_CELL.to_string()),
                author: entry.author.clone().unwrap_or_else(|| MISSING_CELL.to_string()),
                source: entry.source.clone(),
            })
        })
        .collect()
}

/// Output formats of the one-shot search command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}

/// Render the view in the requested format.
pub fn render(view: &SearchView, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_text(view),
        OutputFormat::Json => render_json(view),
        OutputFormat::Html => render_html(view),
    }
}

// --- Text ---

/// Plain-text rendering: the error line, or an aligned table plus top terms.
pub fn render_text(view: &SearchView) -> String {
    match view.outcome() {
        SearchOutcome::Idle => String::new(),
        SearchOutcome::Failure(_) => {
            let mut out = view.error_line().unwrap_or_default();
            out.push('\n');
            out
        }
        SearchOutcome::Success(result) => {
            let rows = visible_rows(result);
            let mut out = String::from("Search Results\n\n");
            out.push_str(&text_table(&rows));
            if !result.terms.is_empty() {
                out.push('\n');
                out.push_str(&text_terms(&result.terms));
            }
            out
        }
    }
}

fn text_table(rows: &[TableRow]) -> String {
    let mut widths = HEADERS.map(|h| h.width());
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row.cells()) {
            *w = (*w).max(cell.width());
        }
    }

    let mut out = String::new();
    push_text_line(&mut out, &HEADERS, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let rule: Vec<&str> = rule.iter().map(String::as_str).collect();
    push_text_line(&mut out, &rule, &widths);

    for row in rows {
        push_text_line(&mut out, &row.cells(), &widths);
        out.push_str(&format!("    {}\n", row.link));
    }

    if rows.is_empty() {
        out.push_str("(no results)\n");
    }
    out
}

fn push_text_line(out: &mut String, cells: &[&str], widths: &[usize; 4]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| pad_to_width(cell, *w))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

/// Left-align `text` in a column `width` display cells wide.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(pad))
}

/// Cut `text` to at most `width` display cells, ending in `…` when cut.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let cw = c.width().unwrap_or(0);
        if used + cw > width - 1 {
            break;
        }
        out.push(c);
        used += cw;
    }
    out.push('…');
    out
}

fn text_terms(terms: &[TermCount]) -> String {
    let listed: Vec<String> = terms
        .iter()
        .map(|t| format!("{} ({})", t.term, t.count))
        .collect();
    format!("Top terms: {}\n", listed.join(", "))
}

// --- HTML ---

/// HTML fragment equivalent to the original results page.
pub fn render_html(view: &SearchView) -> String {
    match view.outcome() {
        SearchOutcome::Idle => String::new(),
        SearchOutcome::Failure(message) => {
            format!("<p class=\"error\">Error: {}</p>\n", escape_html(message))
        }
        SearchOutcome::Success(result) => {
            let mut out = String::new();
            out.push_str("<div class=\"results\">\n  <h2>Search Results</h2>\n  <table>\n");
            out.push_str("    <thead>\n      <tr>");
            for header in HEADERS {
                out.push_str(&format!("<th>{}</th>", header));
            }
            out.push_str("</tr>\n    </thead>\n    <tbody>\n");
            for row in visible_rows(result) {
                out.push_str(&format!(
                    "      <tr><td><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                    escape_html(&row.link),
                    escape_html(&row.title),
                    escape_html(&row.date),
                    escape_html(&row.author),
                    escape_html(&row.source),
                ));
            }
            out.push_str("    </tbody>\n  </table>\n");
            if !result.terms.is_empty() {
                out.push_str("  <ul class=\"terms\">\n");
                for t in &result.terms {
                    out.push_str(&format!(
                        "    <li>{} <span class=\"count\">{}</span></li>\n",
                        escape_html(&t.term),
                        t.count
                    ));
                }
                out.push_str("  </ul>\n");
            }
            out.push_str("</div>\n");
            out
        }
    }
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// --- JSON ---

#[derive(Serialize)]
struct JsonView<'a> {
    keyword: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rows: Option<Vec<TableRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    terms: Option<&'a [TermCount]>,
}

/// JSON document with either `error` or `rows` (plus `terms`).
pub fn render_json(view: &SearchView) -> String {
    let doc = JsonView {
        keyword: view.keyword(),
        error: view.error(),
        rows: view.data().map(visible_rows),
        terms: view.data().map(|r| r.terms.as_slice()),
    };
    serde_json::to_string_pretty(&doc).unwrap_or_else(|e| json_error(&e.to_string()))
}

fn json_error(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}
