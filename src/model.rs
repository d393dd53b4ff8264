//! Response model for the trends endpoint
//!
//! The server marks missing fields with the sentinel `"N/A"` and unusable
//! links with `"#"`. Those sentinels are translated into `Option`s here, at
//! the parse boundary, so nothing downstream ever compares against them.

use crate::error::{ExplorerError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sentinel the server uses for "field not provided"
pub const NOT_AVAILABLE: &str = "N/A";

/// Sentinel the server uses for "no usable link"
pub const NO_LINK: &str = "#";

/// One entry as it appears on the wire
///
/// Every field is optional so that a `null` or an absent key in one entry
/// never fails the whole response.
#[derive(Debug, Clone, Default, Deserialize)]
struct WireEntry {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    source: Option<String>,
    /// The bundled trends server names the source column this way
    #[serde(default)]
    source_link: Option<String>,
    #[serde(default)]
    link: Option<String>,
}

/// Top-level body of a `/trends` response
#[derive(Debug, Deserialize)]
struct WireBody {
    #[serde(default)]
    error: Option<String>,
    results: Option<Vec<WireEntry>>,
    #[serde(default)]
    terms: HashMap<String, u64>,
}

/// A single search hit, with sentinels already resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultEntry {
    /// `None` when the server sent `"N/A"`
    pub title: Option<String>,
    /// `None` when the server sent `"N/A"`
    pub date: Option<String>,
    /// `None` when the server sent `"N/A"`
    pub author: Option<String>,
    /// Shown verbatim, never translated
    pub source: String,
    /// `None` when missing, empty or `"#"`
    pub link: Option<String>,
}

impl ResultEntry {
    /// Build an entry from raw server strings, resolving sentinels.
    pub fn from_raw(title: &str, date: &str, author: &str, source: &str, link: &str) -> Self {
        Self::from(WireEntry {
            title: Some(title.to_string()),
            date: Some(date.to_string()),
            author: Some(author.to_string()),
            source: Some(source.to_string()),
            source_link: None,
            link: Some(link.to_string()),
        })
    }
}

impl From<WireEntry> for ResultEntry {
    fn from(wire: WireEntry) -> Self {
        Self {
            title: provided(wire.title.unwrap_or_default()),
            date: provided(wire.date.unwrap_or_default()),
            author: provided(wire.author.unwrap_or_default()),
            source: wire.source.or(wire.source_link).unwrap_or_default(),
            link: wire.link.filter(|l| !l.is_empty() && l != NO_LINK),
        }
    }
}

fn provided(value: String) -> Option<String> {
    if value == NOT_AVAILABLE {
        None
    } else {
        Some(value)
    }
}

/// Frequency of one title word across the result set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    pub term: String,
    pub count: u64,
}

/// A successfully parsed response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub results: Vec<ResultEntry>,
    /// Most frequent title words, highest count first
    pub terms: Vec<TermCount>,
}

impl SearchResult {
    pub fn new(results: Vec<ResultEntry>) -> Self {
        Self {
            results,
            terms: Vec::new(),
        }
    }
}

/// Parse a response body into a `SearchResult`.
///
/// A body carrying a non-empty `error` string is an application failure even
/// though it parsed; an empty `error` is ignored.
pub fn parse_body(body: &str) -> Result<SearchResult> {
    let wire: WireBody = serde_json::from_str(body)?;

    if let Some(message) = wire.error.filter(|m| !m.is_empty()) {
        return Err(ExplorerError::Application(message));
    }

    let results = wire
        .results
        .ok_or_else(|| ExplorerError::Parse("missing field `results`".to_string()))?;

    let mut terms: Vec<TermCount> = wire
        .terms
        .into_iter()
        .map(|(term, count)| TermCount { term, count })
        .collect();
    terms.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));

    Ok(SearchResult {
        results: results.into_iter().map(ResultEntry::from).collect(),
        terms,
    })
}
