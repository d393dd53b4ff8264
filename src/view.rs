//! The search view: keyword input plus the outcome of the last search
//!
//! The outcome is a tagged union, so a view can never hold results and an
//! error at the same time. Every settled search replaces the outcome whole.

use crate::client::TrendsSource;
use crate::error::Result;
use crate::model::SearchResult;
use crate::render::{visible_rows, TableRow};

/// What the view currently displays below the input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Nothing searched yet
    #[default]
    Idle,
    /// Last settled search succeeded
    Success(SearchResult),
    /// Last settled search failed with this message
    Failure(String),
}

/// Search view state
#[derive(Debug, Clone, Default)]
pub struct SearchView {
    keyword: String,
    outcome: SearchOutcome,
}

impl SearchView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Replace the keyword with the input field's current text, verbatim.
    pub fn set_keyword(&mut self, text: impl Into<String>) {
        self.keyword = text.into();
    }

    pub fn outcome(&self) -> &SearchOutcome {
        &self.outcome
    }

    pub fn data(&self) -> Option<&SearchResult> {
        match &self.outcome {
            SearchOutcome::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            SearchOutcome::Failure(message) => Some(message),
            _ => None,
        }
    }

    /// Store a settled search: results on success, the message on failure.
    pub fn apply(&mut self, settled: Result<SearchResult>) {
        self.outcome = match settled {
            Ok(result) => {
                log::info!(target: "SEARCH", "search settled with {} results", result.results.len());
                SearchOutcome::Success(result)
            }
            Err(e) => {
                if e.is_search_failure() {
                    log::warn!(target: "SEARCH", "search failed: {}", e);
                } else {
                    log::error!(target: "SEARCH", "unexpected error during search: {}", e);
                }
                SearchOutcome::Failure(e.to_string())
            }
        };
    }

    /// Search for the current keyword and store the outcome.
    ///
    /// Issues exactly one request through `source`; blocks until it settles.
    pub fn run_search(&mut self, source: &dyn TrendsSource) {
        let settled = source.fetch(&self.keyword);
        self.apply(settled);
    }

    /// Rows to display; empty unless the last search succeeded.
    pub fn rows(&self) -> Vec<TableRow> {
        self.data().map(visible_rows).unwrap_or_default()
    }

    /// The error line as displayed, e.g. `Error: HTTP error! status: 500`.
    pub fn error_line(&self) -> Option<String> {
        self.error().map(|message| format!("Error: {}", message))
    }
}
