//! Error types for Topic Explorer
//!
//! The first four variants make up the search pipeline taxonomy. They all
//! collapse to a single displayable message once a search settles; the rest
//! are ambient failures that propagate to `main`.

use thiserror::Error;

/// Main error type for Topic Explorer operations
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// The request could not be sent or the response could not be received.
    #[error("{0}")]
    Transport(String),

    /// A response arrived with a non-success status code.
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    /// The response body was not valid JSON of the expected shape.
    #[error("{0}")]
    Parse(String),

    /// The server answered with a success status but an explicit `error` field.
    #[error("{0}")]
    Application(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("GUI error: {0}")]
    Gui(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Topic Explorer operations
pub type Result<T> = std::result::Result<T, ExplorerError>;

impl ExplorerError {
    /// Whether this error belongs to the search pipeline (and therefore ends
    /// up displayed in the view rather than aborting the program).
    pub fn is_search_failure(&self) -> bool {
        matches!(
            self,
            ExplorerError::Transport(_)
                | ExplorerError::HttpStatus(_)
                | ExplorerError::Parse(_)
                | ExplorerError::Application(_)
        )
    }
}

impl From<serde_json::Error> for ExplorerError {
    fn from(err: serde_json::Error) -> Self {
        ExplorerError::Parse(err.to_string())
    }
}
