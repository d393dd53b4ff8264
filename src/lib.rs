//! Topic Explorer - browse research trends from a local trends server
//!
//! Sends a keyword to the server's `/trends` endpoint and shows the returned
//! results as a filtered table, in a terminal UI, a desktop window or as a
//! one-shot command line search.
//!
//! # Features
//!
//! - **Typed responses**: the server's `"N/A"` and `"#"` sentinels become
//!   `Option`s at parse time
//! - **One outcome at a time**: a view holds either results or an error
//! - **Three front ends**: terminal UI, desktop window (`gui` feature), CLI
//!
//! # Example
//!
//! ```no_run
//! use topic_explorer::{AppConfig, SearchView, TrendsClient};
//!
//! fn main() -> topic_explorer::Result<()> {
//!     let config = AppConfig::default().with_server_url("http://localhost:5000")?;
//!     let client = TrendsClient::new(&config)?;
//!
//!     let mut view = SearchView::new();
//!     view.set_keyword("javascript");
//!     view.run_search(&client);
//!
//!     if let Some(line) = view.error_line() {
//!         println!("{}", line);
//!     }
//!     for row in view.rows() {
//!         println!("{} ({}) {}", row.title, row.date, row.link);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
#[cfg(feature = "gui")]
pub mod gui;
pub mod logging;
pub mod model;
pub mod render;
pub mod tui;
pub mod view;
pub mod worker;

// Re-export main types
pub use client::{TrendsClient, TrendsSource};
pub use config::AppConfig;
pub use error::{ExplorerError, Result};
pub use model::{parse_body, ResultEntry, SearchResult, TermCount};
pub use render::{visible_rows, OutputFormat, TableRow};
pub use view::{SearchOutcome, SearchView};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
