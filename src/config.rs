use crate::error::{ExplorerError, Result};
use std::path::PathBuf;

/// Address of the trends server when nothing else is configured
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the trends server, without trailing slash
    pub server_url: String,
    /// Where the log file is written; `None` means next to the executable
    pub log_file: Option<PathBuf>,
    /// Log debug-level messages too
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            log_file: None,
            verbose: false,
        }
    }
}

impl AppConfig {
    /// Replace the server URL after validating it.
    pub fn with_server_url(mut self, url: &str) -> Result<Self> {
        self.server_url = normalize_server_url(url)?;
        Ok(self)
    }

    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Full URL of the trends endpoint
    pub fn trends_url(&self) -> String {
        format!("{}/trends", self.server_url)
    }
}

/// Check that `url` is an absolute http(s) URL and strip trailing slashes.
pub fn normalize_server_url(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    let parsed = reqwest::Url::parse(trimmed)
        .map_err(|e| ExplorerError::Config(format!("server URL '{}': {}", url, e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(ExplorerError::Config(format!(
            "server URL '{}': unsupported scheme '{}'",
            url, other
        ))),
    }
}
