//! HTTP access to the trends server

use crate::config::AppConfig;
use crate::error::{ExplorerError, Result};
use crate::model::{parse_body, SearchResult};
use reqwest::blocking::Client;

/// Anything that can answer a keyword search.
///
/// The front ends only talk to this trait, so tests can swap the network out.
pub trait TrendsSource: Send + Sync {
    fn fetch(&self, keyword: &str) -> Result<SearchResult>;
}

/// Blocking client for `GET <base>/trends?keyword=<keyword>`
#[derive(Clone)]
pub struct TrendsClient {
    http: Client,
    trends_url: String,
}

impl TrendsClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("topic-explorer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ExplorerError::Config(format!("HTTP client: {}", e)))?;

        Ok(Self {
            http,
            trends_url: config.trends_url(),
        })
    }

    pub fn trends_url(&self) -> &str {
        &self.trends_url
    }
}

impl TrendsSource for TrendsClient {
    fn fetch(&self, keyword: &str) -> Result<SearchResult> {
        log::info!(target: "CLIENT", "GET {} keyword={:?}", self.trends_url, keyword);

        let response = self
            .http
            .get(&self.trends_url)
            .query(&[("keyword", keyword)])
            .send()
            .map_err(|e| ExplorerError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!(target: "CLIENT", "server answered {}", status.as_u16());
            return Err(ExplorerError::HttpStatus(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| ExplorerError::Transport(e.to_string()))?;
        log::debug!(target: "CLIENT", "received {} bytes", body.len());

        parse_body(&body)
    }
}
