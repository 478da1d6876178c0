// Copyright 2026 Syncmark Contributors
// SPDX-License-Identifier: Apache-2.0

//! HTTP client for the benchmarks feed.

use crate::settings::FeedSettings;
use syncmark_core::BenchmarkHistory;
use thiserror::Error;
use tracing::{debug, info};

/// Errors from fetching or decoding the feed document.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The HTTP request failed or returned a non-success status.
    #[error("feed request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not a valid feed document.
    #[error(transparent)]
    Decode(#[from] syncmark_core::Error),
}

/// Result alias for feed operations.
pub type Result<T> = std::result::Result<T, FeedError>;

/// Client for the one-time feed fetch.
///
/// The feed is fetched once per session and the caller owns the resulting
/// history for the session lifetime. No retries, authentication, or
/// pagination; a failed fetch propagates to the caller.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: reqwest::Client,
    url: String,
}

impl FeedClient {
    /// Create a client for the configured feed URL.
    pub fn new(settings: &FeedSettings) -> Self {
        Self::with_url(settings.feed_url.clone())
    }

    /// Create a client for an explicit URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// The feed URL this client fetches.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and decode the benchmarks feed.
    pub async fn fetch(&self) -> Result<BenchmarkHistory> {
        debug!(url = %self.url, "fetching benchmarks feed");
        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let history = BenchmarkHistory::from_json_str(&body)?;
        info!(url = %self.url, revisions = history.len(), "benchmarks feed loaded");
        Ok(history)
    }
}
