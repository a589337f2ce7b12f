//! Async page fetcher wrapping reqwest.
//!
//! One GET per call. No retry and no cache: a failed fetch fails the request.

use async_trait::async_trait;

use crate::types::{StatsError, StatsResult};

/// Public stats portal that embeds the preloaded state.
pub const DEFAULT_STATS_URL: &str = "https://www.ubisoft.com/en-us/game/rainbow-six/siege/stats/";

/// Desktop Chrome user-agent; the portal serves a stripped page to unknown clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                                      AppleWebKit/537.36 (KHTML, like Gecko) \
                                      Chrome/131.0.0.0 Safari/537.36";

/// Anything that can produce the stats page text.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Return the full page body.
    async fn fetch_page(&self) -> StatsResult<String>;
}

/// HTTP fetcher for the stats page.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: reqwest::Client,
    url: String,
}

impl PageFetcher {
    /// Create a fetcher for `url` with the default user-agent.
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_user_agent(url, DEFAULT_USER_AGENT)
    }

    pub fn with_user_agent(url: impl Into<String>, user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(user_agent)
            .build()
            .unwrap_or_default();

        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn get_text(&self) -> Result<String, reqwest::Error> {
        self.client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_STATS_URL)
    }
}

#[async_trait]
impl PageSource for PageFetcher {
    async fn fetch_page(&self) -> StatsResult<String> {
        tracing::debug!("Fetching stats page {}", self.url);

        let body = self.get_text().await.map_err(|source| StatsError::Fetch {
            url: self.url.clone(),
            source,
        })?;

        tracing::debug!(bytes = body.len(), "Fetched stats page");
        Ok(body)
    }
}
