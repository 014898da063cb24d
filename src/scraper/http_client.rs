use crate::config::ScraperConfig;
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::debug;

pub struct HttpClient {
    inner: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { inner })
    }

    /// Fetch a URL as text. Any non-success status, network failure, or
    /// timeout is an error; requests are not retried.
    pub async fn get_text(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);

        let resp = self
            .inner
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request failed for {}", url))?;

        let resp = resp
            .error_for_status()
            .with_context(|| format!("HTTP error status for {}", url))?;

        resp.text().await.context("Failed to read response body")
    }
}
