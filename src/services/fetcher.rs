// src/services/fetcher.rs

//! Listings page fetcher.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{AppError, Result};
use crate::models::SourceConfig;
use crate::utils::http;

/// Source of raw listing page documents.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the document at `url` as text.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Fetches pages over HTTP with a fixed timeout and no retries.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher using the source's user agent and timeout.
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = http::create_client(&config.user_agent, config.timeout_secs)?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        log::info!("Fetching listings page {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Fetch {
                url: url.to_string(),
                status,
            });
        }

        let text = response.text().await?;
        log::debug!("Fetched {} bytes from {}", text.len(), url);
        Ok(text)
    }
}
