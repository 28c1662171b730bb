use crate::types::{FetchConfig, Result};
use reqwest::header::CACHE_CONTROL;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, warn};
use url::Url;

/// Shared HTTP client for all provider adapters.
pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Self {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// GET `url` and decode the JSON body into `T`.
    ///
    /// Provider-side failures are absorbed here: a non-success status or a
    /// body that does not match the expected shape is logged and reported as
    /// `Ok(None)`, so the calling adapter contributes an empty page instead
    /// of failing the whole aggregation. Transport errors (connect, DNS,
    /// timeout) propagate and count as that adapter failing.
    pub async fn get_json<T: DeserializeOwned>(&self, provider: &str, url: Url) -> Result<Option<T>> {
        // Query strings carry API keys, so log only scheme://host/path.
        debug!(
            "{} request: {}://{}{}",
            provider,
            url.scheme(),
            url.host_str().unwrap_or(""),
            url.path()
        );

        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, format!("max-age={}", self.config.cache_ttl_seconds))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("{} error: HTTP {} {}", provider, status, body);
            return Ok(None);
        }

        let body = response.text().await?;
        Ok(Self::decode_body(provider, &body))
    }

    /// Decode a response body, treating a shape mismatch as a provider-side
    /// failure: the mismatch is logged and the caller sees `None`, the same
    /// outcome as a non-success status.
    pub fn decode_body<T: DeserializeOwned>(provider: &str, body: &str) -> Option<T> {
        match serde_json::from_str::<T>(body) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("{} returned an unexpected response shape: {}", provider, e);
                None
            }
        }
    }
}
