//! Shared HTTP client: one connection pool, fixed timeout, gzip, and a
//! `User-Agent` header on every request.

use std::time::Duration;

use netgauge_core::config::CollectionConfig;
use netgauge_core::errors::CollectionError;
use serde::de::DeserializeOwned;

/// Thin wrapper over `reqwest::Client` that maps failures to
/// `CollectionError`. Cheap to clone.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(config: &CollectionConfig) -> Result<Self, CollectionError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .gzip(true)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| CollectionError::Network {
                url: String::new(),
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// GET `url` and return the body. Non-2xx responses are errors.
    pub async fn get_text(&self, url: &str) -> Result<String, CollectionError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| network_error(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CollectionError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().await.map_err(|e| network_error(url, &e))
    }

    /// GET `url` and decode the body as JSON.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        source: &str,
        url: &str,
    ) -> Result<T, CollectionError> {
        let body = self.get_text(url).await?;
        serde_json::from_str(&body).map_err(|e| CollectionError::MalformedPayload {
            source_name: source.to_string(),
            message: format!("{url}: {e}"),
        })
    }

    /// Whether a GET to `url` succeeds with a 2xx status.
    pub async fn reachable(&self, url: &str) -> bool {
        match self.client.get(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "reachability check failed");
                false
            }
        }
    }
}

fn network_error(url: &str, error: &reqwest::Error) -> CollectionError {
    CollectionError::Network {
        url: url.to_string(),
        reason: error.to_string(),
    }
}
