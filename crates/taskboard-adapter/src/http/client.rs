/*
[INPUT]:  HTTP configuration (base URL, timeouts)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::http::error::{Result, TaskboardError};

/// Longest response-body prefix carried into an Api error message
const ERROR_BODY_LIMIT: usize = 256;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the task API
#[derive(Debug, Clone)]
pub struct TaskboardClient {
    http_client: Client,
    base_url: Url,
}

impl TaskboardClient {
    /// Create a new client with default configuration
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(ClientConfig::default(), base_url)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL for an endpoint, appending to the base path
    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| TaskboardError::Config("base URL cannot be a base".to_string()))?;
            segments.pop_if_empty();
            for segment in endpoint.split('/').filter(|s| !s.is_empty()) {
                segments.push(segment);
            }
        }
        Ok(url)
    }

    /// Build request builder for an endpoint
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.endpoint_url(endpoint)?;
        tracing::debug!(method = %method, url = %url, "sending request");
        Ok(self.http_client.request(method, url))
    }

    /// Send a request and decode the JSON response body.
    ///
    /// Non-2xx statuses become `Api` errors; 2xx bodies that fail to decode
    /// into the expected shape become `MalformedResponse`.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(TaskboardError::api_error(status, truncate_body(&body)));
        }

        serde_json::from_str(&body)
            .map_err(|err| TaskboardError::MalformedResponse(err.to_string()))
    }

    /// Send a request, checking only the status. Any response body is ignored.
    pub(crate) async fn send_expect_ok(&self, builder: RequestBuilder) -> Result<()> {
        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TaskboardError::api_error(status, truncate_body(&body)));
        }

        Ok(())
    }
}

fn truncate_body(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(ERROR_BODY_LIMIT) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}
