use crate::common::error::{Result, UpdaterError};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

/// Port to the remote static data host
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Retrieve `url` and decode its body as JSON
    async fn fetch_json(&self, url: &str) -> Result<Value>;
}

/// Build the absolute URL of a dataset from the host's base URL
pub fn join_url(base_url: &str, relative_path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        relative_path.trim_start_matches('/')
    )
}

/// reqwest-backed source. No timeout is configured: a fetch blocks until the
/// host answers or the transport gives up.
pub struct ReqwestSource {
    client: reqwest::Client,
}

impl Default for ReqwestSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ReqwestSource {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DataSource for ReqwestSource {
    #[instrument(skip(self))]
    async fn fetch_json(&self, url: &str) -> Result<Value> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpdaterError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        debug!("Received {} bytes from {}", body.len(), url);
        let value: Value = serde_json::from_slice(&body)?;
        Ok(value)
    }
}
