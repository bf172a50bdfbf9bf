//! HTTP client helpers for tests.

use bidscore::ScoreResult;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

pub struct TestClient {
    client: reqwest::Client,
    base_url: String,
}

impl TestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }

    /// Posts `body` to `/score`, with `Authorization: Bearer <token>` when a token is given.
    pub async fn score(
        &self,
        token: Option<&str>,
        body: &serde_json::Value,
    ) -> Result<(ScoreResult, String), TestClientError> {
        let mut builder = self.client.post(self.url("/score")).json(body);
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }

        let resp = builder.send().await?;

        let status_header = resp
            .headers()
            .get("x-bidscore-status")
            .and_then(|h| h.to_str().ok())
            .unwrap_or("unknown")
            .to_string();

        match resp.status().as_u16() {
            200 => Ok((resp.json().await?, status_header)),
            400 => Err(TestClientError::BadRequest(resp.json().await?)),
            401 => Err(TestClientError::Unauthorized(resp.json().await?)),
            403 => Err(TestClientError::Forbidden(resp.json().await?)),
            status => {
                let body = resp.text().await.unwrap_or_default();
                Err(TestClientError::UnexpectedStatus(status, body))
            }
        }
    }

    pub async fn health(&self) -> Result<HealthResponse, TestClientError> {
        let resp = self.client.get(self.url("/health")).send().await?;

        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            Err(TestClientError::UnexpectedStatus(status, body))
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub role_access: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: u16,
}

#[derive(Debug, thiserror::Error)]
pub enum TestClientError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0} - Body: {1}")]
    UnexpectedStatus(u16, String),

    #[error("Bad request: {0:?}")]
    BadRequest(ErrorBody),

    #[error("Unauthorized: {0:?}")]
    Unauthorized(ErrorBody),

    #[error("Forbidden: {0:?}")]
    Forbidden(ErrorBody),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_url_building() {
        let client = TestClient::new("http://localhost:9090");
        assert_eq!(client.url("/score"), "http://localhost:9090/score");
        assert_eq!(client.url("health"), "http://localhost:9090/health");
    }
}
