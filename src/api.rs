use std::time::Duration;

use serde_json::Value;

/// Path of the single endpoint the form talks to
const SUBMIT_PATH: &str = "/bfhl";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Failures of one submission round-trip. The variants exist for logging;
/// the UI collapses all of them into a single generic message.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
    #[error("response body is not valid JSON: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Client for the submission endpoint. Cheap to clone; clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct Api {
    client: reqwest::Client,
    endpoint: String,
}

impl Api {
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");
        Self {
            client,
            endpoint: endpoint_url(base_url),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the payload as a JSON body and decode the JSON response.
    pub async fn submit(&self, payload: Value) -> Result<Value, ApiError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        response.json().await.map_err(ApiError::Decode)
    }
}

fn endpoint_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), SUBMIT_PATH)
}
