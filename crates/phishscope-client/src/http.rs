//! HTTP implementation of the analysis backend.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use phishscope_core::{AnalysisResult, HealthReport, SimilarityResult};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

use crate::Backend;

/// Default per-request timeout. The backend's own page fetch budget is
/// 15s, with model inference on top.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot read upload file: {0}")]
    Io(#[from] std::io::Error),
    #[error("backend error: {0}")]
    Backend(String),
}

/// Response envelope both endpoints wrap their payloads in:
/// `{"success": true, "result": {...}}` or `{"error": "..."}`.
#[derive(Deserialize)]
struct Envelope<T> {
    result: Option<T>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for the analysis backend's REST endpoints.
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a client for the given backend base URL with the default
    /// request timeout.
    ///
    /// `base_url` should be like `http://localhost:5000` (no trailing slash).
    pub fn new(base_url: String) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit per-request timeout.
    pub fn with_timeout(base_url: String, timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Classify a URL via `POST /predict`.
    pub async fn predict(&self, url: &str) -> Result<AnalysisResult, ClientError> {
        let mut result: AnalysisResult = self.post_url("/predict", url).await?;
        // The backend reports fetch/model failures inside an HTTP 200 result.
        if let Some(message) = result.error.take() {
            return Err(ClientError::Backend(message));
        }
        Ok(result)
    }

    /// Compare a URL against its matched reference brand via `POST /similarity`.
    pub async fn similarity(&self, url: &str) -> Result<SimilarityResult, ClientError> {
        self.post_url("/similarity", url).await
    }

    /// Upload a local screenshot to `/similarity-upload` for comparison.
    pub async fn similarity_upload(&self, path: &Path) -> Result<SimilarityResult, ClientError> {
        let endpoint = format!("{}/similarity-upload", self.base_url);
        info!(endpoint = %endpoint, file = %path.display(), "uploading screenshot for similarity");

        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "screenshot.png".to_string());
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new().part("file", part);

        let resp = self.client.post(&endpoint).multipart(form).send().await?;
        Self::unwrap_envelope(resp).await
    }

    /// Probe the backend via `GET /health`.
    pub async fn health(&self) -> Result<HealthReport, ClientError> {
        let endpoint = format!("{}/health", self.base_url);
        info!(endpoint = %endpoint, "probing backend health");

        let resp = self.client.get(&endpoint).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Server {
                status: status.as_u16(),
                body,
            });
        }
        // /health is the one endpoint that returns a flat payload.
        Ok(resp.json().await?)
    }

    async fn post_url<T: DeserializeOwned>(
        &self,
        path: &str,
        url: &str,
    ) -> Result<T, ClientError> {
        let endpoint = format!("{}{path}", self.base_url);
        info!(endpoint = %endpoint, url = %url, "submitting analysis request");

        let resp = self
            .client
            .post(&endpoint)
            .json(&serde_json::json!({ "url": url }))
            .send()
            .await?;
        Self::unwrap_envelope(resp).await
    }

    async fn unwrap_envelope<T: DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            // Error bodies are usually JSON like {"error": "..."}; fall back
            // to the raw text when they are not.
            if let Ok(envelope) = serde_json::from_str::<Envelope<serde_json::Value>>(&body)
                && let Some(message) = envelope.error
            {
                return Err(ClientError::Backend(message));
            }
            return Err(ClientError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: Envelope<T> = serde_json::from_str(&body)?;
        if let Some(message) = envelope.error {
            return Err(ClientError::Backend(message));
        }
        envelope
            .result
            .ok_or_else(|| ClientError::Backend("response carried no result".into()))
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn classify(&self, url: &str) -> Result<AnalysisResult, ClientError> {
        self.predict(url).await
    }

    async fn compare_similarity(&self, url: &str) -> Result<SimilarityResult, ClientError> {
        self.similarity(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_trims_trailing_slash() {
        let backend = HttpBackend::new("http://localhost:5000/".into()).unwrap();
        assert_eq!(backend.base_url, "http://localhost:5000");
    }

    #[test]
    fn envelope_with_result_parses() {
        let json = r#"{
            "success": true,
            "result": {
                "url": "https://example.com",
                "ml_confidence": 0.42,
                "llm_risk_level": "suspicious"
            }
        }"#;
        let envelope: Envelope<AnalysisResult> = serde_json::from_str(json).unwrap();
        let result = envelope.result.unwrap();
        assert_eq!(result.ml_confidence, Some(0.42));
        assert!(envelope.error.is_none());
    }

    #[test]
    fn envelope_with_error_parses() {
        let json = r#"{"error": "No url provided"}"#;
        let envelope: Envelope<AnalysisResult> = serde_json::from_str(json).unwrap();
        assert!(envelope.result.is_none());
        assert_eq!(envelope.error.as_deref(), Some("No url provided"));
    }

    #[test]
    fn envelope_wraps_similarity_fallback() {
        // A successful envelope whose result explains a missing score.
        let json = r#"{
            "success": true,
            "result": {
                "brand": "example",
                "score": null,
                "details": {"message": "Screenshot failed. Similarity analysis not available."},
                "weights": null
            }
        }"#;
        let envelope: Envelope<SimilarityResult> = serde_json::from_str(json).unwrap();
        let result = envelope.result.unwrap();
        assert!(result.score.is_none());
        assert!(result.details.is_some());
    }
}
