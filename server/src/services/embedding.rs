//! Remote embedding endpoint, invoked after a document upload.
//!
//! Embedding is best-effort: the document row is already committed when
//! this runs, and a failure here surfaces as a partial-success notice in
//! the admin UI rather than rolling anything back.

#[cfg(test)]
#[path = "embedding_test.rs"]
mod embedding_test;

use std::time::Duration;

use serde::Deserialize;
use uuid::Uuid;

const REQUEST_TIMEOUT_SECS: u64 = 120;
const CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("missing configuration: {0}")]
    Config(&'static str),
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),
    #[error("embedding request failed: {0}")]
    Transport(String),
    #[error("embedding endpoint returned status {0}")]
    UpstreamStatus(u16),
    #[error("malformed embedding response: {0}")]
    MalformedResponse(String),
    #[error("embedding rejected: {0}")]
    Rejected(String),
}

/// Embedding/indexing endpoint. Object-safe so tests can mock it.
#[async_trait::async_trait]
pub trait EmbeddingApi: Send + Sync {
    /// Ask the endpoint to embed the stored document; returns its status
    /// message on success.
    async fn embed_document(&self, doc_id: Uuid) -> Result<String, EmbeddingError>;
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    state: bool,
    message: String,
}

/// Reqwest-backed implementation talking to `EMBEDDING_URL`.
pub struct HttpEmbeddingApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpEmbeddingApi {
    /// Build the client from `EMBEDDING_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is missing or the HTTP client
    /// fails to build.
    pub fn from_env() -> Result<Self, EmbeddingError> {
        let base_url =
            std::env::var("EMBEDDING_URL").map_err(|_| EmbeddingError::Config("EMBEDDING_URL"))?;
        Self::new(&base_url)
    }

    /// Build the client against an explicit base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(base_url: &str) -> Result<Self, EmbeddingError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| EmbeddingError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait::async_trait]
impl EmbeddingApi for HttpEmbeddingApi {
    async fn embed_document(&self, doc_id: Uuid) -> Result<String, EmbeddingError> {
        let url = format!("{}/embeddings", self.base_url);
        let body = serde_json::json!({ "doc_id": doc_id });
        let response = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| EmbeddingError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EmbeddingError::UpstreamStatus(status.as_u16()));
        }
        let parsed: EmbedResponse = response
            .json()
            .await
            .map_err(|e| EmbeddingError::MalformedResponse(e.to_string()))?;
        if parsed.state {
            Ok(parsed.message)
        } else {
            Err(EmbeddingError::Rejected(parsed.message))
        }
    }
}
