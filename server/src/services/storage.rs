//! Object storage client for uploaded documents.
//!
//! Talks to a Supabase-style storage REST API: objects are written with
//! `POST {base}/object/{bucket}/{key}` and served publicly from
//! `{base}/object/public/{bucket}/{key}`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 60;
const CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("missing configuration: {0}")]
    Config(&'static str),
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),
    #[error("storage request failed: {0}")]
    Transport(String),
    #[error("storage returned status {0}")]
    UpstreamStatus(u16),
}

/// Write-and-address interface over the document bucket.
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload raw bytes under `key` with the given content type.
    async fn upload(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), StorageError>;

    /// Public URL of an object previously written under `key`.
    fn public_url(&self, key: &str) -> String;
}

/// Reqwest-backed store talking to `STORAGE_URL`.
pub struct HttpObjectStore {
    http: reqwest::Client,
    base_url: String,
    bucket: String,
    api_key: String,
}

impl HttpObjectStore {
    /// Build the store from `STORAGE_URL`, `STORAGE_API_KEY`, and the
    /// optional `STORAGE_BUCKET` (defaults to `documents`).
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or the HTTP
    /// client fails to build.
    pub fn from_env() -> Result<Self, StorageError> {
        let base_url = std::env::var("STORAGE_URL").map_err(|_| StorageError::Config("STORAGE_URL"))?;
        let api_key =
            std::env::var("STORAGE_API_KEY").map_err(|_| StorageError::Config("STORAGE_API_KEY"))?;
        let bucket = std::env::var("STORAGE_BUCKET").unwrap_or_else(|_| "documents".to_owned());
        Self::new(&base_url, &bucket, &api_key)
    }

    /// Build the store against explicit connection details.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(base_url: &str, bucket: &str, api_key: &str) -> Result<Self, StorageError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| StorageError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            bucket: bucket.to_owned(),
            api_key: api_key.to_owned(),
        })
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait::async_trait]
impl ObjectStore for HttpObjectStore {
    async fn upload(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), StorageError> {
        let url = format!("{}/object/{}/{}", self.base_url, self.bucket, key);
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .header("content-type", content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| StorageError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StorageError::UpstreamStatus(status.as_u16()));
        }
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/object/public/{}/{}", self.base_url, self.bucket, key)
    }
}
