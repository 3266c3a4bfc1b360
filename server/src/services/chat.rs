//! Chat proxy — forwards widget turns to the upstream assistant backend.
//!
//! DESIGN
//! ======
//! The site is a thin proxy: one POST per turn carrying the conversation
//! id and message, one JSON reply. No retry, no streaming, no local
//! conversation state; the browser owns the transcript and the upstream
//! owns the model.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::time::Duration;

use serde::Deserialize;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ChatProxyError {
    #[error("missing configuration: {0}")]
    Config(&'static str),
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),
    #[error("upstream request failed: {0}")]
    Transport(String),
    #[error("upstream returned status {0}")]
    UpstreamStatus(u16),
    #[error("malformed upstream response: {0}")]
    MalformedResponse(String),
}

/// Upstream chat backend. Object-safe so tests can mock it.
#[async_trait::async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send one turn and return the assistant's reply text.
    async fn send(&self, conversation_id: &str, message: &str) -> Result<String, ChatProxyError>;
}

#[derive(Debug, Deserialize)]
struct UpstreamReply {
    message: String,
}

/// Reqwest-backed implementation talking to `CHAT_UPSTREAM_URL`.
pub struct HttpChatBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpChatBackend {
    /// Build the backend from `CHAT_UPSTREAM_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is missing or the HTTP client
    /// fails to build.
    pub fn from_env() -> Result<Self, ChatProxyError> {
        let base_url =
            std::env::var("CHAT_UPSTREAM_URL").map_err(|_| ChatProxyError::Config("CHAT_UPSTREAM_URL"))?;
        Self::new(&base_url)
    }

    /// Build the backend against an explicit base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(base_url: &str) -> Result<Self, ChatProxyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ChatProxyError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait::async_trait]
impl ChatBackend for HttpChatBackend {
    async fn send(&self, conversation_id: &str, message: &str) -> Result<String, ChatProxyError> {
        let url = format!("{}/chat", self.base_url);
        let body = serde_json::json!({
            "conversation_id": conversation_id,
            "message": message,
        });
        let response = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatProxyError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatProxyError::UpstreamStatus(status.as_u16()));
        }
        let reply: UpstreamReply = response
            .json()
            .await
            .map_err(|e| ChatProxyError::MalformedResponse(e.to_string()))?;
        Ok(reply.message)
    }
}
