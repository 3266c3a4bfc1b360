use super::*;

use std::sync::Arc;

use crate::services::chat::ChatBackend;
use crate::state::test_helpers::{test_app_state, test_app_state_with_chat};

struct EchoBackend;

#[async_trait::async_trait]
impl ChatBackend for EchoBackend {
    async fn send(&self, conversation_id: &str, message: &str) -> Result<String, ChatProxyError> {
        Ok(format!("[{conversation_id}] {message}"))
    }
}

struct DownBackend;

#[async_trait::async_trait]
impl ChatBackend for DownBackend {
    async fn send(&self, _conversation_id: &str, _message: &str) -> Result<String, ChatProxyError> {
        Err(ChatProxyError::UpstreamStatus(500))
    }
}

fn body(message: &str) -> ChatBody {
    ChatBody { conversation_id: "conv-1".to_owned(), message: message.to_owned() }
}

#[tokio::test]
async fn unconfigured_backend_returns_service_unavailable() {
    let state = test_app_state();
    let result = send_message(axum::extract::State(state), Json(body("Hello"))).await;
    assert_eq!(result.err(), Some(StatusCode::SERVICE_UNAVAILABLE));
}

#[tokio::test]
async fn empty_message_is_bad_request() {
    let state = test_app_state_with_chat(Arc::new(EchoBackend));
    let result = send_message(axum::extract::State(state), Json(body("   "))).await;
    assert_eq!(result.err(), Some(StatusCode::BAD_REQUEST));
}

#[tokio::test]
async fn message_is_trimmed_before_forwarding() {
    let state = test_app_state_with_chat(Arc::new(EchoBackend));
    let result = send_message(axum::extract::State(state), Json(body("  Hello  "))).await;
    let reply = result.expect("should succeed").0;
    assert_eq!(reply.message, "[conv-1] Hello");
}

#[tokio::test]
async fn upstream_failure_is_bad_gateway() {
    let state = test_app_state_with_chat(Arc::new(DownBackend));
    let result = send_message(axum::extract::State(state), Json(body("Hello"))).await;
    assert_eq!(result.err(), Some(StatusCode::BAD_GATEWAY));
}
