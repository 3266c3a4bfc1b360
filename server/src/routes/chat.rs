//! Chat proxy route.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::services::chat::ChatProxyError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChatBody {
    pub conversation_id: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub message: String,
}

/// `POST /api/chat` — forward one turn to the upstream assistant.
///
/// 503 when no upstream is configured, 400 on an empty message, 502 when
/// the upstream fails.
pub async fn send_message(
    State(state): State<AppState>,
    Json(body): Json<ChatBody>,
) -> Result<Json<ChatResponse>, StatusCode> {
    let Some(chat) = state.chat.as_ref() else {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    };

    let message = body.message.trim();
    if message.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let reply = chat
        .send(&body.conversation_id, message)
        .await
        .map_err(chat_error_to_status)?;

    Ok(Json(ChatResponse { message: reply }))
}

fn chat_error_to_status(err: ChatProxyError) -> StatusCode {
    tracing::warn!(error = %err, "chat upstream call failed");
    StatusCode::BAD_GATEWAY
}
