//! Prompt template admin routes.

#[cfg(test)]
#[path = "prompts_test.rs"]
mod prompts_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use uuid::Uuid;

use crate::services::prompt::{self, PromptError, PromptRow};
use crate::state::AppState;

#[derive(Serialize)]
pub struct PromptResponse {
    pub id: Uuid,
    pub name: String,
    pub content: String,
    pub version: i32,
    pub is_active: bool,
    pub created_at: String,
}

fn to_response(row: PromptRow) -> PromptResponse {
    let created_at = row
        .created_at
        .format(&Rfc3339)
        .unwrap_or_else(|_| row.created_at.to_string());
    PromptResponse {
        id: row.id,
        name: row.name,
        content: row.content,
        version: row.version,
        is_active: row.is_active,
        created_at,
    }
}

#[derive(Deserialize)]
pub struct PromptBody {
    pub name: String,
    pub content: String,
}

#[derive(Deserialize)]
pub struct PromptActiveBody {
    pub is_active: bool,
}

/// `GET /api/prompts` — list templates, newest first.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<PromptResponse>>, StatusCode> {
    let rows = prompt::list_prompts(&state.pool).await.map_err(prompt_error_to_status)?;
    Ok(Json(rows.into_iter().map(to_response).collect()))
}

/// `POST /api/prompts` — create a template at version 1.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<PromptBody>,
) -> Result<Json<PromptResponse>, StatusCode> {
    let (name, content) = validated_fields(&body)?;
    let row = prompt::create_prompt(&state.pool, name, content)
        .await
        .map_err(prompt_error_to_status)?;
    Ok(Json(to_response(row)))
}

/// `PATCH /api/prompts/:id` — replace name/content, bumping the version.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<PromptBody>,
) -> Result<Json<PromptResponse>, StatusCode> {
    let (name, content) = validated_fields(&body)?;
    let row = prompt::update_prompt(&state.pool, id, name, content)
        .await
        .map_err(prompt_error_to_status)?;
    Ok(Json(to_response(row)))
}

/// `PATCH /api/prompts/:id/active` — toggle activation.
pub async fn set_active(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<PromptActiveBody>,
) -> Result<Json<PromptResponse>, StatusCode> {
    let row = prompt::set_prompt_active(&state.pool, id, body.is_active)
        .await
        .map_err(prompt_error_to_status)?;
    Ok(Json(to_response(row)))
}

fn validated_fields(body: &PromptBody) -> Result<(&str, &str), StatusCode> {
    let name = body.name.trim();
    let content = body.content.trim();
    if name.is_empty() || content.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    Ok((name, content))
}

fn prompt_error_to_status(err: PromptError) -> StatusCode {
    match err {
        PromptError::NotFound => StatusCode::NOT_FOUND,
        PromptError::Database(e) => {
            tracing::error!(error = %e, "prompt query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
