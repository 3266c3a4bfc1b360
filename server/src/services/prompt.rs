//! Prompt template persistence.
//!
//! Templates are never deleted: editing bumps the version counter in
//! place and deactivation flips `is_active`, so an audit trail of what
//! drove the assistant survives every change.

#[cfg(test)]
#[path = "prompt_test.rs"]
mod prompt_test;

use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("prompt template not found")]
    NotFound,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PromptRow {
    pub id: Uuid,
    pub name: String,
    pub content: String,
    pub version: i32,
    pub is_active: bool,
    pub created_at: OffsetDateTime,
}

const SELECT_COLUMNS: &str = "id, name, content, version, is_active, created_at";

/// All templates, newest first.
pub async fn list_prompts(pool: &PgPool) -> Result<Vec<PromptRow>, PromptError> {
    let rows = sqlx::query_as::<_, PromptRow>(
        "SELECT id, name, content, version, is_active, created_at
         FROM prompt_templates
         ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Create a template at version 1, active.
pub async fn create_prompt(pool: &PgPool, name: &str, content: &str) -> Result<PromptRow, PromptError> {
    let row = sqlx::query_as::<_, PromptRow>(&format!(
        "INSERT INTO prompt_templates (name, content)
         VALUES ($1, $2)
         RETURNING {SELECT_COLUMNS}"
    ))
    .bind(name)
    .bind(content)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Replace a template's name and content, bumping its version.
///
/// # Errors
///
/// Returns `NotFound` if no template has the given id.
pub async fn update_prompt(
    pool: &PgPool,
    id: Uuid,
    name: &str,
    content: &str,
) -> Result<PromptRow, PromptError> {
    sqlx::query_as::<_, PromptRow>(&format!(
        "UPDATE prompt_templates
         SET name = $2, content = $3, version = version + 1
         WHERE id = $1
         RETURNING {SELECT_COLUMNS}"
    ))
    .bind(id)
    .bind(name)
    .bind(content)
    .fetch_optional(pool)
    .await?
    .ok_or(PromptError::NotFound)
}

/// Activate or deactivate a template without touching its version.
///
/// # Errors
///
/// Returns `NotFound` if no template has the given id.
pub async fn set_prompt_active(pool: &PgPool, id: Uuid, is_active: bool) -> Result<PromptRow, PromptError> {
    sqlx::query_as::<_, PromptRow>(&format!(
        "UPDATE prompt_templates
         SET is_active = $2
         WHERE id = $1
         RETURNING {SELECT_COLUMNS}"
    ))
    .bind(id)
    .bind(is_active)
    .fetch_optional(pool)
    .await?
    .ok_or(PromptError::NotFound)
}
