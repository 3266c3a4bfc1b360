//! Knowledge-base document persistence and the upload pipeline.
//!
//! PIPELINE
//! ========
//! 1. Write the raw bytes to object storage under a collision-safe key.
//! 2. Insert the metadata row, recording the object's public URL.
//! 3. Ask the embedding endpoint to index the stored document.
//!
//! Storage and insert failures abort the upload; an embedding failure
//! does not, because the document itself is already durable. The outcome
//! carries the embedding result separately so the admin UI can report a
//! partial success.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::sync::Arc;

use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use super::embedding::EmbeddingApi;
use super::storage::{ObjectStore, StorageError};

const SOURCE_TYPE_UPLOAD: &str = "upload";

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("object storage is not configured")]
    StorageUnavailable,
    #[error("storing the file failed: {0}")]
    Storage(#[from] StorageError),
    #[error("recording the document failed: {0}")]
    Insert(#[from] sqlx::Error),
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DocumentRow {
    pub id: Uuid,
    pub title: String,
    pub source_type: String,
    pub source_path: Option<String>,
    pub created_at: OffsetDateTime,
}

/// Result of a completed upload. `embedding_ok` is false when storage and
/// insert succeeded but the embedding step did not.
#[derive(Debug)]
pub struct UploadOutcome {
    pub document: DocumentRow,
    pub embedding_ok: bool,
    pub embedding_message: String,
}

/// All documents, newest first.
pub async fn list_documents(pool: &PgPool) -> Result<Vec<DocumentRow>, sqlx::Error> {
    sqlx::query_as::<_, DocumentRow>(
        "SELECT id, title, source_type, source_path, created_at
         FROM documents
         ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await
}

/// Run the full upload pipeline for one file.
///
/// # Errors
///
/// Fails if storage is unconfigured, the object write fails, or the
/// metadata insert fails. Embedding failures are reported in the outcome,
/// not as errors.
pub async fn upload_document(
    pool: &PgPool,
    storage: Option<&Arc<dyn ObjectStore>>,
    embedder: Option<&Arc<dyn EmbeddingApi>>,
    filename: &str,
    content_type: &str,
    bytes: Vec<u8>,
) -> Result<UploadOutcome, UploadError> {
    let storage = storage.ok_or(UploadError::StorageUnavailable)?;

    let key = object_key(filename);
    let size_bytes = bytes.len() as i64;
    storage.upload(&key, bytes, content_type).await?;
    let public_url = storage.public_url(&key);

    let document = sqlx::query_as::<_, DocumentRow>(
        "INSERT INTO documents (title, source_type, source_path, size_bytes)
         VALUES ($1, $2, $3, $4)
         RETURNING id, title, source_type, source_path, created_at",
    )
    .bind(filename)
    .bind(SOURCE_TYPE_UPLOAD)
    .bind(&public_url)
    .bind(size_bytes)
    .fetch_one(pool)
    .await?;

    let (embedding_ok, embedding_message) = match embedder {
        Some(embedder) => match embedder.embed_document(document.id).await {
            Ok(message) => (true, message),
            Err(e) => {
                tracing::warn!(doc_id = %document.id, error = %e, "embedding step failed");
                (false, e.to_string())
            }
        },
        None => (false, "embedding endpoint is not configured".to_owned()),
    };

    Ok(UploadOutcome { document, embedding_ok, embedding_message })
}

/// Storage key for an uploaded file: a fresh UUID prefix keeps repeated
/// uploads of the same filename from colliding.
fn object_key(filename: &str) -> String {
    format!("documents/{}-{}", Uuid::new_v4(), sanitize_filename(filename))
}

/// Keep alphanumerics, dots, dashes, and underscores; everything else
/// becomes an underscore so the key stays URL-safe.
fn sanitize_filename(filename: &str) -> String {
    let cleaned: String = filename
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') { c } else { '_' })
        .collect();
    if cleaned.is_empty() { "file".to_owned() } else { cleaned }
}
