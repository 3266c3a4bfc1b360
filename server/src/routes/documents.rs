//! Knowledge-base document routes.

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use uuid::Uuid;

use crate::services::document::{self, DocumentRow, UploadError};
use crate::state::AppState;

#[derive(Serialize)]
pub struct DocumentResponse {
    pub id: Uuid,
    pub title: String,
    pub created_at: String,
    pub source_type: String,
    pub source_path: Option<String>,
}

#[derive(Serialize)]
pub struct UploadResponse {
    pub document: DocumentResponse,
    pub embedding_ok: bool,
    pub embedding_message: String,
}

fn to_response(row: DocumentRow) -> DocumentResponse {
    let created_at = row
        .created_at
        .format(&Rfc3339)
        .unwrap_or_else(|_| row.created_at.to_string());
    DocumentResponse {
        id: row.id,
        title: row.title,
        created_at,
        source_type: row.source_type,
        source_path: row.source_path,
    }
}

/// `GET /api/documents` — list documents, newest first.
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<DocumentResponse>>, StatusCode> {
    let rows = document::list_documents(&state.pool).await.map_err(|e| {
        tracing::error!(error = %e, "document list query failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(rows.into_iter().map(to_response).collect()))
}

/// `POST /api/documents` — multipart upload of a single `file` field.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, (StatusCode, String)> {
    let mut file: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Malformed upload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("file").to_owned();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_owned();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| (StatusCode::BAD_REQUEST, format!("Reading the file failed: {e}")))?;
        file = Some((filename, content_type, bytes.to_vec()));
    }

    let Some((filename, content_type, bytes)) = file else {
        return Err((StatusCode::BAD_REQUEST, "No file field in upload.".to_owned()));
    };
    if bytes.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Uploaded file is empty.".to_owned()));
    }

    let outcome = document::upload_document(
        &state.pool,
        state.storage.as_ref(),
        state.embedder.as_ref(),
        &filename,
        &content_type,
        bytes,
    )
    .await
    .map_err(upload_error_to_response)?;

    Ok(Json(UploadResponse {
        document: to_response(outcome.document),
        embedding_ok: outcome.embedding_ok,
        embedding_message: outcome.embedding_message,
    }))
}

fn upload_error_to_response(err: UploadError) -> (StatusCode, String) {
    match err {
        UploadError::StorageUnavailable => {
            (StatusCode::SERVICE_UNAVAILABLE, "Document storage is not configured.".to_owned())
        }
        UploadError::Storage(e) => {
            tracing::error!(error = %e, "document storage write failed");
            (StatusCode::BAD_GATEWAY, "Storing the file failed.".to_owned())
        }
        UploadError::Insert(e) => {
            tracing::error!(error = %e, "document metadata insert failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Recording the document failed.".to_owned())
        }
    }
}
