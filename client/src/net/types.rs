//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON response shapes so serde
//! round-trips stay lossless and pages can stay schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Reply payload from `POST /api/chat`.
#[derive(Clone, Debug, Deserialize)]
pub struct ChatReply {
    pub message: String,
}

/// Contact form fields posted to `POST /api/contact`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub project_details: String,
}

/// Response from the contact endpoint; `message` is shown verbatim.
#[derive(Clone, Debug, Deserialize)]
pub struct ContactReply {
    pub message: String,
}

/// A knowledge-base document row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub created_at: String,
    pub source_type: String,
    pub source_path: Option<String>,
}

/// Outcome of a document upload: the inserted row plus the embedding
/// step's result, which is reported separately from upload failure.
#[derive(Clone, Debug, Deserialize)]
pub struct UploadOutcome {
    pub document: Document,
    pub embedding_ok: bool,
    pub embedding_message: String,
}

/// A prompt template row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTemplate {
    pub id: String,
    pub name: String,
    pub content: String,
    pub version: i32,
    pub is_active: bool,
    pub created_at: String,
}
