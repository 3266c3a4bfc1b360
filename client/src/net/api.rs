//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so network
//! failures degrade UI behavior without crashing hydration. The chat
//! widget maps any `Err` here to its fixed fallback reply.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ContactForm, Document, PromptTemplate};
#[cfg(feature = "hydrate")]
use super::types::{ChatReply, ContactReply, UploadOutcome};

#[cfg(any(test, feature = "hydrate"))]
fn prompt_endpoint(id: &str) -> String {
    format!("/api/prompts/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn prompt_active_endpoint(id: &str) -> String {
    format!("/api/prompts/{id}/active")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

/// Send one chat turn to `POST /api/chat`.
///
/// # Errors
///
/// Returns an error string on transport failure, a non-2xx status, or a
/// malformed reply payload. Callers collapse all three to the same
/// fallback behavior.
pub async fn send_chat_message(conversation_id: &str, message: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "conversation_id": conversation_id,
            "message": message,
        });
        let resp = gloo_net::http::Request::post("/api/chat")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("chat request", resp.status()));
        }
        let body: ChatReply = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (conversation_id, message);
        Err("not available on server".to_owned())
    }
}

/// Submit the contact form to `POST /api/contact`.
///
/// Returns the server's message, shown verbatim to the user.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds
/// with a non-OK status.
pub async fn submit_contact(form: &ContactForm) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/contact")
            .json(form)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("contact request", resp.status()));
        }
        let body: ContactReply = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err("not available on server".to_owned())
    }
}

/// Fetch the document list (newest first) from `GET /api/documents`.
/// Returns `None` on any failure or on the server.
pub async fn fetch_documents() -> Option<Vec<Document>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/documents")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Document>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Upload a document file as multipart form data to `POST /api/documents`.
///
/// The server runs the storage/insert/embedding pipeline and reports the
/// embedding step's outcome separately from upload failure.
///
/// # Errors
///
/// Returns the server's error text (distinct per failed pipeline step)
/// or a transport error string.
#[cfg(feature = "hydrate")]
pub async fn upload_document(file: &web_sys::File) -> Result<UploadOutcome, String> {
    let form = web_sys::FormData::new().map_err(|_| "form construction failed".to_owned())?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| "form construction failed".to_owned())?;

    let resp = gloo_net::http::Request::post("/api/documents")
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        let detail = resp.text().await.unwrap_or_default();
        if detail.is_empty() {
            return Err(request_failed_message("upload", resp.status()));
        }
        return Err(detail);
    }
    resp.json::<UploadOutcome>().await.map_err(|e| e.to_string())
}

/// Fetch prompt templates (newest first) from `GET /api/prompts`.
/// Returns `None` on any failure or on the server.
pub async fn fetch_prompts() -> Option<Vec<PromptTemplate>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/prompts")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<PromptTemplate>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Create a prompt template via `POST /api/prompts`.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn create_prompt(name: &str, content: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name, "content": content });
        let resp = gloo_net::http::Request::post("/api/prompts")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("prompt create", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, content);
        Err("not available on server".to_owned())
    }
}

/// Edit a prompt template via `PATCH /api/prompts/{id}`. The server bumps
/// the version by exactly one as part of the same update.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn update_prompt(id: &str, name: &str, content: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name, "content": content });
        let resp = gloo_net::http::Request::patch(&prompt_endpoint(id))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("prompt update", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, name, content);
        Err("not available on server".to_owned())
    }
}

/// Toggle a prompt template's active flag via
/// `PATCH /api/prompts/{id}/active`.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn set_prompt_active(id: &str, is_active: bool) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "is_active": is_active });
        let resp = gloo_net::http::Request::patch(&prompt_active_endpoint(id))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("prompt toggle", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, is_active);
        Err("not available on server".to_owned())
    }
}
