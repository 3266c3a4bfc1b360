//! Contact form route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;

use crate::services::contact::{self, ContactError, ContactForm};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ContactResponse {
    pub message: String,
}

/// `POST /api/contact` — validate, record, and (best-effort) notify.
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<Json<ContactResponse>, (StatusCode, String)> {
    let validated = contact::validate(&form).map_err(contact_error_to_response)?;

    contact::record_submission(&state.pool, &validated)
        .await
        .map_err(contact_error_to_response)?;

    if let Some(mailer) = state.mailer.as_ref() {
        mailer.notify(&validated).await;
    }

    Ok(Json(ContactResponse { message: contact::SUBMITTED_MESSAGE.to_owned() }))
}

fn contact_error_to_response(err: ContactError) -> (StatusCode, String) {
    match err {
        ContactError::Invalid(msg) => (StatusCode::BAD_REQUEST, msg.to_owned()),
        ContactError::Database(e) => {
            tracing::error!(error = %e, "contact submission insert failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong. Please try again.".to_owned())
        }
    }
}
