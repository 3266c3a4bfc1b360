//! Contact form handling: validation, persistence, and the best-effort
//! notification email.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use resend_rs::types::CreateEmailBaseOptions;
use resend_rs::Resend;
use serde::Deserialize;
use sqlx::PgPool;

pub const SUBMITTED_MESSAGE: &str = "Form submitted successfully!";

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("{0}")]
    Invalid(&'static str),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    pub project_details: String,
}

/// Trim all fields and check the required ones are present.
///
/// # Errors
///
/// Returns `Invalid` with a user-facing message when a required field is
/// empty or the email has no `@`.
pub fn validate(form: &ContactForm) -> Result<ContactForm, ContactError> {
    let first_name = form.first_name.trim();
    let last_name = form.last_name.trim();
    let email = normalize_email(&form.email);
    let project_details = form.project_details.trim();

    if first_name.is_empty() {
        return Err(ContactError::Invalid("First name is required."));
    }
    if email.is_empty() {
        return Err(ContactError::Invalid("Email is required."));
    }
    if !email.contains('@') {
        return Err(ContactError::Invalid("Email address is not valid."));
    }
    if project_details.is_empty() {
        return Err(ContactError::Invalid("Project details are required."));
    }

    Ok(ContactForm {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email,
        project_details: project_details.to_owned(),
    })
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Persist a validated submission.
pub async fn record_submission(pool: &PgPool, form: &ContactForm) -> Result<(), ContactError> {
    sqlx::query(
        "INSERT INTO contact_submissions (first_name, last_name, email, project_details)
         VALUES ($1, $2, $3, $4)",
    )
    .bind(&form.first_name)
    .bind(&form.last_name)
    .bind(&form.email)
    .bind(&form.project_details)
    .execute(pool)
    .await?;
    Ok(())
}

/// Resend-backed notification mailer. Absent configuration disables
/// notifications; submissions are still recorded.
pub struct Mailer {
    client: Resend,
    from: String,
    to: String,
}

impl Mailer {
    /// Build the mailer from `RESEND_API_KEY`, `CONTACT_NOTIFY_FROM`, and
    /// `CONTACT_NOTIFY_TO`. Returns `None` if any is unset.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("RESEND_API_KEY").ok()?;
        let from = std::env::var("CONTACT_NOTIFY_FROM").ok()?;
        let to = std::env::var("CONTACT_NOTIFY_TO").ok()?;
        Some(Self { client: Resend::new(&api_key), from, to })
    }

    /// Send the notification email. Failures are logged and swallowed so
    /// a mail outage never loses a submission.
    pub async fn notify(&self, form: &ContactForm) {
        let subject = format!("New inquiry from {} {}", form.first_name, form.last_name);
        let text = format!(
            "Name: {} {}\nEmail: {}\n\n{}",
            form.first_name, form.last_name, form.email, form.project_details
        );
        let email = CreateEmailBaseOptions::new(&self.from, [self.to.clone()], subject).with_text(&text);
        if let Err(e) = self.client.emails.send(email).await {
            tracing::warn!(error = %e, "contact notification email failed");
        }
    }
}
