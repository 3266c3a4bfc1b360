use super::*;

use time::macros::datetime;

fn row() -> PromptRow {
    PromptRow {
        id: Uuid::new_v4(),
        name: "Greeting".to_owned(),
        content: "You are the site assistant.".to_owned(),
        version: 3,
        is_active: true,
        created_at: datetime!(2026-01-02 12:00:00 UTC),
    }
}

#[test]
fn response_carries_version_and_active_flag() {
    let response = to_response(row());
    assert_eq!(response.version, 3);
    assert!(response.is_active);
    assert_eq!(response.created_at, "2026-01-02T12:00:00Z");
}

#[test]
fn blank_fields_are_rejected() {
    let body = PromptBody { name: "  ".to_owned(), content: "x".to_owned() };
    assert_eq!(validated_fields(&body).err(), Some(StatusCode::BAD_REQUEST));

    let body = PromptBody { name: "x".to_owned(), content: "".to_owned() };
    assert_eq!(validated_fields(&body).err(), Some(StatusCode::BAD_REQUEST));
}

#[test]
fn fields_are_trimmed() {
    let body = PromptBody { name: " Greeting ".to_owned(), content: " text ".to_owned() };
    let (name, content) = validated_fields(&body).unwrap();
    assert_eq!(name, "Greeting");
    assert_eq!(content, "text");
}

#[test]
fn not_found_maps_to_404() {
    assert_eq!(prompt_error_to_status(PromptError::NotFound), StatusCode::NOT_FOUND);
}

#[test]
fn database_errors_map_to_500() {
    let err = PromptError::Database(sqlx::Error::RowNotFound);
    assert_eq!(prompt_error_to_status(err), StatusCode::INTERNAL_SERVER_ERROR);
}
