use super::*;

#[test]
fn chat_reply_deserializes_message_field() {
    let reply: ChatReply = serde_json::from_str(r#"{"message":"Hi there"}"#).unwrap();
    assert_eq!(reply.message, "Hi there");
}

#[test]
fn contact_form_serializes_snake_case_fields() {
    let form = ContactForm {
        first_name: "Jane".into(),
        last_name: "Doe".into(),
        email: "jane@example.com".into(),
        project_details: "An assistant for our support desk".into(),
    };
    let value = serde_json::to_value(&form).unwrap();
    assert_eq!(value["first_name"], "Jane");
    assert_eq!(value["project_details"], "An assistant for our support desk");
}

#[test]
fn document_round_trips_with_null_source_path() {
    let json = r#"{"id":"d1","title":"notes.pdf","created_at":"2026-01-05T10:00:00Z","source_type":"application/pdf","source_path":null}"#;
    let doc: Document = serde_json::from_str(json).unwrap();
    assert_eq!(doc.title, "notes.pdf");
    assert!(doc.source_path.is_none());
    let back = serde_json::to_string(&doc).unwrap();
    let again: Document = serde_json::from_str(&back).unwrap();
    assert_eq!(again, doc);
}

#[test]
fn upload_outcome_reports_embedding_separately() {
    let json = r#"{
        "document": {"id":"d1","title":"t","created_at":"c","source_type":"text/plain","source_path":"https://cdn/x"},
        "embedding_ok": false,
        "embedding_message": "embedding service unreachable"
    }"#;
    let outcome: UploadOutcome = serde_json::from_str(json).unwrap();
    assert!(!outcome.embedding_ok);
    assert_eq!(outcome.document.id, "d1");
}

#[test]
fn prompt_template_deserializes_version_and_active() {
    let json = r#"{"id":"p1","name":"System","content":"You are helpful.","version":3,"is_active":true,"created_at":"c"}"#;
    let prompt: PromptTemplate = serde_json::from_str(json).unwrap();
    assert_eq!(prompt.version, 3);
    assert!(prompt.is_active);
}
