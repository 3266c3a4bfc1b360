use super::*;

#[test]
fn new_strips_trailing_slash() {
    let api = HttpEmbeddingApi::new("http://embedder.internal/").unwrap();
    assert_eq!(api.base_url(), "http://embedder.internal");
}

#[test]
fn embed_response_deserializes_success_shape() {
    let parsed: EmbedResponse =
        serde_json::from_str(r#"{"state":true,"message":"indexed 12 chunks"}"#).unwrap();
    assert!(parsed.state);
    assert_eq!(parsed.message, "indexed 12 chunks");
}

#[test]
fn embed_response_deserializes_failure_shape() {
    let parsed: EmbedResponse =
        serde_json::from_str(r#"{"state":false,"message":"unsupported file type"}"#).unwrap();
    assert!(!parsed.state);
    assert_eq!(parsed.message, "unsupported file type");
}

#[test]
fn error_messages_are_descriptive() {
    let err = EmbeddingError::Rejected("unsupported file type".to_owned());
    assert_eq!(err.to_string(), "embedding rejected: unsupported file type");

    let err = EmbeddingError::UpstreamStatus(502);
    assert_eq!(err.to_string(), "embedding endpoint returned status 502");
}
