use super::*;

#[test]
fn new_strips_trailing_slash_from_base_url() {
    let backend = HttpChatBackend::new("http://assistant.internal/").unwrap();
    assert_eq!(backend.base_url(), "http://assistant.internal");
}

#[test]
fn new_keeps_clean_base_url() {
    let backend = HttpChatBackend::new("http://assistant.internal").unwrap();
    assert_eq!(backend.base_url(), "http://assistant.internal");
}

#[test]
fn error_messages_are_descriptive() {
    let err = ChatProxyError::Config("CHAT_UPSTREAM_URL");
    assert_eq!(err.to_string(), "missing configuration: CHAT_UPSTREAM_URL");

    let err = ChatProxyError::UpstreamStatus(500);
    assert_eq!(err.to_string(), "upstream returned status 500");
}

#[test]
fn upstream_reply_deserializes_message_field() {
    let reply: UpstreamReply = serde_json::from_str(r#"{"message":"Hello there"}"#).unwrap();
    assert_eq!(reply.message, "Hello there");
}

#[test]
fn upstream_reply_rejects_missing_message() {
    let result = serde_json::from_str::<UpstreamReply>(r#"{"reply":"Hello"}"#);
    assert!(result.is_err());
}
