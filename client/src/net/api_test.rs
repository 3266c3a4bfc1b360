use super::*;

#[test]
fn prompt_endpoint_formats_expected_path() {
    assert_eq!(prompt_endpoint("p1"), "/api/prompts/p1");
}

#[test]
fn prompt_active_endpoint_formats_expected_path() {
    assert_eq!(prompt_active_endpoint("p1"), "/api/prompts/p1/active");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("chat request", 500), "chat request failed: 500");
    assert_eq!(request_failed_message("upload", 413), "upload failed: 413");
}
