use super::*;

fn contents(state: &ChatState) -> Vec<(ChatRole, &str)> {
    state.messages.iter().map(|m| (m.role, m.content.as_str())).collect()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_starts_with_greeting_only() {
    let state = ChatState::default();
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].role, ChatRole::Assistant);
    assert_eq!(state.messages[0].content, GREETING);
    assert!(!state.busy);
}

// =============================================================
// begin_send
// =============================================================

#[test]
fn begin_send_appends_user_message_and_sets_busy() {
    let mut state = ChatState::default();
    let sent = state.begin_send("Hello");
    assert_eq!(sent.as_deref(), Some("Hello"));
    assert!(state.busy);
    assert_eq!(contents(&state), vec![(ChatRole::Assistant, GREETING), (ChatRole::User, "Hello")]);
}

#[test]
fn begin_send_trims_input() {
    let mut state = ChatState::default();
    let sent = state.begin_send("  spaced out \n");
    assert_eq!(sent.as_deref(), Some("spaced out"));
    assert_eq!(state.messages.last().unwrap().content, "spaced out");
}

#[test]
fn begin_send_rejects_empty_input_without_mutation() {
    let mut state = ChatState::default();
    assert_eq!(state.begin_send(""), None);
    assert_eq!(state.begin_send("   \t\n"), None);
    assert_eq!(state.messages.len(), 1);
    assert!(!state.busy);
}

#[test]
fn begin_send_while_busy_is_dropped_not_queued() {
    let mut state = ChatState::default();
    assert!(state.begin_send("first").is_some());
    assert_eq!(state.begin_send("second"), None);
    // Store unchanged until the prior call resolves.
    assert_eq!(state.messages.len(), 2);

    state.complete_send(Ok("reply".to_owned()));
    assert!(state.begin_send("second").is_some());
    assert_eq!(state.messages.len(), 4);
}

// =============================================================
// complete_send
// =============================================================

#[test]
fn complete_send_success_appends_assistant_reply() {
    let mut state = ChatState::default();
    state.begin_send("Hello");
    state.complete_send(Ok("Hi there".to_owned()));
    assert!(!state.busy);
    assert_eq!(
        contents(&state),
        vec![(ChatRole::Assistant, GREETING), (ChatRole::User, "Hello"), (ChatRole::Assistant, "Hi there")]
    );
}

#[test]
fn complete_send_failure_appends_fallback_reply() {
    let mut state = ChatState::default();
    state.begin_send("Hello");
    state.complete_send(Err("http 500".to_owned()));
    assert!(!state.busy);
    assert_eq!(
        contents(&state),
        vec![(ChatRole::Assistant, GREETING), (ChatRole::User, "Hello"), (ChatRole::Assistant, FALLBACK_REPLY)]
    );
}

#[test]
fn interleaved_sends_preserve_issue_order() {
    let mut state = ChatState::default();
    state.begin_send("one");
    state.complete_send(Ok("reply one".to_owned()));
    state.begin_send("two");
    state.complete_send(Err("timeout".to_owned()));
    state.begin_send("three");
    state.complete_send(Ok("reply three".to_owned()));

    assert_eq!(
        contents(&state),
        vec![
            (ChatRole::Assistant, GREETING),
            (ChatRole::User, "one"),
            (ChatRole::Assistant, "reply one"),
            (ChatRole::User, "two"),
            (ChatRole::Assistant, FALLBACK_REPLY),
            (ChatRole::User, "three"),
            (ChatRole::Assistant, "reply three"),
        ]
    );
}
