//! Conversation store and message-dispatch core for the chat widget.
//!
//! DESIGN
//! ======
//! The store is append-only: messages are never reordered, removed, or
//! mutated after creation, so display order always equals insertion order.
//! `begin_send`/`complete_send` carry the full dispatch contract and run
//! without any browser or network dependency, which keeps the ordering and
//! mutual-exclusion rules unit-testable.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single exchanged message. Never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Fixed greeting present before any network activity occurs.
pub const GREETING: &str = "Hello! I'm the Meridian Labs assistant. Ask me about our \
**AI automation services**, our delivery process, or how to start a project.";

/// Fixed assistant reply appended when a send fails for any reason.
pub const FALLBACK_REPLY: &str = "I apologize, but I'm having trouble connecting to the \
server right now. Please try again later.";

/// Append-only conversation store plus the in-flight send flag.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub busy: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage { role: ChatRole::Assistant, content: GREETING.to_owned() }],
            busy: false,
        }
    }
}

impl ChatState {
    /// Start a send: trim the input, reject empty text and concurrent
    /// sends, otherwise append the user message synchronously and mark the
    /// dispatcher busy.
    ///
    /// Returns the text to put on the wire, or `None` when the send was
    /// dropped. A send attempted while one is in flight is dropped, not
    /// queued.
    pub fn begin_send(&mut self, input: &str) -> Option<String> {
        let text = input.trim();
        if text.is_empty() || self.busy {
            return None;
        }
        self.messages.push(ChatMessage { role: ChatRole::User, content: text.to_owned() });
        self.busy = true;
        Some(text.to_owned())
    }

    /// Finish a send: append the assistant reply, or the fixed fallback
    /// text when the request failed. Transport errors, non-2xx responses,
    /// and malformed payloads all collapse to the same fallback; the error
    /// is logged and never surfaced to the caller.
    pub fn complete_send(&mut self, reply: Result<String, String>) {
        let content = match reply {
            Ok(message) => message,
            Err(e) => {
                leptos::logging::warn!("chat send failed: {e}");
                FALLBACK_REPLY.to_owned()
            }
        };
        self.messages.push(ChatMessage { role: ChatRole::Assistant, content });
        self.busy = false;
    }
}
