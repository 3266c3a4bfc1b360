//! Per-browser conversation identifier.
//!
//! Reads the identifier from `localStorage`, generating and persisting a
//! fresh UUID when absent. The value is read once at app initialization
//! and provided to the widget via context, so the rest of the tree never
//! touches storage. Immutable once generated; clearing storage is the only
//! way to get a new one.

#[cfg(test)]
#[path = "conversation_id_test.rs"]
mod conversation_id_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "meridian_chat_conversation_id";

/// Opaque per-browser token correlating chat turns server-side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversationId(pub String);

impl ConversationId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Load the persisted conversation id, generating and storing one if
/// absent. SSR renders never dispatch messages, so the server path returns
/// an ephemeral id without touching storage.
#[must_use]
pub fn load_or_create() -> ConversationId {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if let Ok(Some(existing)) = storage.get_item(STORAGE_KEY) {
                if !existing.is_empty() {
                    return ConversationId(existing);
                }
            }
            let fresh = uuid::Uuid::new_v4().to_string();
            let _ = storage.set_item(STORAGE_KEY, &fresh);
            return ConversationId(fresh);
        }
    }
    ConversationId(uuid::Uuid::new_v4().to_string())
}
