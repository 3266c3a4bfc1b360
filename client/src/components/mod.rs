//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and the chat widget while reading shared
//! context (conversation id) provided by the root app.

pub mod chat_widget;
pub mod footer;
pub mod navbar;
