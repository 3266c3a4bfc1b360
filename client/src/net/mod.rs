//! Networking modules for the REST boundary with the server.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and `types` defines the shared wire schema.

pub mod api;
pub mod types;
