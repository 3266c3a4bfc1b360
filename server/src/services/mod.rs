//! Service layer: external collaborators and persistence operations.
//!
//! ARCHITECTURE
//! ============
//! Routes stay thin; each service owns one concern. External HTTP
//! collaborators (`chat`, `storage`, `embedding`) sit behind traits so
//! tests can substitute mocks, matching how handlers receive them from
//! `AppState`.

pub mod chat;
pub mod contact;
pub mod document;
pub mod embedding;
pub mod prompt;
pub mod storage;
