//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Marketing pages are static content; the admin pages own route-scoped
//! data fetching and delegate wire details to `net::api`.

pub mod about;
pub mod admin_documents;
pub mod admin_prompts;
pub mod contact;
pub mod home;
pub mod services;
