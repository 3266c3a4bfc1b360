#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn ephemeral_ids_are_valid_uuids() {
    let id = load_or_create();
    assert!(uuid::Uuid::parse_str(id.as_str()).is_ok());
}

#[test]
fn ephemeral_ids_are_distinct_without_storage() {
    // Without a persisted-storage context every call yields a fresh id.
    let a = load_or_create();
    let b = load_or_create();
    assert_ne!(a, b);
}
