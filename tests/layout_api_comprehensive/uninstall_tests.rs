//! Uninstall semantics

use crate::test_utils::temp_store;

#[test]
fn uninstall_removes_placement() {
    let (_dir, store) = temp_store();
    store.get("testuser4").unwrap();

    let doc = store.uninstall("testuser4", "clock").unwrap();
    assert_eq!(doc.components.len(), 4);
    assert!(doc.component("clock").is_none());
    assert!(doc.component("weather").is_some());
}

#[test]
fn uninstall_missing_widget_is_a_no_op() {
    let (_dir, store) = temp_store();
    let before = store.get("alice").unwrap();

    let after = store.uninstall("alice", "nope").unwrap();
    assert_eq!(after, before);
}

#[test]
fn uninstall_is_idempotent() {
    let (_dir, store) = temp_store();
    store.get("alice").unwrap();

    let first = store.uninstall("alice", "news").unwrap();
    let second = store.uninstall("alice", "news").unwrap();
    assert_eq!(first, second);
    assert_eq!(second.components.len(), 4);
}

#[test]
fn uninstall_preserves_remaining_order() {
    let (_dir, store) = temp_store();
    store.get("alice").unwrap();

    let doc = store.uninstall("alice", "news").unwrap();
    let order: Vec<&str> = doc.components.iter().map(|c| c.api.as_str()).collect();
    assert_eq!(order, ["clock", "weather", "suggestion", "calendar"]);
}

#[test]
fn uninstall_persists_removal() {
    let (_dir, store) = temp_store();
    store.get("alice").unwrap();
    store.uninstall("alice", "clock").unwrap();

    assert!(store.get("alice").unwrap().component("clock").is_none());
}
