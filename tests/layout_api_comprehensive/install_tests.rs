//! Install and install-merge semantics

use crate::test_utils::{coords, patch_from_json, temp_store};
use glassboard::PlacementPatch;

#[test]
fn install_is_idempotent() {
    let (_dir, store) = temp_store();

    let doc = store.install("testuser2", "clock").unwrap();
    let clocks = doc.components.iter().filter(|c| c.api == "clock").count();
    assert_eq!(clocks, 1);

    let doc = store.install("testuser2", "clock").unwrap();
    let clocks = doc.components.iter().filter(|c| c.api == "clock").count();
    assert_eq!(clocks, 1, "second install must not duplicate");
}

#[test]
fn install_on_existing_widget_merges_overrides() {
    let (_dir, store) = temp_store();
    store.get("alice").unwrap();

    let overrides = PlacementPatch::new().with_style(coords(&[("x", "1")]));
    let doc = store
        .install_with("alice", "clock", None, Some(&overrides))
        .unwrap();

    let clock = doc.component("clock").unwrap();
    // position and color preserved, style unioned
    assert_eq!(clock.position.get("top").unwrap(), "20px");
    assert_eq!(clock.color, "cyan");
    assert_eq!(clock.style.get("x").unwrap(), "1");
    assert_eq!(clock.style.get("fontSize").unwrap(), "4rem");
}

#[test]
fn install_merge_overwrites_colliding_style_keys() {
    let (_dir, store) = temp_store();
    store.get("alice").unwrap();

    let overrides = PlacementPatch::new().with_style(coords(&[("fontSize", "9rem")]));
    let doc = store
        .install_with("alice", "clock", None, Some(&overrides))
        .unwrap();

    let clock = doc.component("clock").unwrap();
    assert_eq!(clock.style.get("fontSize").unwrap(), "9rem");
    assert_eq!(clock.style.get("fontWeight").unwrap(), "bold");
}

#[test]
fn install_new_widget_appends_at_end() {
    let (_dir, store) = temp_store();
    store.get("alice").unwrap();

    let doc = store.install("alice", "sports").unwrap();
    assert_eq!(doc.components.last().unwrap().api, "sports");
    assert_eq!(doc.components.len(), 6);
}

#[test]
fn install_known_widget_uses_registry_default() {
    let (_dir, store) = temp_store();
    store.get("alice").unwrap();
    store.uninstall("alice", "calendar").unwrap();

    let doc = store.install("alice", "calendar").unwrap();
    let calendar = doc.component("calendar").unwrap();
    assert_eq!(calendar.position.get("bottom").unwrap(), "100px");
    assert_eq!(calendar.style.get("maxWidth").unwrap(), "400px");
    // Reinstalled widgets go to the end, not their original slot
    assert_eq!(doc.components.last().unwrap().api, "calendar");
}

#[test]
fn install_with_caller_defaults_seeds_new_placement() {
    let (_dir, store) = temp_store();

    let defaults = PlacementPatch::new()
        .with_position(coords(&[("top", "1px")]))
        .with_color("amber");
    let doc = store
        .install_with("alice", "custom", Some(&defaults), None)
        .unwrap();

    let custom = doc.component("custom").unwrap();
    assert!(custom.enabled);
    assert_eq!(custom.position.get("top").unwrap(), "1px");
    assert!(custom.style.is_empty());
    assert_eq!(custom.color, "amber");
}

#[test]
fn install_applies_overrides_on_top_of_defaults() {
    let (_dir, store) = temp_store();

    let defaults = PlacementPatch::new()
        .with_position(coords(&[("top", "1px"), ("left", "2px")]))
        .with_color("amber");
    let overrides = PlacementPatch::new()
        .with_position(coords(&[("top", "9px")]))
        .with_enabled(false);
    let doc = store
        .install_with("alice", "custom", Some(&defaults), Some(&overrides))
        .unwrap();

    let custom = doc.component("custom").unwrap();
    assert!(!custom.enabled);
    assert_eq!(custom.position.get("top").unwrap(), "9px");
    assert_eq!(custom.position.get("left").unwrap(), "2px");
    assert_eq!(custom.color, "amber");
}

#[test]
fn install_accepts_http_shaped_patch_bodies() {
    let (_dir, store) = temp_store();
    store.get("alice").unwrap();

    let overrides = patch_from_json(r#"{"style": {"x": "1"}, "color": "green"}"#);
    let doc = store
        .install_with("alice", "clock", None, Some(&overrides))
        .unwrap();

    let clock = doc.component("clock").unwrap();
    assert_eq!(clock.style.get("x").unwrap(), "1");
    assert_eq!(clock.color, "green");
    // `enabled` omitted from the body still merges as true
    assert!(clock.enabled);
}
