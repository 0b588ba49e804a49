//! First-access default creation

use crate::test_utils::temp_store;
use glassboard::{defaults, DEFAULT_TEMPLATE_NAME};

#[test]
fn fresh_user_gets_default_morning_layout() {
    let (_dir, store) = temp_store();

    let doc = store.get("testuser1").unwrap();

    assert_eq!(doc.template_name, DEFAULT_TEMPLATE_NAME);
    assert_eq!(doc.template_name, "Default Morning");

    let order: Vec<&str> = doc.components.iter().map(|c| c.api.as_str()).collect();
    assert_eq!(order, ["clock", "weather", "news", "suggestion", "calendar"]);
}

#[test]
fn default_layout_reproduces_registry_values() {
    let (_dir, store) = temp_store();
    let doc = store.get("testuser1").unwrap();

    let clock = doc.component("clock").unwrap();
    assert!(clock.enabled);
    assert_eq!(clock.position.get("top").unwrap(), "20px");
    assert_eq!(clock.position.get("right").unwrap(), "20px");
    assert_eq!(clock.style.get("fontSize").unwrap(), "4rem");
    assert_eq!(clock.style.get("fontWeight").unwrap(), "bold");
    assert_eq!(clock.color, "cyan");

    let suggestion = doc.component("suggestion").unwrap();
    assert_eq!(suggestion.position.get("left").unwrap(), "50%");
    assert_eq!(
        suggestion.position.get("transform").unwrap(),
        "translateX(-50%)"
    );
    assert_eq!(suggestion.color, "green");

    let weather = doc.component("weather").unwrap();
    assert!(weather.style.is_empty());
}

#[test]
fn get_is_stable_across_calls() {
    let (_dir, store) = temp_store();

    let first = store.get("testuser1").unwrap();
    let second = store.get("testuser1").unwrap();
    assert_eq!(first, second);
}

#[test]
fn each_user_gets_an_own_document() {
    let (_dir, store) = temp_store();

    store.uninstall("userA", "clock").unwrap();

    let doc_a = store.get("userA").unwrap();
    let doc_b = store.get("userB").unwrap();

    assert!(doc_a.component("clock").is_none());
    assert!(doc_b.component("clock").is_some());
}

#[test]
fn store_matches_registry_module() {
    let (_dir, store) = temp_store();
    let doc = store.get("testuser1").unwrap();
    assert_eq!(doc, defaults::default_layout());
}
