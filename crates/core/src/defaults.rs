//! Widget default registry
//!
//! Static catalog mapping a widget identifier to its default placement.
//! Populated once at first use, never mutated afterwards. Every lookup
//! returns an independent copy, so callers may freely mutate the result as
//! the starting point for a new placement without aliasing the canonical
//! defaults.

use crate::layout::{CoordMap, LayoutDocument, WidgetPlacement, DEFAULT_TEMPLATE_NAME};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Widgets installed into a freshly created layout, in creation order.
pub const DEFAULT_WIDGET_ORDER: [&str; 5] = ["clock", "weather", "news", "suggestion", "calendar"];

static REGISTRY: Lazy<HashMap<&'static str, WidgetPlacement>> = Lazy::new(build_registry);

fn build_registry() -> HashMap<&'static str, WidgetPlacement> {
    let mut defaults = HashMap::new();

    defaults.insert(
        "clock",
        entry(
            "clock",
            &[("top", "20px"), ("right", "20px")],
            &[("fontSize", "4rem"), ("fontWeight", "bold")],
            "cyan",
        ),
    );

    defaults.insert(
        "weather",
        entry("weather", &[("top", "20px"), ("left", "20px")], &[], "cyan"),
    );

    defaults.insert(
        "news",
        entry(
            "news",
            &[("bottom", "100px"), ("left", "20px")],
            &[("fontSize", "1rem"), ("maxWidth", "400px")],
            "cyan",
        ),
    );

    defaults.insert(
        "suggestion",
        entry(
            "suggestion",
            &[
                ("bottom", "bottom"),
                ("left", "50%"),
                ("transform", "translateX(-50%)"),
            ],
            &[("fontSize", "2rem"), ("fontStyle", "italic")],
            "green",
        ),
    );

    defaults.insert(
        "calendar",
        entry(
            "calendar",
            &[("bottom", "100px"), ("right", "20px")],
            &[("fontSize", "1.5rem"), ("maxWidth", "400px")],
            "cyan",
        ),
    );

    defaults
}

fn entry(
    api: &str,
    position: &[(&str, &str)],
    style: &[(&str, &str)],
    color: &str,
) -> WidgetPlacement {
    let mut placement = WidgetPlacement::new(api);
    placement.position = coords(position);
    placement.style = coords(style);
    placement.color = color.to_string();
    placement
}

fn coords(entries: &[(&str, &str)]) -> CoordMap {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Look up the default placement for a widget.
///
/// Returns an independent copy on every call; mutating the result never
/// affects the registry.
pub fn default_placement(api: &str) -> Option<WidgetPlacement> {
    REGISTRY.get(api).cloned()
}

/// Whether a default placement is registered for the widget.
pub fn has_default(api: &str) -> bool {
    REGISTRY.contains_key(api)
}

/// Build the layout given to a user on first access: the default template
/// name plus every widget in [`DEFAULT_WIDGET_ORDER`].
pub fn default_layout() -> LayoutDocument {
    let mut layout = LayoutDocument::new(DEFAULT_TEMPLATE_NAME);
    for api in DEFAULT_WIDGET_ORDER {
        if let Some(placement) = default_placement(api) {
            layout.components.push(placement);
        }
    }
    layout
}

// ============================================================================
// Tests
// ============================================================================
