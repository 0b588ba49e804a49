//! Layout document model
//!
//! A layout document is the full dashboard configuration for one user:
//! a template name plus an ordered sequence of widget placements.
//!
//! - `LayoutDocument`: root document, one per user
//! - `WidgetPlacement`: one installed widget's visual state
//! - `PlacementPatch`: partial update merged field-by-field onto a placement
//!
//! Component order is insertion order and survives load/save. Uniqueness of
//! `api` within a document is an invariant enforced by the store's
//! operations, not by these types.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Template name given to newly created layouts.
pub const DEFAULT_TEMPLATE_NAME: &str = "Default Morning";

/// Accent color given to placements that specify none.
pub const DEFAULT_COLOR: &str = "cyan";

/// Free-form layout coordinates, e.g. CSS-like key/value pairs.
///
/// Values are always strings, even when they look numeric ("400", "1.5");
/// the codec is responsible for preserving that distinction on disk.
pub type CoordMap = BTreeMap<String, String>;

/// One installed widget's visual state within a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetPlacement {
    /// Stable widget identifier, unique within a document.
    ///
    /// Treated as immutable identity once set: a merge never changes it.
    pub api: String,
    /// Whether the widget is currently shown.
    pub enabled: bool,
    /// Layout coordinates (e.g. `top` / `left` / `transform`).
    pub position: CoordMap,
    /// Presentation overrides (e.g. `fontSize` / `maxWidth`).
    pub style: CoordMap,
    /// Accent color name.
    pub color: String,
}

impl WidgetPlacement {
    /// Create an empty placement: enabled, no coordinates, default color.
    pub fn new(api: impl Into<String>) -> Self {
        WidgetPlacement {
            api: api.into(),
            enabled: true,
            position: CoordMap::new(),
            style: CoordMap::new(),
            color: DEFAULT_COLOR.to_string(),
        }
    }

    /// Create a placement seeded from a `defaults` patch.
    ///
    /// Position, style and color are taken from the patch where present,
    /// otherwise empty/empty/[`DEFAULT_COLOR`]. `enabled` starts `true`;
    /// seeding never touches it (only a subsequent merge does).
    pub fn seeded(api: impl Into<String>, defaults: &PlacementPatch) -> Self {
        let mut placement = WidgetPlacement::new(api);
        if let Some(position) = &defaults.position {
            placement.position = position.clone();
        }
        if let Some(style) = &defaults.style {
            placement.style = style.clone();
        }
        if let Some(color) = &defaults.color {
            placement.color = color.clone();
        }
        placement
    }

    /// Merge a patch into this placement.
    ///
    /// Field rules:
    /// - `enabled` is always overwritten with the patch's value; a patch
    ///   cannot mean "leave `enabled` unchanged"
    /// - `position` / `style`: a present patch map is unioned key-wise into
    ///   the existing map (colliding keys overwritten, new keys added); an
    ///   absent map leaves the target untouched
    /// - `color` is overwritten only when present and non-empty
    /// - `api` is identity and never changes
    pub fn merge(&mut self, patch: &PlacementPatch) {
        self.enabled = patch.enabled;

        if let Some(position) = &patch.position {
            self.position
                .extend(position.iter().map(|(k, v)| (k.clone(), v.clone())));
        }

        if let Some(style) = &patch.style {
            self.style
                .extend(style.iter().map(|(k, v)| (k.clone(), v.clone())));
        }

        if let Some(color) = &patch.color {
            if !color.trim().is_empty() {
                self.color = color.clone();
            }
        }
    }
}

/// Partial update applied onto a [`WidgetPlacement`].
///
/// This is the shape request bodies deserialize into. Absent maps and an
/// absent color mean "leave unchanged"; `enabled` has no absent state and
/// defaults to `true` when omitted (see [`WidgetPlacement::merge`]).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlacementPatch {
    /// Enabled flag, applied unconditionally on merge.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Coordinate entries to union into the placement's position map.
    #[serde(default)]
    pub position: Option<CoordMap>,
    /// Style entries to union into the placement's style map.
    #[serde(default)]
    pub style: Option<CoordMap>,
    /// Replacement color; ignored when empty.
    #[serde(default)]
    pub color: Option<String>,
}

fn default_enabled() -> bool {
    true
}

impl Default for PlacementPatch {
    fn default() -> Self {
        PlacementPatch {
            enabled: true,
            position: None,
            style: None,
            color: None,
        }
    }
}

impl PlacementPatch {
    /// An empty patch (enabled, nothing else set).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the enabled flag carried by this patch.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the position entries carried by this patch.
    pub fn with_position(mut self, position: CoordMap) -> Self {
        self.position = Some(position);
        self
    }

    /// Set the style entries carried by this patch.
    pub fn with_style(mut self, style: CoordMap) -> Self {
        self.style = Some(style);
        self
    }

    /// Set the replacement color carried by this patch.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Full per-user dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutDocument {
    /// Name of the template this layout is based on. Non-empty on the write
    /// path; newly created layouts use [`DEFAULT_TEMPLATE_NAME`].
    pub template_name: String,
    /// Widget placements in insertion order.
    pub components: Vec<WidgetPlacement>,
}

impl LayoutDocument {
    /// Create an empty layout with the given template name.
    pub fn new(template_name: impl Into<String>) -> Self {
        LayoutDocument {
            template_name: template_name.into(),
            components: Vec::new(),
        }
    }

    /// Look up a placement by widget identifier.
    pub fn component(&self, api: &str) -> Option<&WidgetPlacement> {
        self.components.iter().find(|c| c.api == api)
    }

    /// Look up a placement by widget identifier, mutably.
    pub fn component_mut(&mut self, api: &str) -> Option<&mut WidgetPlacement> {
        self.components.iter_mut().find(|c| c.api == api)
    }

    /// Remove the placement with the given identifier.
    ///
    /// Returns `true` if a placement was removed, `false` if none matched.
    pub fn remove_component(&mut self, api: &str) -> bool {
        let before = self.components.len();
        self.components.retain(|c| c.api != api);
        self.components.len() != before
    }
}

// ============================================================================
// Tests
// ============================================================================
