//! Layout document parser
//!
//! Strict-JSON reader for layout documents. The writer's output is a subset
//! of JSON, so any conformant rendering of a document decodes — compact,
//! re-pretty-printed, or hand-edited. Unknown fields are ignored.
//!
//! Coordinate map values may arrive as strings or numeric literals; numbers
//! are restored to strings with their exact source spelling (`400` becomes
//! `"400"`, `4.50` stays `"4.50"`), so a numeric-looking value survives a
//! round trip unchanged.

use crate::error::FormatError;
use glassboard_core::layout::{
    CoordMap, LayoutDocument, WidgetPlacement, DEFAULT_COLOR, DEFAULT_TEMPLATE_NAME,
};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// Decode a layout document from its on-disk text form.
///
/// # Errors
///
/// Returns [`FormatError`] when the text is not a valid document: not JSON,
/// a component without `api`, or a coordinate value that is neither string
/// nor number.
pub fn decode(text: &str) -> Result<LayoutDocument, FormatError> {
    let raw: RawDocument = serde_json::from_str(text)?;
    Ok(raw.into_document())
}

#[derive(Deserialize)]
struct RawDocument {
    #[serde(rename = "templateName", default = "default_template_name")]
    template_name: String,
    #[serde(default)]
    components: Vec<RawPlacement>,
}

#[derive(Deserialize)]
struct RawPlacement {
    api: String,
    #[serde(default = "default_true")]
    enabled: bool,
    #[serde(default, deserialize_with = "scalar_map")]
    position: CoordMap,
    #[serde(default, deserialize_with = "scalar_map")]
    style: CoordMap,
    #[serde(default = "default_color")]
    color: String,
}

fn default_template_name() -> String {
    DEFAULT_TEMPLATE_NAME.to_string()
}

fn default_true() -> bool {
    true
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl RawDocument {
    fn into_document(self) -> LayoutDocument {
        LayoutDocument {
            template_name: self.template_name,
            components: self
                .components
                .into_iter()
                .map(RawPlacement::into_placement)
                .collect(),
        }
    }
}

impl RawPlacement {
    fn into_placement(self) -> WidgetPlacement {
        WidgetPlacement {
            api: self.api,
            enabled: self.enabled,
            position: self.position,
            style: self.style,
            color: self.color,
        }
    }
}

/// Deserialize a coordinate map, accepting string or number values.
fn scalar_map<'de, D>(deserializer: D) -> Result<CoordMap, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
    let mut map = CoordMap::new();
    for (key, value) in raw {
        let value = match value {
            serde_json::Value::String(s) => s,
            serde_json::Value::Number(n) => n.to_string(),
            other => {
                return Err(D::Error::custom(format!(
                    "expected string or number for key {:?}, got {}",
                    key,
                    type_name(&other)
                )))
            }
        };
        map.insert(key, value);
    }
    Ok(map)
}

fn type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

// ============================================================================
// Tests
// ============================================================================
