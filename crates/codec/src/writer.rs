//! Layout document producer
//!
//! Emits the canonical hybrid layout described in the crate docs: the root
//! object and each component are written multi-line with 2-space indent
//! steps, while `position` and `style` collapse onto a single line each.
//!
//! Map values that parse as a JSON number are emitted as unquoted numeric
//! literals; everything else is quoted. The probe is the JSON number
//! grammar itself, so the writer's output is always a strict-JSON subset.

use glassboard_core::layout::{CoordMap, LayoutDocument, WidgetPlacement};

/// Encode a layout document into its canonical text form.
pub fn encode(doc: &LayoutDocument) -> String {
    let mut out = String::with_capacity(256);

    out.push_str("{\n");
    out.push_str("  \"templateName\": \"");
    push_escaped(&mut out, &doc.template_name);
    out.push_str("\",\n");
    out.push_str("  \"components\": [\n");

    for (i, component) in doc.components.iter().enumerate() {
        write_component(&mut out, component);
        if i + 1 < doc.components.len() {
            out.push(',');
        }
        out.push('\n');
    }

    out.push_str("  ]\n");
    out.push_str("}\n");

    out
}

fn write_component(out: &mut String, component: &WidgetPlacement) {
    out.push_str("    {\n");

    out.push_str("      \"api\": \"");
    push_escaped(out, &component.api);
    out.push_str("\",\n");

    out.push_str("      \"enabled\": ");
    out.push_str(if component.enabled { "true" } else { "false" });
    out.push_str(",\n");

    out.push_str("      \"position\": ");
    write_compact_map(out, &component.position);
    out.push_str(",\n");

    out.push_str("      \"style\": ");
    write_compact_map(out, &component.style);
    out.push_str(",\n");

    out.push_str("      \"color\": \"");
    push_escaped(out, &component.color);
    out.push_str("\"\n");

    out.push_str("    }");
}

/// Write a coordinate map on a single line: `{}` or `{ "k": v, "k2": v2 }`.
fn write_compact_map(out: &mut String, map: &CoordMap) {
    if map.is_empty() {
        out.push_str("{}");
        return;
    }

    out.push_str("{ ");
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push('"');
        push_escaped(out, key);
        out.push_str("\": ");
        if is_number_literal(value) {
            out.push_str(value);
        } else {
            out.push('"');
            push_escaped(out, value);
            out.push('"');
        }
    }
    out.push_str(" }");
}

/// Whether a value string is a valid JSON number literal and may be emitted
/// unquoted.
///
/// Follows the JSON grammar exactly: optional minus, integer part without
/// leading zeros, optional fraction, optional exponent. Anything looser
/// (leading `+`, bare `.5`, `NaN`, whitespace) stays quoted.
pub(crate) fn is_number_literal(value: &str) -> bool {
    let bytes = value.as_bytes();
    let mut i = 0;

    if bytes.first() == Some(&b'-') {
        i += 1;
    }

    // Integer part: "0" or a non-zero digit followed by digits
    match bytes.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => {
            while matches!(bytes.get(i), Some(b'0'..=b'9')) {
                i += 1;
            }
        }
        _ => return false,
    }

    // Fraction
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        if !matches!(bytes.get(i), Some(b'0'..=b'9')) {
            return false;
        }
        while matches!(bytes.get(i), Some(b'0'..=b'9')) {
            i += 1;
        }
    }

    // Exponent
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        if !matches!(bytes.get(i), Some(b'0'..=b'9')) {
            return false;
        }
        while matches!(bytes.get(i), Some(b'0'..=b'9')) {
            i += 1;
        }
    }

    i == bytes.len()
}

/// Escape a string for embedding in the document.
///
/// Exactly backslash, quote, newline, carriage return and tab are escaped;
/// nothing else.
fn push_escaped(out: &mut String, s: &str) {
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
