//! Token resolvers for enumerated attributes
//!
//! Fixed string vocabularies mapped onto the rendering surface's domain
//! constants. Every resolver has a documented fallback; unknown tokens
//! never fail the caller.

use crate::types::*;
use crate::value::primitive_string;
use serde_json::Value;

fn gravity_flag(token: &str) -> Option<i32> {
    match token {
        "center" => Some(GRAVITY_CENTER),
        "center_horizontal" => Some(GRAVITY_CENTER_HORIZONTAL),
        "center_vertical" => Some(GRAVITY_CENTER_VERTICAL),
        "left" => Some(GRAVITY_LEFT),
        "right" => Some(GRAVITY_RIGHT),
        "top" => Some(GRAVITY_TOP),
        "bottom" => Some(GRAVITY_BOTTOM),
        "start" => Some(GRAVITY_START),
        "end" => Some(GRAVITY_END),
        _ => None,
    }
}

/// Combine a `|`-separated gravity expression into one flag word.
/// Unrecognized tokens are skipped.
pub fn parse_gravity(value: &str) -> i32 {
    let mut gravity = GRAVITY_NONE;
    for token in value.split('|') {
        if let Some(flag) = gravity_flag(token) {
            gravity |= flag;
        }
    }
    gravity
}

/// Gravity as a document primitive, for callers that write resolved
/// attributes back into a layout document.
pub fn gravity_value(value: &str) -> Value {
    Value::from(parse_gravity(value))
}

/// Where a container draws dividers between its children.
pub fn parse_divider_mode(attribute_value: &str) -> i32 {
    match attribute_value {
        "beginning" => SHOW_DIVIDER_BEGINNING,
        "middle" => SHOW_DIVIDER_MIDDLE,
        "end" => SHOW_DIVIDER_END,
        _ => SHOW_DIVIDER_NONE,
    }
}

/// Text truncation mode, defaulting to truncation at the end.
pub fn parse_ellipsize(attribute_value: &str) -> Truncate {
    Truncate::from_token(attribute_value).unwrap_or(Truncate::End)
}

/// Visibility of a "show when" attribute.
///
/// Empty, `"false"`, the null literal, and explicit document null all
/// collapse to `Gone`; any other unmatched value is shown.
pub fn parse_visibility(value: &Value) -> Visibility {
    resolve_visibility(value, Visibility::Gone, Visibility::Visible)
}

/// Companion of [`parse_visibility`] for "hide when" attributes: the same
/// token table with both fallbacks swapped.
pub fn parse_invisibility(value: &Value) -> Visibility {
    resolve_visibility(value, Visibility::Visible, Visibility::Gone)
}

fn resolve_visibility(value: &Value, absent: Visibility, fallback: Visibility) -> Visibility {
    if let Some(attribute_value) = primitive_string(value) {
        if let Some(visibility) = Visibility::from_token(&attribute_value) {
            return visibility;
        }
        if attribute_value.is_empty()
            || attribute_value == "false"
            || attribute_value == NULL_LITERAL
        {
            return absent;
        }
        fallback
    } else if value.is_null() {
        absent
    } else {
        fallback
    }
}

/// Text alignment for the surface level this build targets. Tokens the
/// surface does not support, and empty input, resolve to nothing.
pub fn parse_text_alignment(attribute_value: &str) -> Option<TextAlignment> {
    if attribute_value.is_empty() {
        return None;
    }
    TextAlignment::from_token(attribute_value, SURFACE_LEVEL)
}

/// Image scale type; empty and unknown input resolve to nothing.
pub fn parse_scale_type(attribute_value: &str) -> Option<ScaleType> {
    if attribute_value.is_empty() {
        return None;
    }
    ScaleType::from_token(attribute_value)
}

/// Typeface style, case-insensitive. Absent and unrecognized values are
/// normal weight.
pub fn parse_text_style(attribute_value: Option<&str>) -> TextStyle {
    match attribute_value {
        Some(value) => {
            TextStyle::from_token(&value.to_lowercase()).unwrap_or(TextStyle::Normal)
        }
        None => TextStyle::Normal,
    }
}
