//! State-list and layer-list entry extraction
//!
//! Multi-part drawable descriptors arrive as document objects. A
//! state-list entry selects a drawable by boolean widget states; a
//! layer-list entry stacks a drawable under an optional view id. Both
//! extractors yield nothing for objects that do not describe an entry,
//! which is distinct from an entry with no states or no id.

use crate::resource::{view_id_from_reference, ResourceNamespace};
use crate::types::*;
use crate::value::{parse_boolean, primitive_string};
use serde_json::{Map, Value};

const DRAWABLE_KEY: &str = "drawable";
const ID_KEY: &str = "id";

fn state_flag(name: &str) -> Option<i32> {
    match name {
        "state_pressed" => Some(STATE_PRESSED),
        "state_enabled" => Some(STATE_ENABLED),
        "state_focused" => Some(STATE_FOCUSED),
        "state_hovered" => Some(STATE_HOVERED),
        "state_selected" => Some(STATE_SELECTED),
        "state_checkable" => Some(STATE_CHECKABLE),
        "state_checked" => Some(STATE_CHECKED),
        "state_activated" => Some(STATE_ACTIVATED),
        "state_window_focused" => Some(STATE_WINDOW_FOCUSED),
        _ => None,
    }
}

/// Extract one state-list entry: the signed state flags it selects on,
/// paired with its drawable value.
///
/// A state key paired with a true value contributes its flag, with a
/// false value the negated flag, in document order; keys outside the
/// state vocabulary contribute nothing. Objects without a `drawable`
/// object yield no entry at all.
pub fn parse_state(value: &Map<String, Value>) -> Option<(Vec<i32>, &Value)> {
    let drawable = value.get(DRAWABLE_KEY)?;
    if !drawable.is_object() {
        return None;
    }

    let mut states = Vec::new();
    for (key, entry) in value {
        if let Some(flag) = state_flag(key) {
            // e.g. state_pressed = true, state_pressed = false
            states.push(if parse_boolean(entry) { flag } else { -flag });
        }
    }
    Some((states, drawable))
}

/// Extract one layer-list entry: the layer's view id (or [`NO_ID`] when
/// the entry names none) paired with the whole entry object.
///
/// Entries without a present, non-null `drawable` yield nothing.
pub fn parse_layer<'a>(
    value: &'a Map<String, Value>,
    namespace: &dyn ResourceNamespace,
) -> Option<(i32, &'a Map<String, Value>)> {
    let id = match value.get(ID_KEY).and_then(primitive_string) {
        Some(reference) => view_id_from_reference(&reference, namespace),
        None => NO_ID,
    };

    match value.get(DRAWABLE_KEY) {
        Some(drawable) if !drawable.is_null() => Some((id, value)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::TableRegistry;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_parse_state_signs_flags() {
        let entry = object(json!({
            "drawable": { "type": "color", "color": "#FF0000" },
            "state_pressed": true,
            "state_enabled": false
        }));

        let (states, drawable) = parse_state(&entry).unwrap();
        assert_eq!(states, vec![STATE_PRESSED, -STATE_ENABLED]);
        assert_eq!(drawable, entry.get("drawable").unwrap());
    }

    #[test]
    fn test_parse_state_keeps_document_order() {
        let entry = object(json!({
            "state_checked": true,
            "drawable": { "type": "shape" },
            "state_focused": false,
            "state_window_focused": true
        }));

        let (states, _) = parse_state(&entry).unwrap();
        assert_eq!(states, vec![STATE_CHECKED, -STATE_FOCUSED, STATE_WINDOW_FOCUSED]);
    }

    #[test]
    fn test_parse_state_ignores_unknown_keys() {
        let entry = object(json!({
            "drawable": { "type": "shape" },
            "state_pressed": true,
            "elevation": 4
        }));

        let (states, _) = parse_state(&entry).unwrap();
        assert_eq!(states, vec![STATE_PRESSED]);
    }

    #[test]
    fn test_parse_state_without_drawable_yields_nothing() {
        assert!(parse_state(&object(json!({ "state_pressed": true }))).is_none());
        // A primitive drawable field is not a state-list entry either.
        assert!(parse_state(&object(json!({ "drawable": "@drawable/bg" }))).is_none());
    }

    #[test]
    fn test_parse_state_with_no_states_is_empty_not_absent() {
        let entry = object(json!({ "drawable": { "type": "shape" } }));
        let (states, _) = parse_state(&entry).unwrap();
        assert!(states.is_empty());
    }

    #[test]
    fn test_parse_layer() {
        let mut namespace = TableRegistry::new();
        namespace.register_view_id("progress", 42);

        let entry = object(json!({
            "id": "@id/progress",
            "drawable": { "type": "shape" }
        }));
        let (id, layer) = parse_layer(&entry, &namespace).unwrap();
        assert_eq!(id, 42);
        assert_eq!(layer, &entry);
    }

    #[test]
    fn test_parse_layer_without_id_uses_sentinel() {
        let namespace = TableRegistry::new();
        let entry = object(json!({ "drawable": { "type": "shape" } }));
        let (id, _) = parse_layer(&entry, &namespace).unwrap();
        assert_eq!(id, NO_ID);
    }

    #[test]
    fn test_parse_layer_requires_drawable() {
        let namespace = TableRegistry::new();
        assert!(parse_layer(&object(json!({ "id": "@id/x" })), &namespace).is_none());
        assert!(parse_layer(&object(json!({ "id": "@id/x", "drawable": null })), &namespace).is_none());
    }
}
