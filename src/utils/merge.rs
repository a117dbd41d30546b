//! JSON object merging.

use serde_json::{Map, Value};

/// Merge two JSON objects into a new one.
///
/// The result holds every key from both inputs; where a key exists in both,
/// the overlay's value wins. Values are replaced wholesale, never deep
/// merged. Neither input is mutated.
pub fn merge_dictionaries(
    base: &Map<String, Value>,
    overlay: &Map<String, Value>,
) -> Map<String, Value> {
    let mut merged = base.clone();
    for (key, value) in overlay {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(raw: &str) -> Map<String, Value> {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn overlay_wins_on_conflicting_keys() {
        let base = object(r#"{"a": 1, "b": 2}"#);
        let overlay = object(r#"{"b": 3, "c": 4}"#);

        let merged = merge_dictionaries(&base, &overlay);

        assert_eq!(Value::Object(merged), json!({"a": 1, "b": 3, "c": 4}));
    }

    #[test]
    fn merges_with_empty_inputs() {
        let map = object(r#"{"a": 1}"#);
        let empty = Map::new();

        assert_eq!(merge_dictionaries(&empty, &map), map);
        assert_eq!(merge_dictionaries(&map, &empty), map);
        assert_eq!(merge_dictionaries(&empty, &empty), Map::new());
    }

    #[test]
    fn nested_values_are_replaced_wholesale() {
        let base = object(r#"{"a": {"x": 1}, "b": 2}"#);
        let overlay = object(r#"{"a": {"y": 2}, "c": 3}"#);

        let merged = merge_dictionaries(&base, &overlay);

        assert_eq!(
            Value::Object(merged),
            json!({"a": {"y": 2}, "b": 2, "c": 3})
        );
    }

    #[test]
    fn merge_is_not_commutative_on_overlap() {
        let base = object(r#"{"k": "base"}"#);
        let overlay = object(r#"{"k": "overlay"}"#);

        assert_ne!(
            merge_dictionaries(&base, &overlay),
            merge_dictionaries(&overlay, &base)
        );
    }

    #[test]
    fn inputs_are_left_untouched() {
        let base = object(r#"{"a": 1, "b": 2}"#);
        let overlay = object(r#"{"b": 3}"#);

        let _ = merge_dictionaries(&base, &overlay);

        assert_eq!(base, object(r#"{"a": 1, "b": 2}"#));
        assert_eq!(overlay, object(r#"{"b": 3}"#));
    }
}
