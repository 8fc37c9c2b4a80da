use crate::error::Result;
use serde_json::{Map, Value as JsonValue};

/// Zero the transform opacity of every named group in the JSON tree
///
/// Recursively traverses the whole document. Whenever an object's `nm`
/// matches one of `names`, the object's `it` list is scanned for transform
/// items (`ty == "tr"`) and each one's opacity (`o.k`) is set to `0`.
/// A transform without an `o` object is skipped; a keyframed `k` value is
/// overwritten with the plain number. Traversal continues into matched
/// groups, so nested matches are handled too.
///
/// # Arguments
/// * `tree` - The animation document root
/// * `names` - Group names to hide
///
/// # Returns
/// * `Ok(hidden)` - Names of the groups whose transform opacity was zeroed,
///   in visit order, one entry per zeroed transform
///
/// # Examples
/// ```
/// use lottie_retouch::edits::hide_named_groups;
/// use serde_json::json;
///
/// let mut tree = json!({
///     "nm": "Group 23",
///     "it": [
///         {"ty": "sh", "nm": "Path 1"},
///         {"ty": "tr", "o": {"a": 0, "k": 100}}
///     ]
/// });
/// let hidden = hide_named_groups(&mut tree, &["Group 23".to_string()]).unwrap();
/// assert_eq!(hidden, vec!["Group 23"]);
/// assert_eq!(tree["it"][1]["o"]["k"], 0);
/// ```
pub fn hide_named_groups(tree: &mut JsonValue, names: &[String]) -> Result<Vec<String>> {
    let mut hidden = Vec::new();
    visit(tree, names, &mut hidden);
    Ok(hidden)
}

/// Recursively visit a JSON value, hiding matching groups along the way
fn visit(value: &mut JsonValue, names: &[String], hidden: &mut Vec<String>) {
    match value {
        JsonValue::Object(map) => {
            let matched = map
                .get("nm")
                .and_then(|v| v.as_str())
                .filter(|nm| names.iter().any(|n| n.as_str() == *nm))
                .map(String::from);

            if let Some(name) = matched {
                zero_group_transforms(map, &name, hidden);
            }

            // Recurse into all values, matched groups included
            let keys: Vec<String> = map.keys().cloned().collect();
            for key in keys {
                if let Some(val) = map.get_mut(&key) {
                    visit(val, names, hidden);
                }
            }
        }
        JsonValue::Array(arr) => {
            for val in arr.iter_mut() {
                visit(val, names, hidden);
            }
        }
        _ => {
            // Primitives - nothing to do
        }
    }
}

/// Zero the opacity of every transform item in a group's item list
fn zero_group_transforms(map: &mut Map<String, JsonValue>, name: &str, hidden: &mut Vec<String>) {
    let Some(items) = map.get_mut("it").and_then(|v| v.as_array_mut()) else {
        return;
    };

    for item in items.iter_mut() {
        if is_transform(item) && zero_opacity(item) {
            hidden.push(name.to_string());
        }
    }
}

/// Check if a group item is the transform item
fn is_transform(item: &JsonValue) -> bool {
    item.get("ty").and_then(|v| v.as_str()) == Some("tr")
}

/// Set a transform item's opacity to 0, returning whether it was set
fn zero_opacity(item: &mut JsonValue) -> bool {
    let Some(opacity) = item.get_mut("o").and_then(|o| o.as_object_mut()) else {
        return false;
    };

    opacity.insert("k".to_string(), JsonValue::from(0));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn letter_group(name: &str) -> JsonValue {
        json!({
            "ty": "gr",
            "nm": name,
            "it": [
                {"ty": "sh", "nm": "Path 1"},
                {"ty": "fl", "nm": "Fill 1"},
                {"ty": "tr", "nm": "Transform", "o": {"a": 0, "k": 100}}
            ]
        })
    }

    fn targets(range: std::ops::RangeInclusive<u32>) -> Vec<String> {
        range.map(|i| format!("Group {}", i)).collect()
    }

    #[test]
    fn test_zeroes_matched_group_opacity() {
        let mut tree = json!({
            "layers": [{
                "shapes": [letter_group("Group 23")]
            }]
        });

        let hidden = hide_named_groups(&mut tree, &targets(23..=30)).unwrap();

        assert_eq!(hidden, vec!["Group 23"]);
        assert_eq!(tree["layers"][0]["shapes"][0]["it"][2]["o"]["k"], 0);
    }

    #[test]
    fn test_hides_every_target_group() {
        let groups: Vec<JsonValue> = (23..=30)
            .map(|i| letter_group(&format!("Group {}", i)))
            .collect();
        let mut tree = json!({
            "layers": [{"shapes": groups}]
        });

        let hidden = hide_named_groups(&mut tree, &targets(23..=30)).unwrap();

        assert_eq!(hidden.len(), 8);
        for shape in tree["layers"][0]["shapes"].as_array().unwrap() {
            assert_eq!(shape["it"][2]["o"]["k"], 0);
        }
    }

    #[test]
    fn test_unrelated_groups_are_untouched() {
        let mut tree = json!({
            "layers": [{
                "shapes": [
                    letter_group("Group 22"),
                    letter_group("Group 23"),
                    letter_group("Group 31")
                ]
            }]
        });

        let hidden = hide_named_groups(&mut tree, &targets(23..=30)).unwrap();

        assert_eq!(hidden, vec!["Group 23"]);
        let shapes = tree["layers"][0]["shapes"].as_array().unwrap();
        assert_eq!(shapes[0]["it"][2]["o"]["k"], 100);
        assert_eq!(shapes[1]["it"][2]["o"]["k"], 0);
        assert_eq!(shapes[2]["it"][2]["o"]["k"], 100);
    }

    #[test]
    fn test_nested_matching_groups_are_both_hidden() {
        let mut tree = json!({
            "ty": "gr",
            "nm": "Group 23",
            "it": [
                letter_group("Group 24"),
                {"ty": "tr", "o": {"a": 0, "k": 100}}
            ]
        });

        let hidden = hide_named_groups(&mut tree, &targets(23..=30)).unwrap();

        assert_eq!(hidden, vec!["Group 23", "Group 24"]);
        assert_eq!(tree["it"][1]["o"]["k"], 0);
        assert_eq!(tree["it"][0]["it"][2]["o"]["k"], 0);
    }

    #[test]
    fn test_matches_anywhere_in_the_tree() {
        let mut tree = json!({
            "assets": [{
                "layers": [{
                    "shapes": [{
                        "ty": "gr",
                        "nm": "Outer",
                        "it": [letter_group("Group 30")]
                    }]
                }]
            }]
        });

        let hidden = hide_named_groups(&mut tree, &targets(23..=30)).unwrap();

        assert_eq!(hidden, vec!["Group 30"]);
        assert_eq!(
            tree["assets"][0]["layers"][0]["shapes"][0]["it"][0]["it"][2]["o"]["k"],
            0
        );
    }

    #[test]
    fn test_group_without_item_list_reports_nothing() {
        let mut tree = json!({
            "nm": "Group 23",
            "ty": "gr"
        });
        let original = tree.clone();

        let hidden = hide_named_groups(&mut tree, &targets(23..=30)).unwrap();

        assert!(hidden.is_empty());
        assert_eq!(tree, original);
    }

    #[test]
    fn test_transform_without_opacity_object_is_skipped() {
        let mut tree = json!({
            "nm": "Group 23",
            "it": [
                {"ty": "tr", "nm": "Transform"}
            ]
        });

        let hidden = hide_named_groups(&mut tree, &targets(23..=30)).unwrap();

        assert!(hidden.is_empty());
        assert!(tree["it"][0].get("o").is_none());
    }

    #[test]
    fn test_keyframed_opacity_is_overwritten() {
        let mut tree = json!({
            "nm": "Group 23",
            "it": [{
                "ty": "tr",
                "o": {
                    "a": 1,
                    "k": [
                        {"t": 0, "s": [0]},
                        {"t": 30, "s": [100]}
                    ]
                }
            }]
        });

        let hidden = hide_named_groups(&mut tree, &targets(23..=30)).unwrap();

        assert_eq!(hidden, vec!["Group 23"]);
        assert_eq!(tree["it"][0]["o"]["k"], 0);
        // The animated flag itself is left alone
        assert_eq!(tree["it"][0]["o"]["a"], 1);
    }

    #[test]
    fn test_opacity_value_created_when_missing() {
        let mut tree = json!({
            "nm": "Group 23",
            "it": [
                {"ty": "tr", "o": {"a": 0}}
            ]
        });

        let hidden = hide_named_groups(&mut tree, &targets(23..=30)).unwrap();

        assert_eq!(hidden, vec!["Group 23"]);
        assert_eq!(tree["it"][0]["o"]["k"], 0);
    }

    #[test]
    fn test_non_transform_items_are_untouched() {
        let mut tree = json!({
            "nm": "Group 23",
            "it": [
                {"ty": "sh", "nm": "Path 1", "o": {"a": 0, "k": 100}},
                {"ty": "tr", "o": {"a": 0, "k": 100}}
            ]
        });

        hide_named_groups(&mut tree, &targets(23..=30)).unwrap();

        assert_eq!(tree["it"][0]["o"]["k"], 100);
        assert_eq!(tree["it"][1]["o"]["k"], 0);
    }

    #[test]
    fn test_no_matches_returns_empty() {
        let mut tree = json!({
            "layers": [{"shapes": [letter_group("Letters")]}]
        });
        let original = tree.clone();

        let hidden = hide_named_groups(&mut tree, &targets(23..=30)).unwrap();

        assert!(hidden.is_empty());
        assert_eq!(tree, original);
    }
}
