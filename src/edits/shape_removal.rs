use crate::error::{LottieError, Result};
use serde_json::Value as JsonValue;

/// Remove a named item from the first layer's first shape group
///
/// Descends the fixed path `layers[0] -> shapes[0] -> it` and drops every
/// item whose `nm` field equals `name`, keeping all other items in their
/// original order. Identically named items elsewhere in the document are
/// left alone.
///
/// The fixed path must exist: a missing or empty `layers` or `shapes` array
/// is an error, so a caller can abort before rewriting the file. A shape
/// group without an `it` list is not an error; the pass is a no-op then.
///
/// # Arguments
/// * `tree` - The animation document root
/// * `name` - The `nm` value of the item(s) to drop
///
/// # Returns
/// * `Ok(count)` - Number of items removed (0 when nothing matched)
/// * `Err(LottieError)` - If the fixed path into the document is missing
///
/// # Examples
/// ```
/// use lottie_retouch::edits::remove_shape_item;
/// use serde_json::json;
///
/// let mut tree = json!({
///     "layers": [{
///         "shapes": [{
///             "it": [
///                 {"ty": "sh", "nm": "Path 2"},
///                 {"ty": "sh", "nm": "Path 3"}
///             ]
///         }]
///     }]
/// });
/// let removed = remove_shape_item(&mut tree, "Path 2").unwrap();
/// assert_eq!(removed, 1);
/// ```
pub fn remove_shape_item(tree: &mut JsonValue, name: &str) -> Result<usize> {
    let shape_group = locate_shape_group(tree)?;

    // Groups without an item list have nothing to drop
    let Some(items) = shape_group.get_mut("it") else {
        return Ok(0);
    };
    let items = items
        .as_array_mut()
        .ok_or(LottieError::UnexpectedValue {
            path: "layers[0].shapes[0].it",
            expected: "an array",
        })?;

    let initial_count = items.len();

    // Items without an "nm" field are kept
    items.retain(|item| item.get("nm").and_then(|v| v.as_str()) != Some(name));

    Ok(initial_count - items.len())
}

/// Navigate to the first shape group of the first layer
fn locate_shape_group(tree: &mut JsonValue) -> Result<&mut JsonValue> {
    let layers = tree
        .get_mut("layers")
        .and_then(|v| v.as_array_mut())
        .ok_or(LottieError::UnexpectedValue {
            path: "layers",
            expected: "an array",
        })?;

    if layers.is_empty() {
        return Err(LottieError::NotEnoughLayers {
            expected: 1,
            actual: 0,
        });
    }

    let shapes = layers[0]
        .get_mut("shapes")
        .and_then(|v| v.as_array_mut())
        .ok_or(LottieError::UnexpectedValue {
            path: "layers[0].shapes",
            expected: "an array",
        })?;

    if shapes.is_empty() {
        return Err(LottieError::NotEnoughShapes {
            layer: 0,
            expected: 1,
            actual: 0,
        });
    }

    Ok(&mut shapes[0])
}
