use crate::error::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value as JsonValue;
use std::fs;
use std::path::Path;

/// Load a Lottie animation document from a JSON file
///
/// Reads the whole file into memory and parses it into a generic JSON tree.
/// No Lottie schema is enforced; the edit passes do their own ad hoc key
/// lookups.
///
/// # Arguments
/// * `path` - Path of the animation JSON file
///
/// # Returns
/// * `Ok(JsonValue)` - The parsed document root
/// * `Err(LottieError)` - If the file cannot be read or is not valid JSON
///
/// # Examples
/// ```no_run
/// use lottie_retouch::document::load_document;
/// use std::path::Path;
///
/// let tree = load_document(Path::new("src/assets/animations/quick-links.json")).unwrap();
/// ```
pub fn load_document(path: &Path) -> Result<JsonValue> {
    let bytes = fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Render a document to JSON bytes
///
/// Pretty-prints with four-space indentation by default, matching the
/// formatting the animation assets were originally written with, so edited
/// files diff cleanly against their previous revision. With `compact` set,
/// renders single-line JSON instead.
pub fn render_document(tree: &JsonValue, compact: bool) -> Result<Vec<u8>> {
    if compact {
        return Ok(serde_json::to_vec(tree)?);
    }

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    tree.serialize(&mut ser)?;
    Ok(buf)
}

/// Render a document and overwrite the file at `path` with it
///
/// The file is rewritten in place, whether or not the preceding edit pass
/// changed anything. There is no backup and no temp-file/rename step.
pub fn save_document(path: &Path, tree: &JsonValue, compact: bool) -> Result<()> {
    let bytes = render_document(tree, compact)?;
    fs::write(path, bytes)?;
    Ok(())
}
