//! # lottie-retouch
//!
//! One-off fixups for Lottie animation JSON assets.
//!
//! The crate backs two small command-line utilities: `fix-lottie-icon`,
//! which drops the circle background shape from the quick-links animation,
//! and `hide-lottie-text`, which zeroes the opacity of the PHARMACY letter
//! groups in the hero animation. Each utility loads one JSON document,
//! applies one edit pass, and writes the document back in place.
//!
//! ## Example
//!
//! ```
//! use lottie_retouch::edits::remove_shape_item;
//! use serde_json::json;
//!
//! let mut tree = json!({
//!     "layers": [{
//!         "shapes": [{
//!             "it": [
//!                 {"ty": "sh", "nm": "Path 2"},
//!                 {"ty": "sh", "nm": "Path 3"}
//!             ]
//!         }]
//!     }]
//! });
//!
//! let removed = remove_shape_item(&mut tree, "Path 2").unwrap();
//! assert_eq!(removed, 1);
//! ```

pub mod document;
pub mod edits;
pub mod error;

// Re-export commonly used items
pub use document::{load_document, save_document};
pub use error::{LottieError, Result};
