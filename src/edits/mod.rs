/// Edit passes applied to Lottie animation documents
///
/// This module contains the hand-tailored edit passes the retouch binaries
/// apply to their animation assets:
///
/// - `shape_removal`: drop a named item from the first layer's first shape group
/// - `group_opacity`: zero the transform opacity of named groups anywhere in the tree
pub mod group_opacity;
pub mod shape_removal;

// Re-export commonly used functions
pub use group_opacity::hide_named_groups;
pub use shape_removal::remove_shape_item;
