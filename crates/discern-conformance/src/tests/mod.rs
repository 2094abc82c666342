//! One module per conformance obligation. Each exposes a single check
//! function generic over the family under test.

pub mod d02_sibling_fields;
pub mod d05_nested;
pub mod d07_object_shape;
