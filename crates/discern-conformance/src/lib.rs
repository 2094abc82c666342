//! discern conformance test suite (D1-D7).
//!
//! Provides a `TestableFamily` trait and `discriminator_conformance_tests!`
//! macro for checking any `Discriminator` implementation against the
//! behaviour every discriminated family must show: round trips, ignored
//! sibling fields, unknown and missing tags, nesting, re-decoding and object shape.

pub mod fixtures;
pub mod suite;
pub mod tests;
pub mod traits;

pub use traits::*;
