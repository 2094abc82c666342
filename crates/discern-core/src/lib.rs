//! discern-core: two-pass decoding of discriminated unions over serde.
//!
//! A document that carries a tag field (`{"kind": "a", ...}`) is decoded
//! into the right concrete type without a hand-written decoder per tag:
//!
//! 1. the document is decoded into a small discriminator type that holds
//!    only the tag (and any other routing fields),
//! 2. the discriminator's [`Discriminator::resolve`] picks a [`Variant`],
//! 3. the same document is decoded a second time as that variant.
//!
//! # Public API
//!
//! - [`Discriminator`] -- per-family contract mapping a tag to a variant
//! - [`Variant`] -- descriptor of one concrete variant type
//! - [`Discriminated`] -- the wrapper; implements `Deserialize` and has
//!   typed entry points (`from_slice`, `from_value`, `decode`, `FromStr`)
//! - [`DecodeError`], [`ResolveError`], [`Phase`] -- error types
//!
//! Both passes rely on serde ignoring fields a type does not declare.
//! Variant types marked `deny_unknown_fields` must declare the tag field.

pub mod discriminator;
pub mod error;
pub mod wrapper;

pub use discriminator::{Discriminator, Variant};
pub use error::{DecodeError, Phase, ResolveError};
pub use wrapper::Discriminated;
