//! The discriminator contract and the variant descriptors it resolves to.

use std::any::Any;
use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ResolveError;

/// A partial view of a document that knows which variant the whole
/// document is.
///
/// The implementing type declares only the fields needed to route (usually
/// a single tag). It is decoded from the document first; `resolve` then
/// picks the concrete type the same document is decoded into on the second
/// pass. `resolve` sees only the already-decoded fields.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct KindTag {
///     #[serde(default)]
///     kind: String,
/// }
///
/// impl Discriminator<Shape> for KindTag {
///     fn resolve(&self) -> Result<Variant<Shape>, ResolveError> {
///         match self.kind.as_str() {
///             "circle" => Ok(Variant::of::<Circle>()),
///             "square" => Ok(Variant::of::<Square>()),
///             other => Err(ResolveError::unknown(other, &["circle", "square"])),
///         }
///     }
/// }
/// ```
pub trait Discriminator<V>: DeserializeOwned {
    fn resolve(&self) -> Result<Variant<V>, ResolveError>;
}

/// Describes one concrete variant type `T` and how it upcasts into the
/// produced-value type `V`.
pub struct Variant<V> {
    name: &'static str,
    decode: fn(&Value) -> serde_json::Result<V>,
}

impl<V> Variant<V> {
    /// The variant decoded as `T` and converted with `Into<V>`.
    pub fn of<T>() -> Self
    where
        T: DeserializeOwned + Into<V>,
    {
        Variant {
            name: std::any::type_name::<T>(),
            decode: value_into::<T, V>,
        }
    }

    /// Override the name reported in decode errors (defaults to the Rust
    /// type name of the concrete variant).
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn decode(&self, document: &Value) -> serde_json::Result<V> {
        (self.decode)(document)
    }
}

impl Variant<Box<dyn Any>> {
    /// A variant for a fully open produced value: `T` boxed as `dyn Any`.
    /// Callers recover the concrete type with `downcast_ref`.
    pub fn any<T>() -> Self
    where
        T: DeserializeOwned + Any,
    {
        Variant {
            name: std::any::type_name::<T>(),
            decode: value_any::<T>,
        }
    }
}

impl<V> Clone for Variant<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Variant<V> {}

impl<V> fmt::Debug for Variant<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Variant").field(&self.name).finish()
    }
}

fn value_into<T, V>(value: &Value) -> serde_json::Result<V>
where
    T: DeserializeOwned + Into<V>,
{
    T::deserialize(value).map(Into::into)
}

fn value_any<T>(value: &Value) -> serde_json::Result<Box<dyn Any>>
where
    T: DeserializeOwned + Any,
{
    T::deserialize(value).map(|v| Box::new(v) as Box<dyn Any>)
}
