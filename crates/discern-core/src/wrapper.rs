//! The discriminated-union wrapper and the two-pass decode.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::discriminator::{Discriminator, Variant};
use crate::error::DecodeError;

/// A value of type `V` whose concrete shape was picked by the
/// discriminator `D`.
///
/// Decoding reads the document once as `D`, asks it which variant the
/// document is, then reads the same document again as that variant.
/// The wrapper implements [`Deserialize`], so it can sit anywhere inside a
/// larger serde document.
pub struct Discriminated<V, D> {
    pub value: V,
    discriminator: PhantomData<fn() -> D>,
}

fn decode_two_pass<V, D>(document: &Value) -> Result<V, DecodeError>
where
    D: Discriminator<V>,
{
    // serde-derived structs also accept sequences positionally, so the
    // shape has to be checked before the discriminator sees it.
    if !document.is_object() {
        return Err(DecodeError::MalformedDocument(not_an_object(document)));
    }

    let discriminator = D::deserialize(document).map_err(DecodeError::MalformedDocument)?;

    let variant = discriminator.resolve()?;

    variant
        .decode(document)
        .map_err(|source| DecodeError::VariantDecodeFailure {
            variant: variant.name(),
            source,
        })
}

fn parse(bytes: &[u8]) -> Result<Value, DecodeError> {
    serde_json::from_slice(bytes).map_err(DecodeError::MalformedDocument)
}

fn not_an_object(document: &Value) -> serde_json::Error {
    let unexpected = match document {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Unexpected::Unsigned(u)
            } else if let Some(i) = n.as_i64() {
                Unexpected::Signed(i)
            } else {
                Unexpected::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    };
    <serde_json::Error as de::Error>::invalid_type(unexpected, &"a JSON object")
}

impl<V, D> Discriminated<V, D> {
    pub fn new(value: V) -> Self {
        Discriminated {
            value,
            discriminator: PhantomData,
        }
    }

    pub fn into_inner(self) -> V {
        self.value
    }
}

impl<V, D> Discriminated<V, D>
where
    D: Discriminator<V>,
{
    /// Decode a JSON document held as raw bytes.
    ///
    /// The bytes are parsed once into a JSON tree and both passes read that
    /// tree, so duplicate keys resolve the same way as in the `Deserialize`
    /// path (the last one wins).
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        parse(bytes).and_then(|document| Self::from_value(&document))
    }

    /// Decode a document that has already been parsed into a JSON tree.
    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        decode_two_pass::<V, D>(value).map(Self::new)
    }

    /// Decode `bytes` into this wrapper, replacing the current value.
    ///
    /// On error the current value is left as it was.
    pub fn decode(&mut self, bytes: &[u8]) -> Result<(), DecodeError> {
        let document = parse(bytes)?;
        self.value = decode_two_pass::<V, D>(&document)?;
        Ok(())
    }
}

impl<V, D> FromStr for Discriminated<V, D>
where
    D: Discriminator<V>,
{
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s.as_bytes())
    }
}

impl<'de, V, D> Deserialize<'de> for Discriminated<V, D>
where
    D: Discriminator<V>,
{
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        // A deserializer can only be driven once, so buffer the document
        // and run both passes over the tree.
        let document = Value::deserialize(deserializer)?;
        Self::from_value(&document).map_err(DecodeError::into_de_error)
    }
}

impl<V: Serialize, D> Serialize for Discriminated<V, D> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<V: Default, D> Default for Discriminated<V, D> {
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<V: Clone, D> Clone for Discriminated<V, D> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<V: PartialEq, D> PartialEq for Discriminated<V, D> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<V: fmt::Debug, D> fmt::Debug for Discriminated<V, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Discriminated")
            .field("value", &self.value)
            .finish()
    }
}

impl<V, D> From<V> for Discriminated<V, D> {
    fn from(value: V) -> Self {
        Self::new(value)
    }
}

impl<V, D> Deref for Discriminated<V, D> {
    type Target = V;

    fn deref(&self) -> &V {
        &self.value
    }
}

impl<V, D> DerefMut for Discriminated<V, D> {
    fn deref_mut(&mut self) -> &mut V {
        &mut self.value
    }
}
