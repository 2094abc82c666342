use std::fmt::Debug;

use discern_core::{Discriminated, Discriminator};
use serde_json::{Map, Value};

/// Result type for conformance checks. Errors describe the violated
/// obligation in plain text.
pub type ConformanceResult = Result<(), String>;

/// A canonical document together with the value it must decode to.
#[derive(Debug, Clone)]
pub struct Canonical<V> {
    pub document: Value,
    pub expected: V,
}

/// The wrapper type a family decodes into.
pub type FamilyUnion<F> =
    Discriminated<<F as TestableFamily>::Value, <F as TestableFamily>::Discriminator>;

/// Trait that a discriminated family implements to run the conformance
/// suite.
pub trait TestableFamily {
    /// The produced-value type.
    type Value: PartialEq + Debug;

    /// The discriminator that routes documents of this family.
    type Discriminator: Discriminator<Self::Value>;

    /// Name of the tag field in the document body.
    fn tag_field(&self) -> &'static str;

    /// One canonical document per registered variant. Each document is a
    /// JSON object carrying the tag and every field of its variant.
    fn canonical(&self) -> Vec<Canonical<Self::Value>>;

    /// A tag value that no variant answers to.
    fn unknown_tag(&self) -> Value;

    /// The tag value an absent tag field decodes to.
    fn zero_tag(&self) -> Value;
}

/// Return `document` with the tag field set to `tag`.
pub fn with_tag(document: &Value, field: &str, tag: Value) -> Value {
    let mut object = as_object(document);
    object.insert(field.to_string(), tag);
    Value::Object(object)
}

/// Return `document` with the tag field removed.
pub fn without_tag(document: &Value, field: &str) -> Value {
    let mut object = as_object(document);
    object.remove(field);
    Value::Object(object)
}

/// Fields of `others` that `document` does not already carry, merged into
/// a copy of `document`. The tag field is never taken from `others`.
pub fn with_foreign_fields(document: &Value, others: &[&Value], field: &str) -> Value {
    let mut object = as_object(document);
    for other in others {
        for (key, value) in as_object(other) {
            if key != field && !object.contains_key(&key) {
                object.insert(key, value);
            }
        }
    }
    Value::Object(object)
}

fn as_object(document: &Value) -> Map<String, Value> {
    document.as_object().cloned().unwrap_or_default()
}
