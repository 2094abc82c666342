//! D7: Object-shape obligation.
//!
//! Only JSON objects are tagged documents. Arrays and scalars MUST fail
//! while decoding the discriminator, even when their elements line up
//! positionally with the discriminator's or a variant's fields.

use discern_core::Phase;
use serde_json::{json, Value};

use crate::traits::{ConformanceResult, FamilyUnion, TestableFamily};

/// D7: Non-object documents are malformed.
pub fn test_d07_object_shape<F: TestableFamily>(family: &F) -> ConformanceResult {
    let field = family.tag_field();
    let mut documents = vec![json!([]), json!(null), family.unknown_tag()];

    for case in family.canonical() {
        let Some(object) = case.document.as_object() else {
            return Err(format!("D7: canonical document {} is not an object", case.document));
        };
        if let Some(tag) = object.get(field) {
            documents.push(tag.clone());
            documents.push(Value::Array(vec![tag.clone()]));
        }
        // Tag first, then the variant fields in document order.
        let mut positional: Vec<Value> = object.get(field).cloned().into_iter().collect();
        positional.extend(
            object
                .iter()
                .filter(|(key, _)| key.as_str() != field)
                .map(|(_, value)| value.clone()),
        );
        documents.push(Value::Array(positional));
    }

    for document in &documents {
        let bytes = serde_json::to_vec(document)
            .map_err(|e| format!("D7: could not encode {}: {}", document, e))?;
        for (entry, result) in [
            ("bytes", FamilyUnion::<F>::from_slice(&bytes)),
            ("tree", FamilyUnion::<F>::from_value(document)),
        ] {
            match result {
                Err(e) if e.phase() == Phase::Discriminator => {}
                Err(e) => {
                    return Err(format!(
                        "D7: {} ({}) failed in phase {:?}, expected Discriminator: {}",
                        document,
                        entry,
                        e.phase(),
                        e
                    ))
                }
                Ok(u) => {
                    return Err(format!(
                        "D7: non-object {} ({}) accepted as {:?}",
                        document, entry, u.value
                    ))
                }
            }
        }
    }
    Ok(())
}
