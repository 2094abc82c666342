//! D5: Nesting obligation.
//!
//! The wrapper MUST decode transparently as an element of a larger serde
//! document, and an unknown tag anywhere inside MUST fail the whole decode.

use serde::Deserialize;
use serde_json::json;

use crate::traits::{with_tag, ConformanceResult, FamilyUnion, TestableFamily};

#[derive(Deserialize)]
#[serde(bound(deserialize = "F: TestableFamily"))]
struct Envelope<F: TestableFamily> {
    items: Vec<FamilyUnion<F>>,
    last: Option<FamilyUnion<F>>,
}

/// D5: Wrappers nest inside structs, sequences and options.
pub fn test_d05_nested<F: TestableFamily>(family: &F) -> ConformanceResult {
    let canonical = family.canonical();
    let documents: Vec<_> = canonical.iter().map(|c| c.document.clone()).collect();
    let last = documents.last().cloned();

    let envelope: Envelope<F> =
        serde_json::from_value(json!({ "items": documents, "last": last }))
            .map_err(|e| format!("D5: envelope failed to decode: {}", e))?;

    if envelope.items.len() != canonical.len() {
        return Err(format!(
            "D5: decoded {} items, expected {}",
            envelope.items.len(),
            canonical.len()
        ));
    }
    for (item, case) in envelope.items.iter().zip(&canonical) {
        if item.value != case.expected {
            return Err(format!(
                "D5: nested item decoded to {:?}, expected {:?}",
                item.value, case.expected
            ));
        }
    }
    match (envelope.last, canonical.last()) {
        (Some(got), Some(want)) if got.value == want.expected => {}
        (None, None) => {}
        (got, _) => return Err(format!("D5: trailing item decoded to {:?}", got)),
    }

    if let Some(first) = canonical.first() {
        let poisoned = with_tag(&first.document, family.tag_field(), family.unknown_tag());
        let result: Result<Envelope<F>, _> =
            serde_json::from_value(json!({ "items": [first.document, poisoned], "last": null }));
        if result.is_ok() {
            return Err("D5: unknown tag inside a sequence was accepted".to_string());
        }
    }
    Ok(())
}
