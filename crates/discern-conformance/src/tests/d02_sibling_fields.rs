//! D2: Sibling-field isolation obligation.
//!
//! Fields that belong to other variants of the family MUST NOT leak into
//! the decoded value. A document carrying tag T plus sibling fields decodes
//! exactly like the document carrying only T's own fields.

use crate::traits::{with_foreign_fields, ConformanceResult, FamilyUnion, TestableFamily};

/// D2: Sibling-variant fields are ignored.
pub fn test_d02_sibling_fields<F: TestableFamily>(family: &F) -> ConformanceResult {
    let canonical = family.canonical();
    let field = family.tag_field();

    for (i, case) in canonical.iter().enumerate() {
        let others: Vec<_> = canonical
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, other)| &other.document)
            .collect();
        let noisy = with_foreign_fields(&case.document, &others, field);

        let decoded = FamilyUnion::<F>::from_value(&noisy)
            .map_err(|e| format!("D2: {} failed to decode: {}", noisy, e))?;
        if decoded.value != case.expected {
            return Err(format!(
                "D2: sibling fields leaked into {:?} (document {}), expected {:?}",
                decoded.value, noisy, case.expected
            ));
        }
    }
    Ok(())
}
