//! The `discriminator_conformance_tests!` macro.
//!
//! This macro generates seven `#[test]` functions, one per obligation D1
//! through D7, for any type that implements `TestableFamily`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use discern_conformance::discriminator_conformance_tests;
//!
//! struct Payments;
//!
//! // Implement TestableFamily for Payments ...
//!
//! discriminator_conformance_tests!(Payments);
//! ```
//!
//! Each generated test function is named `conformance_dNN_<description>`
//! and can be run with `cargo test conformance_`.

/// Generate conformance tests for a discriminated family.
///
/// The `$family_expr` expression is evaluated fresh for each test. Invoke
/// the macro once per module; the generated names are fixed.
#[macro_export]
macro_rules! discriminator_conformance_tests {
    ($family_expr:expr) => {
        #[test]
        fn conformance_d01_round_trip() {
            let family = $family_expr;
            $crate::tests::d01_round_trip::test_d01_round_trip(&family)
                .expect("D1: round trip conformance failed");
        }

        #[test]
        fn conformance_d02_sibling_fields() {
            let family = $family_expr;
            $crate::tests::d02_sibling_fields::test_d02_sibling_fields(&family)
                .expect("D2: sibling field isolation conformance failed");
        }

        #[test]
        fn conformance_d03_unknown_tag() {
            let family = $family_expr;
            $crate::tests::d03_unknown_tag::test_d03_unknown_tag(&family)
                .expect("D3: unknown tag conformance failed");
        }

        #[test]
        fn conformance_d04_missing_tag() {
            let family = $family_expr;
            $crate::tests::d04_missing_tag::test_d04_missing_tag(&family)
                .expect("D4: missing tag conformance failed");
        }

        #[test]
        fn conformance_d05_nested() {
            let family = $family_expr;
            $crate::tests::d05_nested::test_d05_nested(&family)
                .expect("D5: nesting conformance failed");
        }

        #[test]
        fn conformance_d06_redecode() {
            let family = $family_expr;
            $crate::tests::d06_redecode::test_d06_redecode(&family)
                .expect("D6: re-decode conformance failed");
        }

        #[test]
        fn conformance_d07_object_shape() {
            let family = $family_expr;
            $crate::tests::d07_object_shape::test_d07_object_shape(&family)
                .expect("D7: object shape conformance failed");
        }
    };
}
