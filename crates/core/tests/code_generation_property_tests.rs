//! Property-based integration tests for asset code generation.

use inventaris_core::codes::{trailing_sequence, AssetCode, CodeGenerator, CodeRequest};
use proptest::prelude::*;
use regex::Regex;

// =============================================================================
// Generators
// =============================================================================

fn arb_source() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Pembelian".to_string()),
        Just("Bantuan".to_string()),
        Just("STTST".to_string()),
        Just("Hibah".to_string()),
        "[A-Za-z ]{0,12}",
    ]
}

fn arb_request() -> impl Strategy<Value = CodeRequest> {
    ("[0-9]{1,4}", "[0-9]{1,3}", arb_source(), 1990i32..2100)
        .prop_map(|(location, category, source, year)| {
            CodeRequest::new(location, category, source, year)
        })
}

/// Existing codes: well-formed parents, bulk units and assorted junk.
fn arb_existing_code() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => (1u32..20, 1u32..10, 1u8..=4, 0u8..100, 1u32..3000).prop_map(
            |(loc, cat, src, yr, seq)| format!("{:03}.{:02}.{}.{:02}.{:03}", loc, cat, src, yr, seq)
        ),
        2 => (1u32..3000, 1u32..200).prop_map(|(seq, unit)| format!("001.10.1.24.{:03}-{:03}", seq, unit)),
        1 => "[a-z.\\-]{0,16}",
    ]
}

fn code_pattern() -> Regex {
    Regex::new(r"^\d{3,}\.\d{2,}\.[1-9]\.\d{2}\.\d{3,}$").unwrap()
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every generated code has the five-segment shape and parses back.
    #[test]
    fn prop_generated_code_is_well_formed(
        request in arb_request(),
        existing in proptest::collection::vec(arb_existing_code(), 0..30),
    ) {
        let code = CodeGenerator::default().generate(&request, &existing);
        let rendered = code.to_string();
        prop_assert!(code_pattern().is_match(&rendered), "bad code {}", rendered);
        prop_assert_eq!(AssetCode::parse(&rendered).unwrap(), code.clone());
        prop_assert_eq!(code.year, (request.procurement_year % 100) as u8);
    }

    /// The new sequence is one more than the largest sequence in use.
    #[test]
    fn prop_sequence_is_max_plus_one(
        request in arb_request(),
        existing in proptest::collection::vec(arb_existing_code(), 0..30),
    ) {
        let expected = existing
            .iter()
            .filter_map(|code| trailing_sequence(code))
            .max()
            .unwrap_or(0)
            + 1;
        let code = CodeGenerator::default().generate(&request, &existing);
        prop_assert_eq!(code.sequence, expected);
    }

    /// A generated code never collides with an existing parent code.
    #[test]
    fn prop_generated_code_is_unused(
        request in arb_request(),
        existing in proptest::collection::vec(arb_existing_code(), 0..30),
    ) {
        let rendered = CodeGenerator::default().generate(&request, &existing).to_string();
        prop_assert!(!existing.contains(&rendered));
    }

    /// Bulk unit codes share the parent's sequence and are numbered 1..=count.
    #[test]
    fn prop_bulk_units_follow_parent(
        request in arb_request(),
        existing in proptest::collection::vec(arb_existing_code(), 0..10),
        count in 2u32..60,
    ) {
        let bulk = CodeGenerator::default().generate_bulk_codes(&request, &existing, count);
        prop_assert_eq!(bulk.units.len(), count as usize);
        for (index, unit) in bulk.units.iter().enumerate() {
            let parsed = AssetCode::parse(unit).unwrap();
            prop_assert_eq!(parsed.parent().to_string(), bulk.parent.clone());
            prop_assert_eq!(parsed.unit, Some(index as u32 + 1));
        }
    }
}
