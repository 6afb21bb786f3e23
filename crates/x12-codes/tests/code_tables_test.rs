//! Integration tests for the shipped 834 code tables
//!
//! These walk every registered code set and check the resolution laws hold
//! for the real data, not just for hand-built sets.

use x12_codes::tables::{
    ACKNOWLEDGMENT_REQUESTED, ACTION_CODE, COVERAGE_LEVEL_CODE, DATE_TIME_QUALIFIER,
    ENTITY_IDENTIFIER_CODE, INDIVIDUAL_RELATIONSHIP_CODE, INSURANCE_LINE_CODE,
    MAINTENANCE_TYPE_CODE, TIME_CODE, YES_NO_CONDITION,
};
use x12_codes::{CodeError, registry};

#[test]
fn test_every_entry_resolves_by_code_and_description() {
    for set in registry().sets() {
        for entry in set.entries() {
            assert_eq!(
                set.resolve(entry.code).unwrap(),
                entry,
                "{}: code {}",
                set.name(),
                entry.code
            );
            assert_eq!(
                set.resolve(&entry.description.to_lowercase()).unwrap(),
                entry,
                "{}: description {}",
                set.name(),
                entry.description
            );
            assert_eq!(
                set.resolve(&entry.name.to_lowercase()).unwrap(),
                entry,
                "{}: name {}",
                set.name(),
                entry.name
            );
        }
    }
}

#[test]
fn test_every_alias_resolves_to_its_target() {
    for set in registry().sets() {
        for (term, target) in set.aliases() {
            let padded = format!("  {}  ", term.to_uppercase());
            assert_eq!(
                set.resolve(term).unwrap(),
                target,
                "{}: alias {term}",
                set.name()
            );
            assert_eq!(
                set.resolve(&padded).unwrap(),
                target,
                "{}: alias {padded:?}",
                set.name()
            );
        }
    }
}

#[test]
fn test_no_shipped_alias_targets_an_unknown_code() {
    for set in registry().sets() {
        assert!(
            set.skipped_aliases().is_empty(),
            "{}: aliases with unknown codes {:?}",
            set.name(),
            set.skipped_aliases()
        );
    }
}

#[test]
fn test_codes_are_unique_within_each_set() {
    for set in registry().sets() {
        let mut codes: Vec<_> = set.entries().iter().map(|e| e.code).collect();
        codes.sort_unstable();
        let before = codes.len();
        codes.dedup();
        assert_eq!(before, codes.len(), "{} has duplicate codes", set.name());
    }
}

#[test]
fn test_blank_and_unknown_input_fail() {
    for set in registry().sets() {
        assert!(matches!(
            set.resolve(""),
            Err(CodeError::InvalidInput { .. })
        ));
        assert!(matches!(
            set.resolve("   "),
            Err(CodeError::InvalidInput { .. })
        ));
        let err = set.resolve("definitely not a code").unwrap_err();
        assert!(err.to_string().contains(set.name()));
        assert!(err.to_string().contains("definitely not a code"));
    }
}

#[test]
fn test_acknowledgment_requested_scenario() {
    let second = ACKNOWLEDGMENT_REQUESTED.get("1").unwrap();

    assert_eq!(ACKNOWLEDGMENT_REQUESTED.resolve("TA1").unwrap(), second);
    assert_eq!(ACKNOWLEDGMENT_REQUESTED.resolve("1").unwrap(), second);
    assert_eq!(ACKNOWLEDGMENT_REQUESTED.resolve("yes").unwrap(), second);
    assert_eq!(ACKNOWLEDGMENT_REQUESTED.resolve("no").unwrap().code, "0");
    assert_eq!(
        ACKNOWLEDGMENT_REQUESTED.resolve("NO_ACKNOWLEDGMENT").unwrap().code,
        "0"
    );
    assert!(matches!(
        ACKNOWLEDGMENT_REQUESTED.resolve("invalid"),
        Err(CodeError::NotFound { .. })
    ));
}

#[test]
fn test_common_synonyms() {
    assert_eq!(MAINTENANCE_TYPE_CODE.resolve("add").unwrap().code, "021");
    assert_eq!(MAINTENANCE_TYPE_CODE.resolve("Terminate").unwrap().code, "024");
    assert_eq!(INSURANCE_LINE_CODE.resolve("medical").unwrap().code, "HLT");
    assert_eq!(INSURANCE_LINE_CODE.resolve("dental").unwrap().code, "DEN");
    assert_eq!(INSURANCE_LINE_CODE.resolve("hlt").unwrap().code, "HLT");
    assert_eq!(COVERAGE_LEVEL_CODE.resolve("family").unwrap().code, "FAM");
    assert_eq!(COVERAGE_LEVEL_CODE.resolve("EE+SP").unwrap().code, "ESP");
    assert_eq!(
        INDIVIDUAL_RELATIONSHIP_CODE.resolve("wife").unwrap().code,
        "01"
    );
    assert_eq!(
        INDIVIDUAL_RELATIONSHIP_CODE.resolve("self").unwrap().code,
        "18"
    );
    assert_eq!(ENTITY_IDENTIFIER_CODE.resolve("payer").unwrap().code, "IN");
    assert_eq!(ENTITY_IDENTIFIER_CODE.resolve("Plan Sponsor").unwrap().code, "P5");
    assert_eq!(DATE_TIME_QUALIFIER.resolve("coverage start").unwrap().code, "348");
    assert_eq!(TIME_CODE.resolve("utc").unwrap().code, "UT");
    assert_eq!(ACTION_CODE.resolve("change (update)").unwrap().code, "2");
    assert_eq!(YES_NO_CONDITION.resolve("true").unwrap().code, "Y");
}

#[test]
fn test_concurrent_readers_agree() {
    x12_codes::init();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                (0..100)
                    .map(|_| COVERAGE_LEVEL_CODE.resolve("family").unwrap().code)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        let codes = handle.join().unwrap();
        assert!(codes.iter().all(|code| *code == "FAM"));
    }
}
