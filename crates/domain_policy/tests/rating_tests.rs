//! Premium Rating Engine Tests
//!
//! # Test Organization
//!
//! - `rule_tests` - each rating step on its own
//! - `ordering_tests` - steps compound on the running premium in a fixed order
//! - `rounding_tests` - results are rounded half up to two places
//! - `property_tests` - invariants over generated inputs

use domain_policy::rating::{
    compute_premium, rate_premium, ApplicantMetadata, PremiumAdjustment,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

fn metadata(value: Value) -> ApplicantMetadata {
    value.as_object().cloned().expect("metadata must be an object")
}

// ============================================================================
// RULE TESTS
// ============================================================================

mod rule_tests {
    use super::*;

    #[test]
    fn test_senior_loading_applies_above_fifty() {
        assert_eq!(compute_premium(dec!(100), &metadata(json!({ "age": 51 }))), dec!(120.00));
        assert_eq!(compute_premium(dec!(100), &metadata(json!({ "age": 50 }))), dec!(100.00));
        assert_eq!(compute_premium(dec!(100), &metadata(json!({ "age": 50.5 }))), dec!(120.00));
    }

    #[test]
    fn test_smoker_loading() {
        assert_eq!(compute_premium(dec!(100), &metadata(json!({ "smoker": true }))), dec!(130.00));
        assert_eq!(compute_premium(dec!(100), &metadata(json!({ "smoker": false }))), dec!(100.00));
    }

    #[test]
    fn test_vehicle_value_adds_one_percent() {
        let m = metadata(json!({ "vehicleValue": 5000 }));
        assert_eq!(compute_premium(dec!(100), &m), dec!(150.00));
    }

    #[test]
    fn test_trip_duration_adds_two_per_day() {
        let m = metadata(json!({ "tripDuration": 14 }));
        assert_eq!(compute_premium(dec!(30), &m), dec!(58.00));
    }

    #[test]
    fn test_numeric_strings_are_read() {
        let m = metadata(json!({ "age": "65", "vehicleValue": "1000" }));
        assert_eq!(compute_premium(dec!(100), &m), dec!(130.00));
    }

    #[test]
    fn test_unrelated_fields_are_ignored() {
        let m = metadata(json!({ "occupation": "pilot", "postcode": "90210" }));
        assert_eq!(compute_premium(dec!(75), &m), dec!(75));
    }

    #[test]
    fn test_overflowing_trip_duration_is_skipped() {
        let m = metadata(json!({ "tripDuration": "70000000000000000000000000000" }));
        let breakdown = rate_premium(dec!(100), &m);
        assert!(breakdown.adjustments.is_empty());
        assert_eq!(breakdown.premium, dec!(100));

        let m = metadata(json!({ "tripDuration": 7e28 }));
        assert_eq!(compute_premium(dec!(100), &m), dec!(100));
    }

    #[test]
    fn test_overflow_only_skips_its_own_step() {
        let m = metadata(json!({ "age": 60, "tripDuration": "70000000000000000000000000000" }));
        let breakdown = rate_premium(dec!(100), &m);
        assert_eq!(breakdown.adjustments.len(), 1);
        assert_eq!(breakdown.premium, dec!(120.00));
    }
}

// ============================================================================
// ORDERING TESTS
// ============================================================================

mod ordering_tests {
    use super::*;

    #[test]
    fn test_senior_smoker_compounds() {
        let m = metadata(json!({ "age": 60, "smoker": true }));
        assert_eq!(compute_premium(dec!(100), &m), dec!(156.00));
    }

    /// Surcharges are added after loadings, so they are not loaded themselves
    #[test]
    fn test_surcharges_follow_loadings() {
        let m = metadata(json!({ "age": 60, "smoker": true, "vehicleValue": 5000, "tripDuration": 3 }));
        // 100 * 1.2 * 1.3 = 156, + 50, + 6
        assert_eq!(compute_premium(dec!(100), &m), dec!(212.00));
    }

    #[test]
    fn test_breakdown_records_steps_in_order() {
        let m = metadata(json!({ "tripDuration": 2, "smoker": 1, "age": 70 }));
        let breakdown = rate_premium(dec!(100), &m);

        assert_eq!(breakdown.adjustments.len(), 3);
        assert!(matches!(breakdown.adjustments[0], PremiumAdjustment::SeniorLoading { .. }));
        assert!(matches!(breakdown.adjustments[1], PremiumAdjustment::SmokerLoading { .. }));
        assert!(matches!(breakdown.adjustments[2], PremiumAdjustment::TripDuration { .. }));

        let total: Decimal = breakdown.adjustments.iter().map(|a| a.amount()).sum();
        assert_eq!(breakdown.base_premium + total, breakdown.premium);
    }
}

// ============================================================================
// ROUNDING TESTS
// ============================================================================

mod rounding_tests {
    use super::*;

    #[test]
    fn test_result_rounds_half_up() {
        // 10.00 + 0.5 * 0.01 = 10.005
        let m = metadata(json!({ "vehicleValue": 0.5 }));
        assert_eq!(compute_premium(dec!(10.00), &m), dec!(10.01));
    }

    #[test]
    fn test_base_with_extra_places_is_rounded() {
        assert_eq!(compute_premium(dec!(99.999), &ApplicantMetadata::new()), dec!(100.00));
    }
}

// ============================================================================
// PROPERTY TESTS
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn empty_metadata_is_identity(cents in 1i64..100_000_000i64) {
            let base = Decimal::new(cents, 2);
            prop_assert_eq!(compute_premium(base, &ApplicantMetadata::new()), base);
        }

        #[test]
        fn loadings_never_reduce_premium(
            cents in 1i64..10_000_000i64,
            age in 0u32..110u32,
            smoker in any::<bool>(),
        ) {
            let base = Decimal::new(cents, 2);
            let m = metadata(json!({ "age": age, "smoker": smoker }));
            prop_assert!(compute_premium(base, &m) >= base);
        }
    }
}
