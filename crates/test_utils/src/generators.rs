//! Property-Based Test Generators
//!
//! Proptest strategies producing values that respect domain invariants.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::{json, Map, Value};

use domain_policy::{ApplicantMetadata, ProductType};

use crate::fixtures::DateFixtures;

/// Strategy for any product type
pub fn product_type_strategy() -> impl Strategy<Value = ProductType> {
    proptest::sample::select(ProductType::ALL.to_vec())
}

/// Positive amounts with two decimals, 0.01 to 10,000,000.00
pub fn positive_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Base premiums between 1.00 and 100,000.00
pub fn base_premium_strategy() -> impl Strategy<Value = Decimal> {
    (100i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Dates inside the 2024 policy year
pub fn covered_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..366).prop_map(|offset| DateFixtures::policy_start() + Duration::days(offset))
}

/// Dates in the year after the 2024 policy year
pub fn uncovered_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1i64..366).prop_map(|offset| DateFixtures::policy_end() + Duration::days(offset))
}

/// Applicant metadata mixing recognised and unrecognised keys
pub fn applicant_metadata_strategy() -> impl Strategy<Value = ApplicantMetadata> {
    (
        proptest::option::of(18u32..90),
        proptest::option::of(any::<bool>()),
        proptest::option::of(0u32..200_000),
        proptest::option::of(1u32..60),
        proptest::option::of("[a-z]{3,10}"),
    )
        .prop_map(|(age, smoker, vehicle_value, trip_days, occupation)| {
            let mut metadata = Map::new();
            if let Some(age) = age {
                metadata.insert("age".to_string(), json!(age));
            }
            if let Some(smoker) = smoker {
                metadata.insert("smoker".to_string(), Value::Bool(smoker));
            }
            if let Some(value) = vehicle_value {
                metadata.insert("vehicleValue".to_string(), json!(value));
            }
            if let Some(days) = trip_days {
                metadata.insert("tripDuration".to_string(), json!(days));
            }
            if let Some(occupation) = occupation {
                metadata.insert("occupation".to_string(), Value::String(occupation));
            }
            metadata
        })
}
