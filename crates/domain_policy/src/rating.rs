//! Premium rating engine
//!
//! Computes a quoted premium from a product's base premium and the applicant
//! metadata captured on the quote request. Adjustments apply in a fixed order
//! because later steps work on the already-adjusted running premium:
//!
//! 1. `age` above 50: +20% loading
//! 2. `smoker` truthy: +30% loading
//! 3. `vehicleValue`: add 1% of the declared value
//! 4. `tripDuration`: add 2 per day
//!
//! The result is rounded to two decimal places, half up. Absent or unreadable
//! fields are skipped; rating never fails.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

use core_kernel::{round_money, Rate};

/// Free-form applicant metadata attached to a quote request
pub type ApplicantMetadata = Map<String, Value>;

/// Applicants older than this attract the senior loading
pub const SENIOR_AGE_THRESHOLD: Decimal = dec!(50);

/// Loading applied to applicants older than `SENIOR_AGE_THRESHOLD`
pub const SENIOR_LOADING: Rate = Rate::new(dec!(0.20));

/// Loading applied to smokers
pub const SMOKER_LOADING: Rate = Rate::new(dec!(0.30));

/// Share of the declared vehicle value added to the premium
pub const VEHICLE_VALUE_RATE: Rate = Rate::new(dec!(0.01));

/// Flat surcharge per day of travel
pub const TRIP_DAY_CHARGE: Decimal = dec!(2);

/// A single step applied by the rating engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PremiumAdjustment {
    /// Age loading
    SeniorLoading { age: Decimal, amount: Decimal },
    /// Smoker loading
    SmokerLoading { amount: Decimal },
    /// Vehicle value surcharge
    VehicleValue { vehicle_value: Decimal, amount: Decimal },
    /// Trip duration surcharge
    TripDuration { days: Decimal, amount: Decimal },
}

impl PremiumAdjustment {
    /// Amount this step added to the running premium
    pub fn amount(&self) -> Decimal {
        match self {
            PremiumAdjustment::SeniorLoading { amount, .. }
            | PremiumAdjustment::SmokerLoading { amount }
            | PremiumAdjustment::VehicleValue { amount, .. }
            | PremiumAdjustment::TripDuration { amount, .. } => *amount,
        }
    }
}

/// How a premium was reached from the base premium
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumBreakdown {
    pub base_premium: Decimal,
    pub adjustments: Vec<PremiumAdjustment>,
    /// Final premium, rounded to two decimal places
    pub premium: Decimal,
}

/// Computes the quoted premium for `base_premium` and applicant `metadata`
///
/// # Example
///
/// ```rust,ignore
/// let metadata = json!({ "age": 60, "smoker": true });
/// assert_eq!(compute_premium(dec!(100), metadata.as_object().unwrap()), dec!(156.00));
/// ```
pub fn compute_premium(base_premium: Decimal, metadata: &ApplicantMetadata) -> Decimal {
    rate_premium(base_premium, metadata).premium
}

/// Runs the rating steps and records each adjustment
pub fn rate_premium(base_premium: Decimal, metadata: &ApplicantMetadata) -> PremiumBreakdown {
    let mut running = base_premium;
    let mut adjustments = Vec::new();

    // A step whose result overflows is skipped like an unreadable field
    if let Some(age) = numeric_field(metadata, "age") {
        if age > SENIOR_AGE_THRESHOLD {
            match SENIOR_LOADING.load(running) {
                Some(loaded) => {
                    adjustments.push(PremiumAdjustment::SeniorLoading { age, amount: loaded - running });
                    running = loaded;
                }
                None => skip_step("age"),
            }
        }
    }

    if metadata.get("smoker").is_some_and(is_truthy) {
        match SMOKER_LOADING.load(running) {
            Some(loaded) => {
                adjustments.push(PremiumAdjustment::SmokerLoading { amount: loaded - running });
                running = loaded;
            }
            None => skip_step("smoker"),
        }
    }

    if let Some(vehicle_value) = numeric_field(metadata, "vehicleValue") {
        let step = VEHICLE_VALUE_RATE
            .apply(vehicle_value)
            .and_then(|amount| Some((amount, running.checked_add(amount)?)));
        match step {
            Some((amount, total)) => {
                adjustments.push(PremiumAdjustment::VehicleValue { vehicle_value, amount });
                running = total;
            }
            None => skip_step("vehicleValue"),
        }
    }

    if let Some(days) = numeric_field(metadata, "tripDuration") {
        let step = days
            .checked_mul(TRIP_DAY_CHARGE)
            .and_then(|amount| Some((amount, running.checked_add(amount)?)));
        match step {
            Some((amount, total)) => {
                adjustments.push(PremiumAdjustment::TripDuration { days, amount });
                running = total;
            }
            None => skip_step("tripDuration"),
        }
    }

    let premium = round_money(running);
    tracing::debug!(%base_premium, %premium, steps = adjustments.len(), "Premium rated");

    PremiumBreakdown {
        base_premium,
        adjustments,
        premium,
    }
}

fn skip_step(field: &str) {
    tracing::debug!(field, "Rating step overflowed, skipped");
}

/// Reads a numeric field, accepting JSON numbers and numeric strings
fn numeric_field(metadata: &ApplicantMetadata, key: &str) -> Option<Decimal> {
    match metadata.get(key)? {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s.trim()),
        _ => None,
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

/// Truthiness of a metadata flag
///
/// Booleans are taken as-is, numbers are truthy when non-zero, and strings are
/// truthy unless blank or one of `false`, `0`, `no` (any case). Arrays and
/// objects count as set.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => {
            let s = s.trim();
            !(s.is_empty()
                || s.eq_ignore_ascii_case("false")
                || s == "0"
                || s.eq_ignore_ascii_case("no"))
        }
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn metadata(value: Value) -> ApplicantMetadata {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_empty_metadata_returns_base() {
        assert_eq!(compute_premium(dec!(250), &ApplicantMetadata::new()), dec!(250));
    }

    #[test]
    fn test_senior_smoker() {
        let m = metadata(json!({ "age": 60, "smoker": true }));
        assert_eq!(compute_premium(dec!(100), &m), dec!(156.00));
    }

    #[test]
    fn test_age_fifty_is_not_loaded() {
        let m = metadata(json!({ "age": 50 }));
        assert_eq!(compute_premium(dec!(100), &m), dec!(100));
    }

    #[test]
    fn test_vehicle_value() {
        let m = metadata(json!({ "vehicleValue": 5000 }));
        assert_eq!(compute_premium(dec!(100), &m), dec!(150.00));
    }

    #[test]
    fn test_truthiness() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!("yes")));
        assert!(!is_truthy(&json!("false")));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!("")));
    }

    #[test]
    fn test_unreadable_fields_are_skipped() {
        let m = metadata(json!({ "age": "unknown", "vehicleValue": [1, 2] }));
        assert_eq!(compute_premium(dec!(80), &m), dec!(80));
    }
}
