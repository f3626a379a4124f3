//! Claim eligibility validation
//!
//! Decides whether a submitted claim is admissible against its policy and
//! product. Every check runs; callers receive the full list so a claimant can
//! fix everything in one round trip. An empty list means admissible.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use domain_policy::{Policy, Product};
use crate::claim::ClaimPayload;

/// A claim may not exceed this multiple of the policy premium
pub const CLAIM_LIMIT_MULTIPLE: Decimal = dec!(5);

/// A reason a claim is not admissible
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimViolation {
    /// Incident date outside the coverage period
    OutsidePolicyPeriod,
    /// Claim type differs from the product type
    ClaimTypeNotCovered,
    /// Description contains one of the product's exclusion phrases
    ExclusionTriggered { phrase: String },
    /// Claimed amount above `CLAIM_LIMIT_MULTIPLE` times the premium
    AmountExceedsLimit { max: Decimal },
    /// Policy is lapsed, cancelled or renewed
    PolicyNotActive,
}

impl fmt::Display for ClaimViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimViolation::OutsidePolicyPeriod => {
                f.write_str("Incident date must be within policy period")
            }
            ClaimViolation::ClaimTypeNotCovered => {
                f.write_str("Claim type not covered by policy product")
            }
            ClaimViolation::ExclusionTriggered { .. } => {
                f.write_str("Claim triggers product exclusion")
            }
            ClaimViolation::AmountExceedsLimit { max } => {
                write!(f, "Claim amount exceeds limit of {}", max.normalize())
            }
            ClaimViolation::PolicyNotActive => f.write_str("Policy is not active"),
        }
    }
}

/// Largest admissible claim amount for a policy
///
/// Saturates at `Decimal::MAX` when the multiple overflows.
pub fn max_claim_amount(policy: &Policy) -> Decimal {
    policy
        .premium()
        .checked_mul(CLAIM_LIMIT_MULTIPLE)
        .unwrap_or(Decimal::MAX)
}

/// Runs every admissibility check and returns the violations found
pub fn check_claim(policy: &Policy, product: &Product, payload: &ClaimPayload) -> Vec<ClaimViolation> {
    let mut violations = Vec::new();

    if !policy.period().contains(payload.incident_date) {
        violations.push(ClaimViolation::OutsidePolicyPeriod);
    }

    if payload.claim_type != product.product_type() {
        violations.push(ClaimViolation::ClaimTypeNotCovered);
    }

    if let Some(phrase) = product.triggered_exclusion(&payload.description) {
        violations.push(ClaimViolation::ExclusionTriggered {
            phrase: phrase.to_string(),
        });
    }

    let max = max_claim_amount(policy);
    if payload.amount > max {
        violations.push(ClaimViolation::AmountExceedsLimit { max });
    }

    if !policy.is_active() {
        violations.push(ClaimViolation::PolicyNotActive);
    }

    if !violations.is_empty() {
        tracing::debug!(
            policy_id = %policy.id(),
            violations = violations.len(),
            "Claim is not admissible"
        );
    }
    violations
}

/// Validates a claim payload, returning human-readable messages
pub fn validate_claim(policy: &Policy, product: &Product, payload: &ClaimPayload) -> Vec<String> {
    check_claim(policy, product, payload)
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_fixed() {
        assert_eq!(
            ClaimViolation::OutsidePolicyPeriod.to_string(),
            "Incident date must be within policy period"
        );
        assert_eq!(
            ClaimViolation::ExclusionTriggered { phrase: "flood".into() }.to_string(),
            "Claim triggers product exclusion"
        );
        assert_eq!(
            ClaimViolation::AmountExceedsLimit { max: dec!(500) }.to_string(),
            "Claim amount exceeds limit of 500"
        );
        assert_eq!(
            ClaimViolation::AmountExceedsLimit { max: dec!(500.00) }.to_string(),
            "Claim amount exceeds limit of 500"
        );
        assert_eq!(
            ClaimViolation::AmountExceedsLimit { max: dec!(612.50) }.to_string(),
            "Claim amount exceeds limit of 612.5"
        );
    }
}
