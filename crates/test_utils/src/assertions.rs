//! Custom Test Assertions
//!
//! Assertion helpers that print the whole value under test on failure.

use rust_decimal::Decimal;

use domain_claims::ClaimError;

/// Asserts that `messages` contains one entry containing `fragment`
pub fn assert_validation_contains(messages: &[String], fragment: &str) {
    assert!(
        messages.iter().any(|m| m.contains(fragment)),
        "Expected a validation message containing {:?}, got {:?}",
        fragment,
        messages
    );
}

/// Asserts that `error` is a validation failure carrying `fragment`
pub fn assert_claim_rejected_with(error: &ClaimError, fragment: &str) {
    assert!(error.is_validation(), "Expected a validation failure, got {:?}", error);
    assert_validation_contains(&error.messages(), fragment);
}

/// Asserts two amounts are equal once both are scaled to two decimals
///
/// `150` and `150.00` compare equal here.
pub fn assert_amount_eq(actual: Decimal, expected: Decimal) {
    assert_eq!(
        actual.round_dp(2),
        expected.round_dp(2),
        "Amounts differ: actual={}, expected={}",
        actual,
        expected
    );
}

/// Asserts an amount carries at most two decimal places
pub fn assert_money_scale(amount: Decimal) {
    assert!(
        amount.normalize().scale() <= 2,
        "Expected at most 2 decimal places, got {}",
        amount
    );
}
