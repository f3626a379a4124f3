//! Decimal helpers for monetary arithmetic
//!
//! Premiums, claim amounts and payouts are plain `rust_decimal::Decimal`
//! values in the brokerage's single settlement currency. This module owns the
//! rounding convention and the `Rate` value object used for loadings.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of decimal places monetary results are rounded to
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount to two decimal places, half away from zero
///
/// `12.345` becomes `12.35`, `-12.345` becomes `-12.35`.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Represents a percentage rate (e.g., a premium loading)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    /// The rate as a decimal (e.g., 0.20 for 20%)
    value: Decimal,
}

impl Rate {
    /// Creates a rate from a decimal value (e.g., 0.05 for 5%)
    pub const fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Creates a rate from a percentage (e.g., 5.0 for 5%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self {
            value: percentage / dec!(100),
        }
    }

    /// Returns the rate as a decimal
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns the rate as a percentage
    pub fn as_percentage(&self) -> Decimal {
        self.value * dec!(100)
    }

    /// Returns the portion of `amount` this rate represents
    ///
    /// `None` if the result does not fit in a `Decimal`.
    pub fn apply(&self, amount: Decimal) -> Option<Decimal> {
        amount.checked_mul(self.value)
    }

    /// Returns `amount` increased by this rate, e.g. a 20% loading turns 100 into 120
    ///
    /// `None` if the result does not fit in a `Decimal`.
    pub fn load(&self, amount: Decimal) -> Option<Decimal> {
        amount.checked_mul(Decimal::ONE + self.value)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().round_dp(4).normalize())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn rounding_is_idempotent(minor in -1_000_000_000i64..1_000_000_000i64, scale in 0u32..6u32) {
            let amount = Decimal::new(minor, scale);
            let once = round_money(amount);
            prop_assert_eq!(round_money(once), once);
            prop_assert!(once.scale() <= MONEY_DECIMAL_PLACES);
        }
    }
}
