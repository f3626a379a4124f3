//! Pre-built Test Fixtures
//!
//! Ready-to-use products, policies and dates. Every policy fixture covers
//! calendar year 2024 so the date fixtures line up with it.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::{CoveragePeriod, PartyId};
use domain_policy::{Policy, Product, ProductType};

/// Fixture for dates around the standard 2024 policy year
pub struct DateFixtures;

impl DateFixtures {
    /// Jan 1, 2024
    pub fn policy_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// Dec 31, 2024
    pub fn policy_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }

    /// Jun 15, 2024
    pub fn mid_year() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    /// Dec 1, 2023
    pub fn before_policy() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 12, 1).unwrap()
    }

    /// Feb 1, 2025
    pub fn after_policy() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
    }

    /// The 2024 policy year
    pub fn policy_year() -> CoveragePeriod {
        CoveragePeriod::new(Self::policy_start(), Self::policy_end()).unwrap()
    }
}

/// Fixture for catalogue products
pub struct ProductFixtures;

impl ProductFixtures {
    /// Health product, base 100, excludes cosmetic and self-inflicted claims
    pub fn health() -> Product {
        Product::new(
            "Health Plus",
            ProductType::Health,
            dec!(100),
            vec!["cosmetic".to_string(), "self-inflicted".to_string()],
        )
        .unwrap()
    }

    /// Life product, base 250
    pub fn life() -> Product {
        Product::new("Term Life", ProductType::Life, dec!(250), vec!["suicide".to_string()]).unwrap()
    }

    /// Motor product, base 400, excludes racing
    pub fn motor() -> Product {
        Product::new(
            "Motor Comprehensive",
            ProductType::Motor,
            dec!(400),
            vec!["racing".to_string(), "drunk".to_string()],
        )
        .unwrap()
    }

    /// Travel product, base 20
    pub fn travel() -> Product {
        Product::new("Travel Saver", ProductType::Travel, dec!(20), vec!["war zone".to_string()]).unwrap()
    }
}

/// Fixture for issued policies
pub struct PolicyFixtures;

impl PolicyFixtures {
    /// Active policy on `product` for 2024 with the given premium
    pub fn active(product: &Product, premium: rust_decimal::Decimal) -> Policy {
        Policy::issue(product, PartyId::new(), premium, DateFixtures::policy_year()).unwrap()
    }

    /// Active health policy, premium 100 (claims capped at 500)
    pub fn health_100() -> (Product, Policy) {
        let product = ProductFixtures::health();
        let policy = Self::active(&product, dec!(100));
        (product, policy)
    }

    /// Active motor policy, premium 950 (Premium tier)
    pub fn motor_950() -> (Product, Policy) {
        let product = ProductFixtures::motor();
        let policy = Self::active(&product, dec!(950));
        (product, policy)
    }
}
