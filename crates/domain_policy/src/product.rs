//! Insurance products
//!
//! A product is an offering in the catalogue. Policies pin the product they
//! were issued under, and claims are only admissible for the product's own
//! type.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::ProductId;
use crate::error::PolicyError;

/// Category of an insurance product
///
/// Claims carry the same enumeration as their claim type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    Health,
    Life,
    Motor,
    Travel,
    Fire,
    Property,
    Home,
    Business,
    Liability,
}

impl ProductType {
    /// All product types in catalogue order
    pub const ALL: [ProductType; 9] = [
        ProductType::Health,
        ProductType::Life,
        ProductType::Motor,
        ProductType::Travel,
        ProductType::Fire,
        ProductType::Property,
        ProductType::Home,
        ProductType::Business,
        ProductType::Liability,
    ];

    /// Returns the upper-case code used in stored records
    pub fn code(&self) -> &'static str {
        match self {
            ProductType::Health => "HEALTH",
            ProductType::Life => "LIFE",
            ProductType::Motor => "MOTOR",
            ProductType::Travel => "TRAVEL",
            ProductType::Fire => "FIRE",
            ProductType::Property => "PROPERTY",
            ProductType::Home => "HOME",
            ProductType::Business => "BUSINESS",
            ProductType::Liability => "LIABILITY",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ProductType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductType::ALL
            .into_iter()
            .find(|t| t.code() == s)
            .ok_or_else(|| format!("Unknown product type: {}", s))
    }
}

/// An insurance offering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    /// Display name
    pub name: String,
    product_type: ProductType,
    base_premium: Decimal,
    /// Phrases that void a claim when found in its description
    pub exclusions: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a product
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::InvalidPremium` unless `base_premium > 0`.
    pub fn new(
        name: impl Into<String>,
        product_type: ProductType,
        base_premium: Decimal,
        exclusions: Vec<String>,
    ) -> Result<Self, PolicyError> {
        ensure_positive(base_premium)?;
        let now = Utc::now();

        Ok(Self {
            id: ProductId::new_v7(),
            name: name.into(),
            product_type,
            base_premium,
            exclusions,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    pub fn base_premium(&self) -> Decimal {
        self.base_premium
    }

    /// Changes the base premium; already-issued policies keep their own premium
    pub fn reprice(&mut self, base_premium: Decimal) -> Result<(), PolicyError> {
        ensure_positive(base_premium)?;
        self.base_premium = base_premium;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Returns the first exclusion phrase contained in `description`, ignoring case
    ///
    /// Blank phrases never match.
    pub fn triggered_exclusion(&self, description: &str) -> Option<&str> {
        let description = description.to_lowercase();
        self.exclusions
            .iter()
            .map(|phrase| phrase.trim())
            .filter(|phrase| !phrase.is_empty())
            .find(|phrase| description.contains(&phrase.to_lowercase()))
    }
}

fn ensure_positive(base_premium: Decimal) -> Result<(), PolicyError> {
    if base_premium <= Decimal::ZERO {
        return Err(PolicyError::InvalidPremium(format!(
            "base premium must be positive, got {}",
            base_premium
        )));
    }
    Ok(())
}
