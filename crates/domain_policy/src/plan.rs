//! Plan and coverage resolution
//!
//! Policies are grouped into named tiers (Basic, Standard, Premium, Ultra
//! Premium) by product type and premium band. Each tier carries a coverage
//! ceiling per claim type. The tier table is configuration: it is loaded from
//! TOML and injected wherever plans are resolved.
//!
//! Resolution is advisory. It feeds the coverage information shown alongside
//! a submitted claim and never decides whether a claim is admissible.
//!
//! # Table format
//!
//! ```toml
//! [[tiers]]
//! product_type = "HEALTH"
//! name = "Premium"
//! min_premium = "1500"
//! limits = [{ claim_type = "HEALTH", amount = "500000" }]
//! ```

use config::{Config, File, FileFormat};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use crate::product::ProductType;

const STANDARD_TABLE: &str = include_str!("../config/plans.toml");

/// Errors raised while loading a plan table
#[derive(Debug, Error)]
pub enum PlanError {
    /// The source could not be read or parsed
    #[error("Failed to load plan table: {0}")]
    Load(#[from] config::ConfigError),

    /// The table parsed but breaks a table invariant
    #[error("Invalid plan table: {0}")]
    Invalid(String),
}

/// Coverage ceiling of a tier for one claim type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageLimit {
    pub claim_type: ProductType,
    /// Ceiling per claim; `None` means unlimited
    #[serde(default)]
    pub amount: Option<Decimal>,
}

/// A named premium tier for one product type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub product_type: ProductType,
    pub name: String,
    /// Lowest policy premium that qualifies for this tier
    pub min_premium: Decimal,
    #[serde(default)]
    pub limits: Vec<CoverageLimit>,
}

impl Plan {
    /// Returns the ceiling this plan sets for `claim_type` under `product_type`
    ///
    /// `None` means no ceiling applies: the tier is unlimited for that claim
    /// type, lists no limit for it, or belongs to another product type.
    pub fn coverage_limit(&self, product_type: ProductType, claim_type: ProductType) -> Option<Decimal> {
        if self.product_type != product_type {
            return None;
        }
        self.limits
            .iter()
            .find(|limit| limit.claim_type == claim_type)
            .and_then(|limit| limit.amount)
    }
}

#[derive(Debug, Deserialize)]
struct PlanTableSource {
    #[serde(default)]
    tiers: Vec<Plan>,
}

/// Tier table keyed by product type, ordered by ascending minimum premium
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanTable {
    tiers: Vec<Plan>,
}

impl PlanTable {
    /// Builds a table from tiers in any order
    ///
    /// # Errors
    ///
    /// Returns `PlanError::Invalid` if a product type repeats a tier name or
    /// a minimum premium or coverage limit is negative.
    pub fn new(mut tiers: Vec<Plan>) -> Result<Self, PlanError> {
        let mut seen = HashSet::new();
        for tier in &tiers {
            if !seen.insert((tier.product_type, tier.name.as_str())) {
                return Err(PlanError::Invalid(format!(
                    "duplicate tier {} for {}",
                    tier.name, tier.product_type
                )));
            }
            if tier.min_premium.is_sign_negative() {
                return Err(PlanError::Invalid(format!(
                    "tier {} for {} has negative min_premium",
                    tier.name, tier.product_type
                )));
            }
            if tier
                .limits
                .iter()
                .any(|limit| limit.amount.is_some_and(|a| a.is_sign_negative()))
            {
                return Err(PlanError::Invalid(format!(
                    "tier {} for {} has a negative coverage limit",
                    tier.name, tier.product_type
                )));
            }
        }

        tiers.sort_by(|a, b| {
            a.product_type
                .cmp(&b.product_type)
                .then(a.min_premium.cmp(&b.min_premium))
        });
        Ok(Self { tiers })
    }

    /// Parses a table from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self, PlanError> {
        let source: PlanTableSource = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Self::new(source.tiers)
    }

    /// Loads a table from a file; the format follows the file extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PlanError> {
        let source: PlanTableSource = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()?
            .try_deserialize()?;
        Self::new(source.tiers)
    }

    /// The table shipped with the crate
    pub fn standard() -> Result<Self, PlanError> {
        Self::from_toml_str(STANDARD_TABLE)
    }

    /// Finds the tier a policy premium falls into for `product_type`
    ///
    /// Picks the highest tier whose minimum premium does not exceed
    /// `policy_premium`; `None` when the product type has no tiers or the
    /// premium is below every band.
    pub fn determine_plan(&self, product_type: ProductType, policy_premium: Decimal) -> Option<&Plan> {
        let plan = self
            .tiers
            .iter()
            .filter(|tier| tier.product_type == product_type && tier.min_premium <= policy_premium)
            .last();

        tracing::debug!(
            %product_type,
            %policy_premium,
            plan = plan.map(|p| p.name.as_str()),
            "Plan resolved"
        );
        plan
    }

    /// Tiers configured for `product_type`, lowest band first
    pub fn tiers_for(&self, product_type: ProductType) -> impl Iterator<Item = &Plan> {
        self.tiers.iter().filter(move |tier| tier.product_type == product_type)
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}
