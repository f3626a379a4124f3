//! Coverage information for submitted claims
//!
//! Advisory only: shows the claimant which plan their policy falls into and
//! how the claim compares with that plan's ceiling. Admissibility is decided
//! by `validation` alone.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_policy::{PlanTable, Policy, Product, ProductType};

/// Plan ceiling summary returned alongside a submitted claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageInfo {
    pub plan_name: String,
    pub policy_premium: Decimal,
    /// `None` when the plan sets no ceiling for the claim type
    pub coverage_limit: Option<Decimal>,
    pub claimed_amount: Decimal,
    /// Ceiling left after this claim, never negative
    pub remaining_coverage: Option<Decimal>,
}

impl CoverageInfo {
    /// True when the claim is above the plan ceiling
    pub fn exceeds_limit(&self) -> bool {
        self.coverage_limit
            .is_some_and(|limit| self.claimed_amount > limit)
    }
}

/// Resolves the policy's plan and summarises its ceiling for `claim_type`
///
/// Returns `None` when no tier in `plans` matches the policy.
pub fn coverage_info(
    plans: &PlanTable,
    policy: &Policy,
    product: &Product,
    claim_type: ProductType,
    claimed_amount: Decimal,
) -> Option<CoverageInfo> {
    let plan = plans.determine_plan(product.product_type(), policy.premium())?;
    let coverage_limit = plan.coverage_limit(product.product_type(), claim_type);

    Some(CoverageInfo {
        plan_name: plan.name.clone(),
        policy_premium: policy.premium(),
        coverage_limit,
        claimed_amount,
        remaining_coverage: coverage_limit.map(|limit| (limit - claimed_amount).max(Decimal::ZERO)),
    })
}
