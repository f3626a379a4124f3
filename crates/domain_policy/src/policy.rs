//! Issued policies
//!
//! A policy pins the product it was sold under, the premium fixed at issuance
//! and the coverage period. Afterwards only its status and premium-paid flag
//! change.
//!
//! # Invariants
//!
//! - Coverage end date is after the start date
//! - Premium is strictly positive
//! - A policy issued from a quote carries that quote's premium

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{CoveragePeriod, PartyId, PolicyId, ProductId, QuoteId};
use crate::error::PolicyError;
use crate::product::Product;
use crate::quote::Quote;

/// Policy status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyStatus {
    /// In force; claims may be filed
    Active,
    /// Premium not kept up; may be reinstated
    Lapsed,
    /// Terminated before its end date
    Cancelled,
    /// Superseded by a renewal policy
    Renewed,
}

impl fmt::Display for PolicyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            PolicyStatus::Active => "ACTIVE",
            PolicyStatus::Lapsed => "LAPSED",
            PolicyStatus::Cancelled => "CANCELLED",
            PolicyStatus::Renewed => "RENEWED",
        };
        f.write_str(code)
    }
}

/// An issued coverage contract
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    id: PolicyId,
    policy_number: String,
    product_id: ProductId,
    policyholder_id: PartyId,
    quote_id: Option<QuoteId>,
    premium: Decimal,
    period: CoveragePeriod,
    status: PolicyStatus,
    premium_paid: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Policy {
    /// Issues a policy directly, without a quote
    pub fn issue(
        product: &Product,
        policyholder_id: PartyId,
        premium: Decimal,
        period: CoveragePeriod,
    ) -> Result<Self, PolicyError> {
        if premium <= Decimal::ZERO {
            return Err(PolicyError::InvalidPremium(format!(
                "policy premium must be positive, got {}",
                premium
            )));
        }
        let now = Utc::now();
        let id = PolicyId::new_v7();

        tracing::debug!(policy_id = %id, product_id = %product.id(), %premium, "Issuing policy");

        Ok(Self {
            id,
            policy_number: generate_policy_number(id),
            product_id: product.id(),
            policyholder_id,
            quote_id: None,
            premium,
            period,
            status: PolicyStatus::Active,
            premium_paid: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Issues the policy for an approved quote
    ///
    /// The premium is taken from the quote and the requester becomes the
    /// policyholder.
    ///
    /// # Errors
    ///
    /// - `QuoteNotApproved` if the quote is pending or rejected
    /// - `ProductMismatch` if the quote was priced for another product
    pub fn issue_from_quote(
        quote: &Quote,
        product: &Product,
        period: CoveragePeriod,
    ) -> Result<Self, PolicyError> {
        if !quote.is_approved() {
            return Err(PolicyError::QuoteNotApproved {
                status: quote.status.to_string(),
            });
        }
        if quote.product_id != product.id() {
            return Err(PolicyError::ProductMismatch {
                quoted: quote.product_id.to_string(),
                given: product.id().to_string(),
            });
        }

        let mut policy = Self::issue(product, quote.requester_id, quote.premium, period)?;
        policy.quote_id = Some(quote.id);
        Ok(policy)
    }

    pub fn id(&self) -> PolicyId {
        self.id
    }

    pub fn policy_number(&self) -> &str {
        &self.policy_number
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn policyholder_id(&self) -> PartyId {
        self.policyholder_id
    }

    pub fn quote_id(&self) -> Option<QuoteId> {
        self.quote_id
    }

    pub fn premium(&self) -> Decimal {
        self.premium
    }

    pub fn period(&self) -> CoveragePeriod {
        self.period
    }

    pub fn start_date(&self) -> NaiveDate {
        self.period.start()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.period.end()
    }

    pub fn status(&self) -> PolicyStatus {
        self.status
    }

    pub fn premium_paid(&self) -> bool {
        self.premium_paid
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn is_active(&self) -> bool {
        self.status == PolicyStatus::Active
    }

    /// Records that the premium has been paid
    pub fn mark_premium_paid(&mut self) {
        self.premium_paid = true;
        self.updated_at = Utc::now();
    }

    /// Updates the status
    pub fn update_status(&mut self, status: PolicyStatus) -> Result<(), PolicyError> {
        if !self.can_transition_to(status) {
            return Err(PolicyError::transition(self.status, status));
        }
        tracing::debug!(policy_id = %self.id, from = %self.status, to = %status, "Policy status changed");
        self.status = status;
        self.updated_at = Utc::now();
        Ok(())
    }

    fn can_transition_to(&self, target: PolicyStatus) -> bool {
        use PolicyStatus::*;
        matches!(
            (self.status, target),
            (Active, Lapsed) |
            (Active, Cancelled) |
            (Active, Renewed) |
            (Lapsed, Active) |
            (Lapsed, Cancelled)
        )
    }
}

fn generate_policy_number(id: PolicyId) -> String {
    let simple = id.as_uuid().simple().to_string();
    let suffix = &simple[simple.len() - 12..];
    format!("POL-{}-{}", Utc::now().format("%Y%m%d"), suffix.to_uppercase())
}
