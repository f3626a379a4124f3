//! Claim lifecycle state machine
//!
//! ```text
//! submit  ->  Submitted
//! assess      Submitted -> InReview
//! decide      InReview  -> Approved | PartiallyApproved | Rejected
//! pay         Approved | PartiallyApproved -> Paid
//! ```
//!
//! Each transition checks all of its preconditions before touching the claim,
//! so a failed call leaves every field as it was. The current status is always
//! checked first. Callers serialise transitions per claim; `version` lets a
//! store reject a write based on a stale read.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{round_money, ClaimId, PartyId};
use domain_policy::{Policy, Product};
use crate::claim::{generate_claim_number, Claim, ClaimPayload, ClaimStatus};
use crate::error::ClaimError;
use crate::validation::validate_claim;

/// An assessor's decision on a claim under review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// One of `Approved`, `PartiallyApproved`, `Rejected`
    pub status: ClaimStatus,
    pub decision_reason: String,
    pub eligible_amount: Option<Decimal>,
    pub deductible: Option<Decimal>,
    /// Derived from eligible amount and deductible when omitted
    pub approved_amount: Option<Decimal>,
}

impl Decision {
    /// Full approval paying `eligible_amount` less `deductible`
    pub fn approve(reason: impl Into<String>, eligible_amount: Decimal, deductible: Decimal) -> Self {
        Self {
            status: ClaimStatus::Approved,
            decision_reason: reason.into(),
            eligible_amount: Some(eligible_amount),
            deductible: Some(deductible),
            approved_amount: None,
        }
    }

    /// Partial approval of a fixed amount
    pub fn partially_approve(reason: impl Into<String>, approved_amount: Decimal) -> Self {
        Self {
            status: ClaimStatus::PartiallyApproved,
            decision_reason: reason.into(),
            eligible_amount: None,
            deductible: None,
            approved_amount: Some(approved_amount),
        }
    }

    /// Rejection
    pub fn reject(reason: impl Into<String>) -> Self {
        Self {
            status: ClaimStatus::Rejected,
            decision_reason: reason.into(),
            eligible_amount: None,
            deductible: None,
            approved_amount: None,
        }
    }
}

impl Claim {
    /// Creates a claim in `Submitted` if the payload is admissible
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if the claimed amount is not positive
    /// - `Validation` with every validator message otherwise failing
    pub fn submit(
        policy: &Policy,
        product: &Product,
        claimant_id: PartyId,
        payload: ClaimPayload,
    ) -> Result<Claim, ClaimError> {
        if payload.amount <= Decimal::ZERO {
            return Err(ClaimError::InvalidAmount(format!(
                "claimed amount must be positive, got {}",
                payload.amount
            )));
        }

        let messages = validate_claim(policy, product, &payload);
        if !messages.is_empty() {
            return Err(ClaimError::Validation(messages));
        }

        let now = Utc::now();
        let id = ClaimId::new_v7();
        tracing::debug!(claim_id = %id, policy_id = %policy.id(), amount = %payload.amount, "Claim submitted");

        Ok(Claim {
            id,
            claim_number: generate_claim_number(id),
            policy_id: policy.id(),
            product_id: product.id(),
            claimant_id,
            claim_type: payload.claim_type,
            amount: payload.amount,
            incident_date: payload.incident_date,
            description: payload.description,
            attachments: payload.attachments,
            status: ClaimStatus::Submitted,
            eligible_amount: None,
            deductible: None,
            approved_amount: None,
            decision_reason: None,
            assessed_at: None,
            assessed_by: None,
            paid_at: None,
            version: 1,
            created_at: now,
            updated_at: now,
        })
    }

    /// Moves a submitted claim into review
    pub fn assess(&mut self) -> Result<(), ClaimError> {
        self.ensure_status(ClaimStatus::Submitted, ClaimStatus::InReview)?;

        let now = Utc::now();
        self.status = ClaimStatus::InReview;
        self.assessed_at = Some(now);
        self.touch(now);
        Ok(())
    }

    /// Records an assessor's decision on a claim in review
    ///
    /// For approvals the approved amount defaults to
    /// `max(0, eligible_amount - deductible)`, with the deductible defaulting
    /// to zero. Rejections carry no approved amount.
    ///
    /// # Errors
    ///
    /// Checked in order, first failure wins:
    /// - `InvalidStatusTransition` unless the claim is `InReview`
    /// - `InvalidDecisionStatus` unless the target is a decision status
    /// - `MissingDecisionReason` if the reason is blank
    /// - `InvalidAmount` for negative amounts
    /// - `InvalidAmount` for a partial approval not below the claimed amount
    /// - `MissingRequiredField` for an approval with neither approved nor eligible amount
    pub fn decide(&mut self, decision: Decision, assessor_id: PartyId) -> Result<(), ClaimError> {
        self.ensure_status(ClaimStatus::InReview, decision.status)?;

        if !decision.status.is_decision() {
            return Err(ClaimError::InvalidDecisionStatus(decision.status.to_string()));
        }

        let reason = decision.decision_reason.trim();
        if reason.is_empty() {
            return Err(ClaimError::MissingDecisionReason);
        }

        for (field, value) in [
            ("eligible_amount", decision.eligible_amount),
            ("deductible", decision.deductible),
            ("approved_amount", decision.approved_amount),
        ] {
            if let Some(value) = value {
                if value.is_sign_negative() {
                    return Err(ClaimError::InvalidAmount(format!(
                        "{} must not be negative, got {}",
                        field, value
                    )));
                }
            }
        }

        let approved_amount = if decision.status.is_payable() {
            let approved = match (decision.approved_amount, decision.eligible_amount) {
                (Some(approved), _) => approved,
                (None, Some(eligible)) => {
                    let deductible = decision.deductible.unwrap_or(Decimal::ZERO);
                    (eligible - deductible).max(Decimal::ZERO)
                }
                (None, None) => {
                    return Err(ClaimError::MissingRequiredField("eligible_amount".to_string()));
                }
            };
            Some(round_money(approved))
        } else {
            None
        };

        if let Some(approved) = approved_amount {
            if decision.status == ClaimStatus::PartiallyApproved && approved >= self.amount {
                return Err(ClaimError::InvalidAmount(format!(
                    "partial approval of {} must be below the claimed {}",
                    approved, self.amount
                )));
            }
        }

        let now = Utc::now();
        tracing::debug!(
            claim_id = %self.id,
            status = %decision.status,
            approved = ?approved_amount,
            "Claim decided"
        );

        self.status = decision.status;
        self.decision_reason = Some(reason.to_string());
        self.eligible_amount = decision.eligible_amount;
        self.deductible = decision.deductible;
        self.approved_amount = approved_amount;
        self.assessed_at.get_or_insert(now);
        self.assessed_by.get_or_insert(assessor_id);
        self.touch(now);
        Ok(())
    }

    /// Pays out an approved or partially approved claim
    pub fn pay(&mut self) -> Result<(), ClaimError> {
        if !self.status.is_payable() {
            return Err(ClaimError::InvalidStatusTransition {
                from: self.status.to_string(),
                to: ClaimStatus::Paid.to_string(),
            });
        }

        let now = Utc::now();
        tracing::debug!(claim_id = %self.id, approved = ?self.approved_amount, "Claim paid");
        self.status = ClaimStatus::Paid;
        self.paid_at = Some(now);
        self.touch(now);
        Ok(())
    }

    fn ensure_status(&self, required: ClaimStatus, target: ClaimStatus) -> Result<(), ClaimError> {
        if self.status != required {
            return Err(ClaimError::InvalidStatusTransition {
                from: self.status.to_string(),
                to: target.to_string(),
            });
        }
        Ok(())
    }

    fn touch(&mut self, now: chrono::DateTime<Utc>) {
        self.version += 1;
        self.updated_at = now;
    }
}
