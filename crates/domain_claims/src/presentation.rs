//! Customer-facing claim status
//!
//! A pure derivation from claim fields: label, message, next step and the
//! amount breakdown, including the derived rejected amount and payment
//! status. Nothing here mutates the claim.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::claim::{Claim, ClaimStatus};

/// Where the money stands for a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    AwaitingDecision,
    PendingPayment,
    NotPayable,
    Paid,
}

impl PaymentStatus {
    fn for_status(status: ClaimStatus) -> Self {
        match status {
            ClaimStatus::Submitted | ClaimStatus::InReview => PaymentStatus::AwaitingDecision,
            ClaimStatus::Approved | ClaimStatus::PartiallyApproved => PaymentStatus::PendingPayment,
            ClaimStatus::Rejected => PaymentStatus::NotPayable,
            ClaimStatus::Paid => PaymentStatus::Paid,
        }
    }
}

/// Amounts shown with a claim status
///
/// `claimed` is always present; the assessed amounts only once set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountBreakdown {
    pub claimed: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligible: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deductible: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved: Option<Decimal>,
    /// Whole claim when rejected, the shortfall when partially approved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected: Option<Decimal>,
}

/// Status readout for a claimant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusView {
    /// Stored status code, e.g. `IN_REVIEW`
    pub status: String,
    pub label: String,
    pub message: String,
    pub next_step_hint: String,
    pub amount_breakdown: AmountBreakdown,
    /// Absent for unrecognised status codes
    pub payment_status: Option<PaymentStatus>,
}

/// Describes a claim's current status
pub fn describe_status(claim: &Claim) -> StatusView {
    let status = claim.status();
    let reason = claim.decision_reason().unwrap_or("No reason recorded");
    let approved = display_amount(claim.approved_amount());

    let (label, message, next_step_hint) = match status {
        ClaimStatus::Submitted => (
            "Submitted",
            "Your claim has been received and is waiting for an assessor.".to_string(),
            "An assessor will start reviewing your claim shortly.",
        ),
        ClaimStatus::InReview => (
            "In Review",
            "Your claim is being assessed.".to_string(),
            "We will contact you if we need further documents.",
        ),
        ClaimStatus::Approved => (
            "Approved",
            format!("Your claim has been approved for {}. Reason: {}", approved, reason),
            "Payment of the approved amount will be scheduled.",
        ),
        ClaimStatus::PartiallyApproved => (
            "Partially Approved",
            format!(
                "Your claim has been partially approved for {} of the {} claimed. Reason: {}",
                approved,
                claim.amount(),
                reason
            ),
            "Payment of the approved amount will be scheduled.",
        ),
        ClaimStatus::Rejected => (
            "Rejected",
            format!("Your claim has been rejected. Reason: {}", reason),
            "Contact support if you would like the decision explained.",
        ),
        ClaimStatus::Paid => (
            "Paid",
            format!("{} was paid on {}.", approved, display_date(claim.paid_at())),
            "No further action is needed.",
        ),
    };

    StatusView {
        status: status.code().to_string(),
        label: label.to_string(),
        message,
        next_step_hint: next_step_hint.to_string(),
        amount_breakdown: breakdown(claim),
        payment_status: Some(PaymentStatus::for_status(status)),
    }
}

/// Generic readout for a stored status code that is not a known `ClaimStatus`
///
/// Used by callers whose record store hands back a status the lifecycle
/// does not define.
pub fn describe_unrecognized_status(raw_status: &str, claimed_amount: Decimal) -> StatusView {
    StatusView {
        status: raw_status.to_string(),
        label: "Unknown".to_string(),
        message: format!("Your claim is currently {}.", raw_status),
        next_step_hint: "Contact support for an update on this claim.".to_string(),
        amount_breakdown: AmountBreakdown {
            claimed: claimed_amount,
            eligible: None,
            deductible: None,
            approved: None,
            rejected: None,
        },
        payment_status: None,
    }
}

fn breakdown(claim: &Claim) -> AmountBreakdown {
    let rejected = match claim.status() {
        ClaimStatus::Rejected => Some(claim.amount()),
        ClaimStatus::PartiallyApproved => claim
            .approved_amount()
            .map(|approved| (claim.amount() - approved).max(Decimal::ZERO)),
        _ => None,
    };

    AmountBreakdown {
        claimed: claim.amount(),
        eligible: claim.eligible_amount(),
        deductible: claim.deductible(),
        approved: claim.approved_amount(),
        rejected,
    }
}

fn display_amount(amount: Option<Decimal>) -> String {
    amount.map_or_else(|| "an amount to be confirmed".to_string(), |a| a.to_string())
}

fn display_date(at: Option<DateTime<Utc>>) -> String {
    at.map_or_else(|| "a date to be confirmed".to_string(), |t| t.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::ClaimPayload;
    use chrono::NaiveDate;
    use core_kernel::{CoveragePeriod, PartyId};
    use domain_policy::{Policy, Product, ProductType};
    use rust_decimal_macros::dec;

    fn partially_approved(amount: Decimal, approved: Decimal) -> Claim {
        let product = Product::new("Health Plus", ProductType::Health, dec!(100), vec![]).unwrap();
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let policy = Policy::issue(&product, PartyId::new(), dec!(100), CoveragePeriod::new(start, end).unwrap())
            .unwrap();
        let payload = ClaimPayload {
            claim_type: ProductType::Health,
            amount,
            incident_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            description: "Physiotherapy".to_string(),
            attachments: vec![],
        };
        let mut claim = Claim::submit(&policy, &product, PartyId::new(), payload).unwrap();
        // Stored records may predate the partial approval bound
        claim.status = ClaimStatus::PartiallyApproved;
        claim.approved_amount = Some(approved);
        claim
    }

    #[test]
    fn test_rejected_share_never_negative() {
        let view = describe_status(&partially_approved(dec!(450), dec!(600)));
        assert_eq!(view.amount_breakdown.rejected, Some(Decimal::ZERO));
        assert_eq!(view.amount_breakdown.approved, Some(dec!(600)));
    }

    #[test]
    fn test_rejected_share_is_shortfall() {
        let view = describe_status(&partially_approved(dec!(450), dec!(300)));
        assert_eq!(view.amount_breakdown.rejected, Some(dec!(150)));
    }
}
