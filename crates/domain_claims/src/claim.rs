//! Claim aggregate
//!
//! A claim is created in `Submitted` and afterwards only changes through the
//! transitions in `lifecycle`. Fields are read through accessors so no caller
//! can put a claim into a state the lifecycle would not produce.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{ClaimId, PartyId, PolicyId, ProductId};
use domain_policy::ProductType;

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimStatus {
    /// Received, waiting for an assessor
    Submitted,
    /// Being assessed
    InReview,
    /// Approved in full
    Approved,
    /// Approved for less than the claimed amount
    PartiallyApproved,
    /// Denied
    Rejected,
    /// Approved amount paid out
    Paid,
}

impl ClaimStatus {
    pub const ALL: [ClaimStatus; 6] = [
        ClaimStatus::Submitted,
        ClaimStatus::InReview,
        ClaimStatus::Approved,
        ClaimStatus::PartiallyApproved,
        ClaimStatus::Rejected,
        ClaimStatus::Paid,
    ];

    /// Returns the upper-case code used in stored records
    pub fn code(&self) -> &'static str {
        match self {
            ClaimStatus::Submitted => "SUBMITTED",
            ClaimStatus::InReview => "IN_REVIEW",
            ClaimStatus::Approved => "APPROVED",
            ClaimStatus::PartiallyApproved => "PARTIALLY_APPROVED",
            ClaimStatus::Rejected => "REJECTED",
            ClaimStatus::Paid => "PAID",
        }
    }

    /// Audit action callers log after reaching this status
    pub fn audit_action(&self) -> String {
        format!("CLAIM_{}", self.code())
    }

    /// Statuses an assessor may decide a claim into
    pub fn is_decision(&self) -> bool {
        matches!(
            self,
            ClaimStatus::Approved | ClaimStatus::PartiallyApproved | ClaimStatus::Rejected
        )
    }

    /// Statuses that can be paid out
    pub fn is_payable(&self) -> bool {
        matches!(self, ClaimStatus::Approved | ClaimStatus::PartiallyApproved)
    }

    /// No transition leaves a terminal status
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClaimStatus::Rejected | ClaimStatus::Paid)
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ClaimStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClaimStatus::ALL
            .into_iter()
            .find(|status| status.code() == s)
            .ok_or_else(|| format!("Unknown claim status: {}", s))
    }
}

/// Supporting document metadata; content lives in external file storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub filename: String,
    pub mimetype: String,
    pub size: u64,
}

/// What a claimant submits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimPayload {
    pub claim_type: ProductType,
    pub amount: Decimal,
    pub incident_date: NaiveDate,
    pub description: String,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// A claim against a policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    pub(crate) id: ClaimId,
    pub(crate) claim_number: String,
    pub(crate) policy_id: PolicyId,
    pub(crate) product_id: ProductId,
    pub(crate) claimant_id: PartyId,
    pub(crate) claim_type: ProductType,
    pub(crate) amount: Decimal,
    pub(crate) incident_date: NaiveDate,
    pub(crate) description: String,
    pub(crate) attachments: Vec<Attachment>,
    pub(crate) status: ClaimStatus,
    pub(crate) eligible_amount: Option<Decimal>,
    pub(crate) deductible: Option<Decimal>,
    pub(crate) approved_amount: Option<Decimal>,
    pub(crate) decision_reason: Option<String>,
    pub(crate) assessed_at: Option<DateTime<Utc>>,
    pub(crate) assessed_by: Option<PartyId>,
    pub(crate) paid_at: Option<DateTime<Utc>>,
    /// Incremented by every transition, starting at 1
    pub(crate) version: u64,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl Claim {
    pub fn id(&self) -> ClaimId {
        self.id
    }

    pub fn claim_number(&self) -> &str {
        &self.claim_number
    }

    pub fn policy_id(&self) -> PolicyId {
        self.policy_id
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn claimant_id(&self) -> PartyId {
        self.claimant_id
    }

    pub fn claim_type(&self) -> ProductType {
        self.claim_type
    }

    /// Claimed amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn incident_date(&self) -> NaiveDate {
        self.incident_date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    pub fn status(&self) -> ClaimStatus {
        self.status
    }

    pub fn eligible_amount(&self) -> Option<Decimal> {
        self.eligible_amount
    }

    pub fn deductible(&self) -> Option<Decimal> {
        self.deductible
    }

    pub fn approved_amount(&self) -> Option<Decimal> {
        self.approved_amount
    }

    pub fn decision_reason(&self) -> Option<&str> {
        self.decision_reason.as_deref()
    }

    pub fn assessed_at(&self) -> Option<DateTime<Utc>> {
        self.assessed_at
    }

    pub fn assessed_by(&self) -> Option<PartyId> {
        self.assessed_by
    }

    pub fn paid_at(&self) -> Option<DateTime<Utc>> {
        self.paid_at
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

pub(crate) fn generate_claim_number(id: ClaimId) -> String {
    let simple = id.as_uuid().simple().to_string();
    let suffix = &simple[simple.len() - 10..];
    format!("CLM-{}-{}", Utc::now().format("%Y%m%d"), suffix.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_round_trip() {
        for status in ClaimStatus::ALL {
            assert_eq!(status.code().parse::<ClaimStatus>(), Ok(status));
        }
        assert!("CLOSED".parse::<ClaimStatus>().is_err());
    }

    #[test]
    fn test_audit_action_names() {
        assert_eq!(ClaimStatus::InReview.audit_action(), "CLAIM_IN_REVIEW");
        assert_eq!(ClaimStatus::PartiallyApproved.audit_action(), "CLAIM_PARTIALLY_APPROVED");
    }

    #[test]
    fn test_status_serializes_as_code() {
        let json = serde_json::to_string(&ClaimStatus::PartiallyApproved).unwrap();
        assert_eq!(json, "\"PARTIALLY_APPROVED\"");
    }
}
