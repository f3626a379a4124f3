//! Quotes
//!
//! A quote is a priced request for cover. The premium is rated once when the
//! quote is requested and never recomputed, even if the product is repriced
//! later.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{PartyId, ProductId, QuoteId};
use crate::error::PolicyError;
use crate::product::{Product, ProductType};
use crate::rating::{rate_premium, ApplicantMetadata, PremiumAdjustment};

/// Quote status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuoteStatus {
    /// Awaiting a staff decision
    Pending,
    /// Accepted; a policy may be issued from it
    Approved,
    /// Declined
    Rejected,
}

impl fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            QuoteStatus::Pending => "PENDING",
            QuoteStatus::Approved => "APPROVED",
            QuoteStatus::Rejected => "REJECTED",
        };
        f.write_str(code)
    }
}

/// A priced request for coverage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub id: QuoteId,
    pub product_id: ProductId,
    pub product_type: ProductType,
    pub requester_id: PartyId,
    pub metadata: ApplicantMetadata,
    /// Premium fixed at request time
    pub premium: Decimal,
    /// Rating steps that produced `premium`
    pub adjustments: Vec<PremiumAdjustment>,
    pub status: QuoteStatus,
    pub rejection_reason: Option<String>,
    /// Incremented on every change, starting at 1
    pub version: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Quote {
    /// Creates a pending quote rated against `product`
    pub fn request(product: &Product, requester_id: PartyId, metadata: ApplicantMetadata) -> Self {
        let breakdown = rate_premium(product.base_premium(), &metadata);
        let now = Utc::now();

        Self {
            id: QuoteId::new_v7(),
            product_id: product.id(),
            product_type: product.product_type(),
            requester_id,
            metadata,
            premium: breakdown.premium,
            adjustments: breakdown.adjustments,
            status: QuoteStatus::Pending,
            rejection_reason: None,
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    /// Approves a pending quote
    pub fn approve(&mut self) -> Result<(), PolicyError> {
        self.ensure_pending(QuoteStatus::Approved)?;
        self.status = QuoteStatus::Approved;
        self.touch();
        Ok(())
    }

    /// Rejects a pending quote with a non-blank reason
    pub fn reject(&mut self, reason: &str) -> Result<(), PolicyError> {
        self.ensure_pending(QuoteStatus::Rejected)?;
        if reason.trim().is_empty() {
            return Err(PolicyError::MissingRequiredField("rejection_reason".to_string()));
        }
        self.status = QuoteStatus::Rejected;
        self.rejection_reason = Some(reason.trim().to_string());
        self.touch();
        Ok(())
    }

    pub fn is_approved(&self) -> bool {
        self.status == QuoteStatus::Approved
    }

    fn ensure_pending(&self, target: QuoteStatus) -> Result<(), PolicyError> {
        if self.status != QuoteStatus::Pending {
            return Err(PolicyError::transition(self.status, target));
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.version += 1;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn travel_product() -> Product {
        Product::new("Travel Lite", ProductType::Travel, dec!(40), vec![]).unwrap()
    }

    #[test]
    fn test_quote_is_rated_at_request() {
        let metadata = json!({ "tripDuration": 10 }).as_object().cloned().unwrap();
        let quote = Quote::request(&travel_product(), PartyId::new(), metadata);

        assert_eq!(quote.premium, dec!(60.00));
        assert_eq!(quote.status, QuoteStatus::Pending);
        assert_eq!(quote.version, 1);
    }

    #[test]
    fn test_decided_quote_cannot_be_decided_again() {
        let mut quote = Quote::request(&travel_product(), PartyId::new(), ApplicantMetadata::new());
        quote.approve().unwrap();

        assert_eq!(quote.version, 2);
        assert!(matches!(
            quote.reject("changed mind"),
            Err(PolicyError::InvalidStateTransition { .. })
        ));
    }
}
