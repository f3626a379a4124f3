//! Test Data Builders
//!
//! Builders with sensible defaults so tests only spell out the fields they
//! care about.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{CoveragePeriod, PartyId};
use domain_claims::{Attachment, ClaimPayload};
use domain_policy::{Policy, PolicyStatus, Product, ProductType};

use crate::fixtures::DateFixtures;

/// Builder for catalogue products
pub struct TestProductBuilder {
    name: String,
    product_type: ProductType,
    base_premium: Decimal,
    exclusions: Vec<String>,
}

impl Default for TestProductBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProductBuilder {
    /// Health product with base premium 100 and no exclusions
    pub fn new() -> Self {
        Self {
            name: "Test Health".to_string(),
            product_type: ProductType::Health,
            base_premium: dec!(100),
            exclusions: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_product_type(mut self, product_type: ProductType) -> Self {
        self.product_type = product_type;
        self
    }

    pub fn with_base_premium(mut self, base_premium: Decimal) -> Self {
        self.base_premium = base_premium;
        self
    }

    /// Adds an exclusion phrase
    pub fn with_exclusion(mut self, phrase: impl Into<String>) -> Self {
        self.exclusions.push(phrase.into());
        self
    }

    pub fn build(self) -> Product {
        Product::new(self.name, self.product_type, self.base_premium, self.exclusions).unwrap()
    }
}

/// Builder for issued policies
pub struct TestPolicyBuilder {
    policyholder_id: PartyId,
    premium: Decimal,
    period: CoveragePeriod,
    status: PolicyStatus,
    premium_paid: bool,
}

impl Default for TestPolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPolicyBuilder {
    /// Active 2024 policy with premium 100
    pub fn new() -> Self {
        Self {
            policyholder_id: PartyId::new(),
            premium: dec!(100),
            period: DateFixtures::policy_year(),
            status: PolicyStatus::Active,
            premium_paid: false,
        }
    }

    pub fn with_policyholder_id(mut self, id: PartyId) -> Self {
        self.policyholder_id = id;
        self
    }

    pub fn with_premium(mut self, premium: Decimal) -> Self {
        self.premium = premium;
        self
    }

    /// Sets the coverage period; panics if `end` is not after `start`
    pub fn with_period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.period = CoveragePeriod::new(start, end).unwrap();
        self
    }

    /// Status reached through a legal transition from Active
    pub fn with_status(mut self, status: PolicyStatus) -> Self {
        self.status = status;
        self
    }

    pub fn premium_paid(mut self) -> Self {
        self.premium_paid = true;
        self
    }

    /// Issues the policy on `product`
    pub fn build(self, product: &Product) -> Policy {
        let mut policy =
            Policy::issue(product, self.policyholder_id, self.premium, self.period).unwrap();
        if self.status != PolicyStatus::Active {
            policy.update_status(self.status).unwrap();
        }
        if self.premium_paid {
            policy.mark_premium_paid();
        }
        policy
    }
}

/// Builder for claim payloads
pub struct ClaimPayloadBuilder {
    claim_type: ProductType,
    amount: Decimal,
    incident_date: NaiveDate,
    description: String,
    attachments: Vec<Attachment>,
}

impl Default for ClaimPayloadBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimPayloadBuilder {
    /// Health claim for 250 on mid-year 2024
    pub fn new() -> Self {
        Self {
            claim_type: ProductType::Health,
            amount: dec!(250),
            incident_date: DateFixtures::mid_year(),
            description: "Emergency room visit".to_string(),
            attachments: Vec::new(),
        }
    }

    /// Claim matching the product's type
    pub fn for_product(product: &Product) -> Self {
        Self::new().with_claim_type(product.product_type())
    }

    pub fn with_claim_type(mut self, claim_type: ProductType) -> Self {
        self.claim_type = claim_type;
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_incident_date(mut self, date: NaiveDate) -> Self {
        self.incident_date = date;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attaches a PDF of the given size
    pub fn with_attachment(mut self, filename: impl Into<String>, size: u64) -> Self {
        self.attachments.push(Attachment {
            filename: filename.into(),
            mimetype: "application/pdf".to_string(),
            size,
        });
        self
    }

    pub fn build(self) -> ClaimPayload {
        ClaimPayload {
            claim_type: self.claim_type,
            amount: self.amount,
            incident_date: self.incident_date,
            description: self.description,
            attachments: self.attachments,
        }
    }
}
