//! Quote and claim application services
//!
//! Every mutating call follows the same shape: load, apply one domain
//! operation, save with the version that was loaded, then log the audit
//! action. Failures before the save leave the store untouched, and nothing
//! is logged to the audit target unless the save succeeded.

use std::sync::Arc;
use tracing::info;

use core_kernel::{ClaimId, CoveragePeriod, PartyId, PolicyId, ProductId, QuoteId};
use domain_claims::{
    coverage_info, describe_status, Claim, ClaimPayload, ClaimPort, ClaimStatus, CoverageInfo,
    Decision, StatusView,
};
use domain_policy::{
    ApplicantMetadata, PlanTable, Policy, PolicyPort, ProductPort, Quote, QuotePort,
};

use crate::error::ServiceError;

/// Tracing target for audit lines
pub const AUDIT_TARGET: &str = "audit";

/// Issues quotes and turns approved quotes into policies
#[derive(Clone)]
pub struct QuoteService {
    products: Arc<dyn ProductPort>,
    quotes: Arc<dyn QuotePort>,
    policies: Arc<dyn PolicyPort>,
}

impl QuoteService {
    pub fn new(
        products: Arc<dyn ProductPort>,
        quotes: Arc<dyn QuotePort>,
        policies: Arc<dyn PolicyPort>,
    ) -> Self {
        Self { products, quotes, policies }
    }

    /// Rates and stores a pending quote
    pub async fn request_quote(
        &self,
        product_id: ProductId,
        requester_id: PartyId,
        metadata: ApplicantMetadata,
    ) -> Result<Quote, ServiceError> {
        let product = self.products.get_product(product_id).await?;
        let quote = Quote::request(&product, requester_id, metadata);
        self.quotes.save_quote(&quote, None).await?;

        info!(
            target: AUDIT_TARGET,
            action = "QUOTE_REQUESTED",
            quote_id = %quote.id,
            product_id = %product_id,
            actor = %requester_id,
            premium = %quote.premium,
            "Quote requested"
        );
        Ok(quote)
    }

    /// Approves a pending quote and issues its policy
    ///
    /// The policy is built before anything is saved, so a quote that cannot
    /// be issued (bad period, product mismatch) stays pending.
    pub async fn approve_and_issue(
        &self,
        quote_id: QuoteId,
        period: CoveragePeriod,
    ) -> Result<Policy, ServiceError> {
        let mut quote = self.quotes.get_quote(quote_id).await?;
        let product = self.products.get_product(quote.product_id).await?;
        let loaded_version = quote.version;

        quote.approve()?;
        let policy = Policy::issue_from_quote(&quote, &product, period)?;

        self.quotes.save_quote(&quote, Some(loaded_version)).await?;
        info!(target: AUDIT_TARGET, action = "QUOTE_APPROVED", quote_id = %quote.id, "Quote approved");

        self.policies.save_policy(&policy).await?;
        info!(
            target: AUDIT_TARGET,
            action = "POLICY_ISSUED",
            policy_id = %policy.id(),
            policy_number = %policy.policy_number(),
            quote_id = %quote.id,
            premium = %policy.premium(),
            "Policy issued"
        );
        Ok(policy)
    }

    /// Rejects a pending quote
    pub async fn reject_quote(&self, quote_id: QuoteId, reason: &str) -> Result<Quote, ServiceError> {
        let mut quote = self.quotes.get_quote(quote_id).await?;
        let loaded_version = quote.version;

        quote.reject(reason)?;
        self.quotes.save_quote(&quote, Some(loaded_version)).await?;

        info!(
            target: AUDIT_TARGET,
            action = "QUOTE_REJECTED",
            quote_id = %quote.id,
            reason = %reason.trim(),
            "Quote rejected"
        );
        Ok(quote)
    }
}

/// A stored claim plus the advisory plan ceiling for it
#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    pub claim: Claim,
    /// `None` when no plan tier matches the policy
    pub coverage_info: Option<CoverageInfo>,
}

/// Runs claims through submission, review, decision and payment
#[derive(Clone)]
pub struct ClaimService {
    products: Arc<dyn ProductPort>,
    policies: Arc<dyn PolicyPort>,
    claims: Arc<dyn ClaimPort>,
    plans: Arc<PlanTable>,
}

impl ClaimService {
    pub fn new(
        products: Arc<dyn ProductPort>,
        policies: Arc<dyn PolicyPort>,
        claims: Arc<dyn ClaimPort>,
        plans: Arc<PlanTable>,
    ) -> Self {
        Self { products, policies, claims, plans }
    }

    /// Validates and stores a new claim against `policy_id`
    ///
    /// # Errors
    ///
    /// A validation failure carries every validator message. The claim is
    /// not stored in that case.
    pub async fn submit_claim(
        &self,
        policy_id: PolicyId,
        claimant_id: PartyId,
        payload: ClaimPayload,
    ) -> Result<SubmissionReceipt, ServiceError> {
        let policy = self.policies.get_policy(policy_id).await?;
        let product = self.products.get_product(policy.product_id()).await?;

        let claim_type = payload.claim_type;
        let claim = Claim::submit(&policy, &product, claimant_id, payload)?;
        self.claims.save_claim(&claim, None).await?;

        let coverage_info = coverage_info(&self.plans, &policy, &product, claim_type, claim.amount());

        info!(
            target: AUDIT_TARGET,
            action = %ClaimStatus::Submitted.audit_action(),
            claim_id = %claim.id(),
            claim_number = %claim.claim_number(),
            policy_id = %policy_id,
            actor = %claimant_id,
            amount = %claim.amount(),
            "Claim submitted"
        );
        Ok(SubmissionReceipt { claim, coverage_info })
    }

    /// Moves a submitted claim into review
    pub async fn start_review(&self, claim_id: ClaimId, actor_id: PartyId) -> Result<Claim, ServiceError> {
        self.transition(claim_id, actor_id, Claim::assess).await
    }

    /// Records an assessor's decision
    pub async fn decide(
        &self,
        claim_id: ClaimId,
        decision: Decision,
        assessor_id: PartyId,
    ) -> Result<Claim, ServiceError> {
        self.transition(claim_id, assessor_id, move |claim| claim.decide(decision, assessor_id))
            .await
    }

    /// Marks an approved claim as paid
    pub async fn pay(&self, claim_id: ClaimId, actor_id: PartyId) -> Result<Claim, ServiceError> {
        self.transition(claim_id, actor_id, Claim::pay).await
    }

    /// Customer-facing status of a claim
    pub async fn describe(&self, claim_id: ClaimId) -> Result<StatusView, ServiceError> {
        let claim = self.claims.get_claim(claim_id).await?;
        Ok(describe_status(&claim))
    }

    /// Claims filed against a policy, oldest first
    pub async fn claims_for_policy(&self, policy_id: PolicyId) -> Result<Vec<Claim>, ServiceError> {
        // Surface an unknown policy as not found rather than an empty list
        self.policies.get_policy(policy_id).await?;
        Ok(self.claims.claims_for_policy(policy_id).await?)
    }

    async fn transition<F>(&self, claim_id: ClaimId, actor_id: PartyId, apply: F) -> Result<Claim, ServiceError>
    where
        F: FnOnce(&mut Claim) -> Result<(), domain_claims::ClaimError>,
    {
        let mut claim = self.claims.get_claim(claim_id).await?;
        let loaded_version = claim.version();

        apply(&mut claim)?;
        self.claims.save_claim(&claim, Some(loaded_version)).await?;

        info!(
            target: AUDIT_TARGET,
            action = %claim.status().audit_action(),
            claim_id = %claim.id(),
            actor = %actor_id,
            version = claim.version(),
            approved = ?claim.approved_amount(),
            "Claim transitioned"
        );
        Ok(claim)
    }
}
