//! Claim table

use async_trait::async_trait;
use tracing::debug;

use core_kernel::{ClaimId, PolicyId, PortError};
use domain_claims::{Claim, ClaimPort};

use crate::store::{check_version, InMemoryStore};

#[async_trait]
impl ClaimPort for InMemoryStore {
    async fn get_claim(&self, id: ClaimId) -> Result<Claim, PortError> {
        self.tables
            .claims
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Claim", id))
    }

    async fn save_claim(&self, claim: &Claim, expected_version: Option<u64>) -> Result<(), PortError> {
        let mut claims = self.tables.claims.write().await;
        let stored = claims.get(&claim.id()).map(Claim::version);
        check_version("Claim", claim.id(), stored, expected_version)?;

        debug!(
            claim_id = %claim.id(),
            status = %claim.status(),
            version = claim.version(),
            "Saving claim"
        );
        claims.insert(claim.id(), claim.clone());
        Ok(())
    }

    async fn claims_for_policy(&self, policy_id: PolicyId) -> Result<Vec<Claim>, PortError> {
        let mut found: Vec<Claim> = self
            .tables
            .claims
            .read()
            .await
            .values()
            .filter(|c| c.policy_id() == policy_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().as_uuid().cmp(b.id().as_uuid()))
        });
        Ok(found)
    }
}
