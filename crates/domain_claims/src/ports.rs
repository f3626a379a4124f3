//! Record-store port for claims

use async_trait::async_trait;

use core_kernel::{ClaimId, DomainPort, PolicyId, PortError};
use crate::claim::Claim;

/// Storage for claims
///
/// Claims are never deleted.
#[async_trait]
pub trait ClaimPort: DomainPort {
    /// Loads a claim by id
    async fn get_claim(&self, id: ClaimId) -> Result<Claim, PortError>;

    /// Persists a claim atomically
    ///
    /// `expected_version` is the version the transition was applied to, or
    /// `None` for a newly submitted claim. A mismatch fails with
    /// `PortError::Conflict`, so of two concurrent decisions only one lands.
    async fn save_claim(&self, claim: &Claim, expected_version: Option<u64>) -> Result<(), PortError>;

    /// Claims filed against a policy, oldest first
    async fn claims_for_policy(&self, policy_id: PolicyId) -> Result<Vec<Claim>, PortError>;
}
