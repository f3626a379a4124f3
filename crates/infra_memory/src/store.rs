//! Shared table storage

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use core_kernel::{ClaimId, DomainPort, PolicyId, PortError, ProductId, QuoteId};
use domain_claims::Claim;
use domain_policy::{Policy, Product, Quote};

#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub(crate) products: RwLock<HashMap<ProductId, Product>>,
    pub(crate) quotes: RwLock<HashMap<QuoteId, Quote>>,
    pub(crate) policies: RwLock<HashMap<PolicyId, Policy>>,
    pub(crate) claims: RwLock<HashMap<ClaimId, Claim>>,
}

/// Record store backed by process memory
///
/// Cloning is cheap and every clone shares the same tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    pub(crate) tables: Arc<Tables>,
}

impl InMemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl DomainPort for InMemoryStore {}

/// Checks a versioned write against the stored record
///
/// `None` means the caller is inserting, which fails if the record exists.
pub(crate) fn check_version(
    entity_type: &str,
    id: impl std::fmt::Display,
    stored: Option<u64>,
    expected: Option<u64>,
) -> Result<(), PortError> {
    match (stored, expected) {
        (None, None) => Ok(()),
        (Some(_), None) => Err(PortError::Conflict {
            message: format!("{} {} already exists", entity_type, id),
        }),
        (None, Some(_)) => Err(PortError::not_found(entity_type, id)),
        (Some(actual), Some(expected)) if actual == expected => Ok(()),
        (Some(actual), Some(expected)) => {
            Err(PortError::stale_version(entity_type, id, expected, actual))
        }
    }
}
