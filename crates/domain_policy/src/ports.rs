//! Record-store ports for the policy domain
//!
//! Persistence is owned by the caller. Adapters implement these traits; the
//! services in `claims_service` only ever talk to them.

use async_trait::async_trait;

use core_kernel::{DomainPort, PolicyId, PortError, ProductId, QuoteId};
use crate::policy::Policy;
use crate::product::Product;
use crate::quote::Quote;

/// Storage for the product catalogue
#[async_trait]
pub trait ProductPort: DomainPort {
    /// Loads a product by id
    async fn get_product(&self, id: ProductId) -> Result<Product, PortError>;

    /// Inserts or replaces a product
    async fn save_product(&self, product: &Product) -> Result<(), PortError>;
}

/// Storage for issued policies
#[async_trait]
pub trait PolicyPort: DomainPort {
    /// Loads a policy by id
    async fn get_policy(&self, id: PolicyId) -> Result<Policy, PortError>;

    /// Loads a policy by its externally visible policy number
    async fn get_policy_by_number(&self, policy_number: &str) -> Result<Policy, PortError>;

    /// Inserts or replaces a policy
    ///
    /// Fails with `PortError::Conflict` if another policy already uses the
    /// same policy number.
    async fn save_policy(&self, policy: &Policy) -> Result<(), PortError>;
}

/// Storage for quotes
#[async_trait]
pub trait QuotePort: DomainPort {
    /// Loads a quote by id
    async fn get_quote(&self, id: QuoteId) -> Result<Quote, PortError>;

    /// Persists a quote
    ///
    /// `expected_version` is the version the change was based on, or `None`
    /// for a new quote. A mismatch fails with `PortError::Conflict`.
    async fn save_quote(&self, quote: &Quote, expected_version: Option<u64>) -> Result<(), PortError>;
}
