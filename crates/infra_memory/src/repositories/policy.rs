//! Product, quote and policy tables

use async_trait::async_trait;
use tracing::debug;

use core_kernel::{PolicyId, PortError, ProductId, QuoteId};
use domain_policy::{Policy, PolicyPort, Product, ProductPort, Quote, QuotePort};

use crate::store::{check_version, InMemoryStore};

#[async_trait]
impl ProductPort for InMemoryStore {
    async fn get_product(&self, id: ProductId) -> Result<Product, PortError> {
        self.tables
            .products
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Product", id))
    }

    async fn save_product(&self, product: &Product) -> Result<(), PortError> {
        debug!(product_id = %product.id(), "Saving product");
        self.tables
            .products
            .write()
            .await
            .insert(product.id(), product.clone());
        Ok(())
    }
}

#[async_trait]
impl QuotePort for InMemoryStore {
    async fn get_quote(&self, id: QuoteId) -> Result<Quote, PortError> {
        self.tables
            .quotes
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Quote", id))
    }

    async fn save_quote(&self, quote: &Quote, expected_version: Option<u64>) -> Result<(), PortError> {
        let mut quotes = self.tables.quotes.write().await;
        let stored = quotes.get(&quote.id).map(|q| q.version);
        check_version("Quote", quote.id, stored, expected_version)?;

        debug!(quote_id = %quote.id, version = quote.version, "Saving quote");
        quotes.insert(quote.id, quote.clone());
        Ok(())
    }
}

#[async_trait]
impl PolicyPort for InMemoryStore {
    async fn get_policy(&self, id: PolicyId) -> Result<Policy, PortError> {
        self.tables
            .policies
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Policy", id))
    }

    async fn get_policy_by_number(&self, policy_number: &str) -> Result<Policy, PortError> {
        self.tables
            .policies
            .read()
            .await
            .values()
            .find(|p| p.policy_number() == policy_number)
            .cloned()
            .ok_or_else(|| PortError::not_found("Policy", policy_number))
    }

    async fn save_policy(&self, policy: &Policy) -> Result<(), PortError> {
        let mut policies = self.tables.policies.write().await;
        let duplicate = policies
            .values()
            .any(|p| p.id() != policy.id() && p.policy_number() == policy.policy_number());
        if duplicate {
            return Err(PortError::Conflict {
                message: format!("Policy number {} is already in use", policy.policy_number()),
            });
        }

        debug!(policy_id = %policy.id(), policy_number = %policy.policy_number(), "Saving policy");
        policies.insert(policy.id(), policy.clone());
        Ok(())
    }
}
