//! Tests for the in-memory record store
//!
//! # Test Organization
//!
//! - `product_tests` - catalogue reads and writes
//! - `quote_tests` - versioned quote writes
//! - `policy_tests` - lookups and policy number uniqueness
//! - `claim_tests` - versioned claim writes and per-policy listing

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::{ClaimId, CoveragePeriod, PartyId, PolicyId};
use domain_claims::{Claim, ClaimPayload, ClaimPort, Decision};
use domain_policy::{
    Policy, PolicyPort, Product, ProductPort, ProductType, Quote, QuotePort,
};
use infra_memory::InMemoryStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn motor_product() -> Product {
    Product::new("Motor Comprehensive", ProductType::Motor, dec!(400), vec!["racing".to_string()])
        .unwrap()
}

fn motor_policy(product: &Product) -> Policy {
    let period = CoveragePeriod::new(date(2024, 1, 1), date(2024, 12, 31)).unwrap();
    Policy::issue(product, PartyId::new(), dec!(400), period).unwrap()
}

fn motor_claim(policy: &Policy, product: &Product, amount: rust_decimal::Decimal) -> Claim {
    let payload = ClaimPayload {
        claim_type: ProductType::Motor,
        amount,
        incident_date: date(2024, 3, 10),
        description: "Rear-ended at a junction".to_string(),
        attachments: vec![],
    };
    Claim::submit(policy, product, PartyId::new(), payload).unwrap()
}

// ============================================================================
// Product Tests
// ============================================================================

mod product_tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_get_product() {
        let store = InMemoryStore::new();
        let product = motor_product();
        store.save_product(&product).await.unwrap();

        let loaded = store.get_product(product.id()).await.unwrap();
        assert_eq!(loaded.name, "Motor Comprehensive");
        assert_eq!(loaded.base_premium(), dec!(400));
    }

    #[tokio::test]
    async fn test_missing_product_is_not_found() {
        let store = InMemoryStore::new();
        let err = store.get_product(motor_product().id()).await.unwrap_err();
        assert!(err.is_not_found());
    }
}

// ============================================================================
// Quote Tests
// ============================================================================

mod quote_tests {
    use super::*;

    #[tokio::test]
    async fn test_versioned_quote_update() {
        let store = InMemoryStore::new();
        let mut quote = Quote::request(&motor_product(), PartyId::new(), Default::default());
        store.save_quote(&quote, None).await.unwrap();

        let expected = quote.version;
        quote.approve().unwrap();
        store.save_quote(&quote, Some(expected)).await.unwrap();

        let loaded = store.get_quote(quote.id).await.unwrap();
        assert!(loaded.is_approved());
        assert_eq!(loaded.version, 2);
    }

    #[tokio::test]
    async fn test_stale_quote_write_conflicts() {
        let store = InMemoryStore::new();
        let quote = Quote::request(&motor_product(), PartyId::new(), Default::default());
        store.save_quote(&quote, None).await.unwrap();

        let mut approved = quote.clone();
        approved.approve().unwrap();
        store.save_quote(&approved, Some(1)).await.unwrap();

        let mut rejected = quote.clone();
        rejected.reject("Too risky").unwrap();
        let err = store.save_quote(&rejected, Some(1)).await.unwrap_err();
        assert!(err.is_conflict());

        assert!(store.get_quote(quote.id).await.unwrap().is_approved());
    }

    #[tokio::test]
    async fn test_double_insert_conflicts() {
        let store = InMemoryStore::new();
        let quote = Quote::request(&motor_product(), PartyId::new(), Default::default());
        store.save_quote(&quote, None).await.unwrap();
        assert!(store.save_quote(&quote, None).await.unwrap_err().is_conflict());
    }
}

// ============================================================================
// Policy Tests
// ============================================================================

mod policy_tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_by_number() {
        let store = InMemoryStore::new();
        let policy = motor_policy(&motor_product());
        store.save_policy(&policy).await.unwrap();

        let loaded = store.get_policy_by_number(policy.policy_number()).await.unwrap();
        assert_eq!(loaded.id(), policy.id());

        let err = store.get_policy_by_number("POL-00000000-NOPE").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_resaving_same_policy_is_allowed() {
        let store = InMemoryStore::new();
        let mut policy = motor_policy(&motor_product());
        store.save_policy(&policy).await.unwrap();

        policy.mark_premium_paid();
        store.save_policy(&policy).await.unwrap();
        assert!(store.get_policy(policy.id()).await.unwrap().premium_paid());
    }

    #[tokio::test]
    async fn test_duplicate_policy_number_conflicts() {
        let store = InMemoryStore::new();
        let policy = motor_policy(&motor_product());
        store.save_policy(&policy).await.unwrap();

        // Same number under a different id
        let mut json = serde_json::to_value(&policy).unwrap();
        json["id"] = serde_json::to_value(PolicyId::new()).unwrap();
        let imposter: Policy = serde_json::from_value(json).unwrap();

        let err = store.save_policy(&imposter).await.unwrap_err();
        assert!(err.is_conflict());
    }
}

// ============================================================================
// Claim Tests
// ============================================================================

mod claim_tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_reload_claim() {
        let store = InMemoryStore::new();
        let product = motor_product();
        let policy = motor_policy(&product);
        let claim = motor_claim(&policy, &product, dec!(1200));
        store.save_claim(&claim, None).await.unwrap();

        let loaded = store.get_claim(claim.id()).await.unwrap();
        assert_eq!(loaded.claim_number(), claim.claim_number());
        assert_eq!(loaded.amount(), dec!(1200));
    }

    #[tokio::test]
    async fn test_missing_claim_is_not_found() {
        let store = InMemoryStore::new();
        assert!(store.get_claim(ClaimId::new()).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_update_of_unsaved_claim_is_not_found() {
        let store = InMemoryStore::new();
        let product = motor_product();
        let policy = motor_policy(&product);
        let mut claim = motor_claim(&policy, &product, dec!(100));
        claim.assess().unwrap();

        let err = store.save_claim(&claim, Some(1)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_concurrent_decisions_only_one_lands() {
        let store = Arc::new(InMemoryStore::new());
        let product = motor_product();
        let policy = motor_policy(&product);
        let mut claim = motor_claim(&policy, &product, dec!(900));
        store.save_claim(&claim, None).await.unwrap();
        claim.assess().unwrap();
        store.save_claim(&claim, Some(1)).await.unwrap();

        let base_version = claim.version();
        let mut approve = claim.clone();
        approve
            .decide(Decision::approve("Covered", dec!(900), dec!(100)), PartyId::new())
            .unwrap();
        let mut reject = claim.clone();
        reject.decide(Decision::reject("Racing"), PartyId::new()).unwrap();

        let (a, b) = tokio::join!(
            {
                let store = Arc::clone(&store);
                async move { store.save_claim(&approve, Some(base_version)).await }
            },
            {
                let store = Arc::clone(&store);
                async move { store.save_claim(&reject, Some(base_version)).await }
            }
        );

        assert!(a.is_ok() ^ b.is_ok());
        let failed = if a.is_ok() { b } else { a };
        assert!(failed.unwrap_err().is_conflict());

        let stored = store.get_claim(claim.id()).await.unwrap();
        assert_eq!(stored.version(), base_version + 1);
        assert!(stored.status().is_decision());
    }

    #[tokio::test]
    async fn test_claims_for_policy_oldest_first() {
        let store = InMemoryStore::new();
        let product = motor_product();
        let policy = motor_policy(&product);
        let other = motor_policy(&product);

        let first = motor_claim(&policy, &product, dec!(100));
        let second = motor_claim(&policy, &product, dec!(200));
        let unrelated = motor_claim(&other, &product, dec!(300));
        store.save_claim(&second, None).await.unwrap();
        store.save_claim(&unrelated, None).await.unwrap();
        store.save_claim(&first, None).await.unwrap();

        let claims = store.claims_for_policy(policy.id()).await.unwrap();
        let amounts: Vec<_> = claims.iter().map(|c| c.amount()).collect();
        assert_eq!(amounts, vec![dec!(100), dec!(200)]);
    }
}
