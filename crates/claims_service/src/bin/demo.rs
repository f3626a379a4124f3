//! Claims Core - Walkthrough Binary
//!
//! Runs one quote and one claim through the services against the in-memory
//! store and prints the final customer-facing status as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin claims-demo
//!
//! # With audit lines as JSON
//! CLAIMS_JSON_LOGS=true RUST_LOG=info cargo run --bin claims-demo
//! ```
//!
//! # Environment Variables
//!
//! * `CLAIMS_LOG_LEVEL` - Log level when `RUST_LOG` is unset (default: info)
//! * `CLAIMS_JSON_LOGS` - Emit JSON log lines (default: false)
//! * `CLAIMS_PLAN_TABLE_PATH` - Plan tier table in TOML (default: built-in table)

use std::sync::Arc;

use chrono::{Duration, Utc};
use rust_decimal_macros::dec;
use serde_json::json;

use claims_service::{init_tracing, ClaimService, QuoteService, ServiceConfig};
use core_kernel::{CoveragePeriod, PartyId};
use domain_claims::{ClaimPayload, Decision};
use domain_policy::{Product, ProductPort, ProductType};
use infra_memory::InMemoryStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServiceConfig::from_env()?;
    init_tracing(&config);
    let plans = Arc::new(config.load_plan_table()?);

    let store = Arc::new(InMemoryStore::new());
    let quotes = QuoteService::new(store.clone(), store.clone(), store.clone());
    let claims = ClaimService::new(store.clone(), store.clone(), store.clone(), plans);

    let product = Product::new(
        "Motor Comprehensive",
        ProductType::Motor,
        dec!(400),
        vec!["racing".to_string()],
    )?;
    store.save_product(&product).await?;

    let driver = PartyId::new();
    let assessor = PartyId::new();
    let metadata = json!({ "age": 55, "vehicleValue": 30000 });
    let metadata = metadata.as_object().cloned().unwrap_or_default();

    let quote = quotes.request_quote(product.id(), driver, metadata).await?;
    let today = Utc::now().date_naive();
    let period = CoveragePeriod::for_days(today - Duration::days(30), 365)?;
    let policy = quotes.approve_and_issue(quote.id, period).await?;

    let receipt = claims
        .submit_claim(
            policy.id(),
            driver,
            ClaimPayload {
                claim_type: ProductType::Motor,
                amount: dec!(1800),
                incident_date: today - Duration::days(3),
                description: "Side-swiped while parked".to_string(),
                attachments: vec![],
            },
        )
        .await?;

    let claim_id = receipt.claim.id();
    claims.start_review(claim_id, assessor).await?;
    claims
        .decide(claim_id, Decision::approve("Repair estimate verified", dec!(1800), dec!(250)), assessor)
        .await?;
    claims.pay(claim_id, assessor).await?;

    let view = claims.describe(claim_id).await?;
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "policy_number": policy.policy_number(),
            "premium": policy.premium(),
            "coverage": receipt.coverage_info,
            "status": view,
        }))?
    );
    Ok(())
}
