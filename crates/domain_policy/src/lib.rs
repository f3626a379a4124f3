//! Product and Policy Domain
//!
//! This crate holds the catalogue and contract side of the brokerage:
//! - **Products**: insurance offerings with a base premium and exclusion phrases
//! - **Quotes**: priced requests for cover, rated once at creation
//! - **Policies**: issued contracts pinning a product, a premium and a coverage period
//! - **Rating**: the premium rating engine applied to applicant metadata
//! - **Plans**: the configurable tier table mapping premiums to named coverage ceilings
//!
//! # Quote to Policy
//!
//! ```text
//! Quote: Pending -> Approved -> (issue) -> Policy: Active -> Lapsed / Cancelled / Renewed
//!               \-> Rejected
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_policy::{Product, ProductType, Quote, Policy};
//!
//! let product = Product::new("Motor Comprehensive", ProductType::Motor, dec!(400), vec![])?;
//! let mut quote = Quote::request(&product, requester, metadata);
//! quote.approve()?;
//! let policy = Policy::issue_from_quote(&quote, &product, period)?;
//! ```

pub mod product;
pub mod quote;
pub mod policy;
pub mod rating;
pub mod plan;
pub mod ports;
pub mod error;

pub use product::{Product, ProductType};
pub use quote::{Quote, QuoteStatus};
pub use policy::{Policy, PolicyStatus};
pub use rating::{compute_premium, rate_premium, ApplicantMetadata, PremiumAdjustment, PremiumBreakdown};
pub use plan::{CoverageLimit, Plan, PlanError, PlanTable};
pub use ports::{PolicyPort, ProductPort, QuotePort};
pub use error::PolicyError;
