//! Claims Core Services
//!
//! In-process application layer over the policy and claims domains. Each
//! service loads records through the ports, applies one domain operation,
//! persists with the version it loaded, and only then writes an audit line.
//!
//! # Architecture
//!
//! - **Services**: `QuoteService` and `ClaimService`
//! - **Config**: environment-driven `ServiceConfig`
//! - **Telemetry**: `tracing_subscriber` setup with plain or JSON output
//! - **Errors**: `ServiceError` classifying domain and store failures
//!
//! Authentication and authorization happen before these services are
//! called; acting user ids are taken as given.

pub mod config;
pub mod error;
pub mod services;
pub mod telemetry;

pub use crate::config::ServiceConfig;
pub use crate::error::ServiceError;
pub use crate::services::{ClaimService, QuoteService, SubmissionReceipt, AUDIT_TARGET};
pub use crate::telemetry::{init_tracing, try_init_tracing};
