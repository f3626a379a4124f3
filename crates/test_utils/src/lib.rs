//! Test Utilities Crate
//!
//! Shared test infrastructure for the claims core test suites.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built products, policies and dates
//! - `builders`: Builder patterns for products, policies and claim payloads
//! - `assertions`: Assertion helpers for validation results and amounts
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
