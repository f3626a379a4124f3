//! Core Kernel - Foundational types shared by the brokerage domains
//!
//! This crate provides the building blocks used across the policy and claims crates:
//! - Strongly-typed identifiers
//! - Decimal rounding helpers and rates for premium arithmetic
//! - Inclusive coverage periods
//! - The error type every record-store port reports

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod ports;

pub use money::{round_money, Rate, MONEY_DECIMAL_PLACES};
pub use temporal::{CoveragePeriod, TemporalError};
pub use identifiers::{ClaimId, PartyId, PolicyId, ProductId, QuoteId};
pub use ports::{DomainPort, PortError};
