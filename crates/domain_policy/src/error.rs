//! Policy domain errors
//!
//! This module defines the error types that can occur within the
//! product, quote and policy aggregates.

use thiserror::Error;

use core_kernel::TemporalError;

/// Errors that can occur in the policy domain
#[derive(Debug, Error)]
pub enum PolicyError {
    /// Invalid state transition attempted
    #[error("Invalid state transition from {from} to {to}")]
    InvalidStateTransition {
        from: String,
        to: String,
    },

    /// Premium must be strictly positive
    #[error("Invalid premium: {0}")]
    InvalidPremium(String),

    /// Coverage period is malformed
    #[error("Invalid coverage period: {0}")]
    InvalidPeriod(#[from] TemporalError),

    /// A policy can only be issued from an approved quote
    #[error("Quote is {status}, only approved quotes can be issued")]
    QuoteNotApproved {
        status: String,
    },

    /// Quote and product passed to issuance do not belong together
    #[error("Quote was priced for product {quoted}, not {given}")]
    ProductMismatch {
        quoted: String,
        given: String,
    },

    /// Required field is missing
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),
}

impl PolicyError {
    /// Creates an invalid state transition error from any two displayable states
    pub fn transition(from: impl std::fmt::Display, to: impl std::fmt::Display) -> Self {
        PolicyError::InvalidStateTransition {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}
