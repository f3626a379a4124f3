//! Service error handling

use thiserror::Error;

use core_kernel::PortError;
use domain_claims::ClaimError;
use domain_policy::{PlanError, PolicyError};

/// Service error types
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Claim(#[from] ClaimError),

    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error(transparent)]
    Store(#[from] PortError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ServiceError {
    /// Validator rejected the claim; `messages` has the full list
    pub fn is_validation(&self) -> bool {
        matches!(self, ServiceError::Claim(err) if err.is_validation())
    }

    /// Operation not allowed in the record's current state, or a required
    /// field is missing
    pub fn is_precondition(&self) -> bool {
        match self {
            ServiceError::Claim(err) => err.is_precondition(),
            ServiceError::Policy(_) => true,
            _ => false,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::Store(err) if err.is_not_found())
    }

    /// Another writer changed the record first
    pub fn is_conflict(&self) -> bool {
        matches!(self, ServiceError::Store(err) if err.is_conflict())
    }

    /// Messages to show the caller, one per problem
    pub fn messages(&self) -> Vec<String> {
        match self {
            ServiceError::Claim(err) => err.messages(),
            other => vec![other.to_string()],
        }
    }
}
