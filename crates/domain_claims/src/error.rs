//! Claims domain errors

use thiserror::Error;

/// Errors that can occur in the claims domain
///
/// `Validation` carries every admissibility message at once. All other
/// variants are precondition failures: the claim is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClaimError {
    #[error("Claim validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    #[error("{0} is not a decision status")]
    InvalidDecisionStatus(String),

    #[error("Decision reason is required")]
    MissingDecisionReason,

    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

impl ClaimError {
    /// True for the admissibility failure carrying validator messages
    pub fn is_validation(&self) -> bool {
        matches!(self, ClaimError::Validation(_))
    }

    /// True for failures caused by the claim's current state or missing input
    pub fn is_precondition(&self) -> bool {
        !self.is_validation()
    }

    /// Messages to surface to the user, all at once
    pub fn messages(&self) -> Vec<String> {
        match self {
            ClaimError::Validation(messages) => messages.clone(),
            other => vec![other.to_string()],
        }
    }
}
