//! Ports and Adapters Infrastructure
//!
//! The claims core never owns persistence. Each domain crate declares the
//! record-store port it needs (`ProductPort`, `PolicyPort`, `QuotePort`,
//! `ClaimPort`) on top of the marker trait here, and adapters implement them.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │      Application services     │
//! └──────────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────┐
//! │  Port traits (per domain)     │
//! └──────────────────────────────┘
//!                ▲
//!                │
//! ┌──────────────────────────────┐
//! │  Adapter (in-memory, SQL...)  │
//! └──────────────────────────────┘
//! ```

use std::fmt;
use thiserror::Error;

/// Error type for port operations
///
/// Every adapter reports failures through this type so services can treat
/// in-memory and external stores the same way.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: String,
        id: String,
    },

    /// The write was based on a stale version of the record
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Conflict error for a stale write
    pub fn stale_version(entity_type: &str, id: impl fmt::Display, expected: u64, actual: u64) -> Self {
        PortError::Conflict {
            message: format!(
                "{} {} was modified concurrently (expected version {}, found {})",
                entity_type, id, expected, actual
            ),
        }
    }

    /// Returns true if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }

    /// Returns true if this is an optimistic-concurrency conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, PortError::Conflict { .. })
    }
}

/// Marker trait for all domain ports
pub trait DomainPort: Send + Sync + 'static {}
