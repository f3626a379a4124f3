//! Claims Domain
//!
//! This crate implements claim adjudication from submission through payment:
//! - **Validation**: whether a claim is admissible against its policy and product
//! - **Lifecycle**: the status state machine and the amounts each decision derives
//! - **Coverage**: advisory plan ceiling information for a submitted claim
//! - **Presentation**: the customer-facing status readout
//!
//! # Claim Lifecycle
//!
//! ```text
//! Submitted -> In Review -> Approved ----------> Paid
//!                        \-> Partially Approved -/
//!                        \-> Rejected
//! ```

pub mod claim;
pub mod validation;
pub mod lifecycle;
pub mod coverage;
pub mod presentation;
pub mod ports;
pub mod error;

pub use claim::{Attachment, Claim, ClaimPayload, ClaimStatus};
pub use validation::{validate_claim, check_claim, ClaimViolation, CLAIM_LIMIT_MULTIPLE};
pub use lifecycle::Decision;
pub use coverage::{coverage_info, CoverageInfo};
pub use presentation::{describe_status, describe_unrecognized_status, AmountBreakdown, PaymentStatus, StatusView};
pub use ports::ClaimPort;
pub use error::ClaimError;
