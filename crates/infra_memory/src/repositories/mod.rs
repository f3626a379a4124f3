//! Port implementations, one module per domain

pub mod claims;
pub mod policy;
