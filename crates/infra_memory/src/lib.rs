//! In-Memory Record Store
//!
//! Adapter implementing the record-store ports declared by the domain crates
//! (`ProductPort`, `QuotePort`, `PolicyPort`, `ClaimPort`) on top of
//! `tokio::sync::RwLock` tables. Used by the service layer's tests and by
//! embedders that bring no database of their own.
//!
//! # Concurrency
//!
//! Quote and claim writes carry the version the change was based on. The
//! check and the write happen under one write lock, so of two racing
//! transitions on the same record exactly one is stored and the other
//! receives `PortError::Conflict`.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_memory::InMemoryStore;
//!
//! let store = InMemoryStore::new();
//! store.save_claim(&claim, None).await?;
//! ```

pub mod store;
pub mod repositories;

pub use store::InMemoryStore;
