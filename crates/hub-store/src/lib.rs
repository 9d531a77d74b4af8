//! Relational store boundary for LinkHub.
//!
//! This crate defines the storage traits the rest of the system is written
//! against, plus an in-memory reference backend. The design rule (carried
//! through every backend) is that cross-request coordination lives in the
//! store's uniqueness constraints, not in process-local locks:
//!
//! - usernames are unique case-insensitively,
//! - at most one profile row exists per user,
//! - at most one view record exists per (subject, visitor) pair.
//!
//! Callers racing on a constraint receive [`StoreError::Conflict`] and are
//! expected to converge by re-reading the winner's row. `Conflict` is an
//! internal retry signal and never crosses a service boundary.
//!
//! # Traits
//!
//! - [`UserStore`] — account lookup and the atomic view-counter increment
//! - [`ProfileStore`] — profile reads plus the conditional default insert
//! - [`LinkStore`] — insertion-ordered link storage
//! - [`ViewLedger`] — append-only (subject, visitor) attribution records
//! - [`HubStore`] — blanket alias for backends implementing all four

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryHubStore;
pub use traits::{HubStore, LinkStore, ProfileStore, UserStore, ViewLedger};
