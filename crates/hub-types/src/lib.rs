//! Foundation types for LinkHub.
//!
//! This crate provides the core identity and domain types used throughout
//! the LinkHub system. Every other LinkHub crate depends on `hub-types`.
//!
//! # Key Types
//!
//! - [`UserId`] / [`LinkId`] — Time-ordered entity identifiers (UUID v7)
//! - [`Username`] — Canonical (case-insensitive) username for lookups
//! - [`User`] / [`PublicUser`] — Account record and its credential-stripped view
//! - [`Profile`] — Per-user page configuration with structured [`PageStyle`]
//! - [`Link`] — A single outbound link on a user's page
//! - [`VisitorId`] — Opaque visitor identity used for view deduplication

pub mod error;
pub mod id;
pub mod link;
pub mod profile;
pub mod user;
pub mod visitor;

pub use error::TypeError;
pub use id::{LinkId, UserId};
pub use link::{Link, NewLink};
pub use profile::{BackgroundEffect, FontFamily, HexColor, PageStyle, Profile};
pub use user::{NewUser, PublicUser, Role, User, Username};
pub use visitor::VisitorId;
