//! Page composition services for LinkHub.
//!
//! Two services sit between the HTTP surface and the store:
//!
//! - [`ProfileResolver`] turns a username into a fully composed page —
//!   account, profile (lazily materialized on first access), and ordered
//!   links — for either the public or the owner-facing call path.
//! - [`ViewAttribution`] decides per request whether a view is new for a
//!   (subject, visitor) pair and increments the subject's counter at most
//!   once per visitor.
//!
//! Both delegate all cross-request coordination to the store's uniqueness
//! constraints; neither holds locks of its own.

pub mod error;
pub mod resolver;
pub mod views;

pub use error::PageError;
pub use resolver::{Audience, ProfileResolver, ResolvedPage};
pub use views::{Recorded, ViewAttribution};
