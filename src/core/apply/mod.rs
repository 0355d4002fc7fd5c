//! Writing analyzed rows to the place store
//!
//! - [`engine`] - the apply protocol (session, mismatch check, rollback)
//! - [`summary`] - per-row outcomes and counts

pub mod engine;
pub mod summary;

pub use engine::{place_update, ApplyEngine, ApplyOptions};
pub use summary::{ApplyOutcome, ApplySummary};
