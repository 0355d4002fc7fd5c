//! Ingest orchestration
//!
//! Runs one input file through load, validation, deduplication, apply and
//! reporting.

pub mod coordinator;
pub mod summary;

pub use coordinator::IngestCoordinator;
pub use summary::IngestSummary;
