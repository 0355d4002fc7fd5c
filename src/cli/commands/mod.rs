//! CLI command implementations

pub mod ingest;
