// halal-ingest - Halal validation spreadsheet ingestion
// Copyright (c) 2025 HalalFood Contributors
// Licensed under the MIT License

//! # halal-ingest - apply halal review results to the place database
//!
//! halal-ingest reads a reviewed spreadsheet of restaurants (CSV or Excel),
//! turns each row's free-text halal assessment into a canonical status, a
//! short note and a few structured signals, and writes them to the `place`
//! table of a Supabase project.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Loading** CSV/XLSX review files into rows
//! - **Validating** rows and collecting the ones that cannot be used
//! - **Analyzing** free-text reasoning (status, zabiha, certifier, note)
//! - **Deduplicating** rows that share a place id
//! - **Applying** updates through PostgreSQL (one transaction) or the REST API
//! - **Reporting** what changed in audit CSV files
//!
//! ## Architecture
//!
//! halal-ingest follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (validate, analyze, dedupe, apply, report)
//! - [`adapters`] - External integrations (input files, PostgreSQL, Supabase REST)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration and credential management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use halal_ingest::adapters::store::create_place_store;
//! use halal_ingest::config::{resolve_config, resolve_store_settings, CredentialArgs};
//! use halal_ingest::core::apply::ApplyOptions;
//! use halal_ingest::core::ingest::IngestCoordinator;
//! use std::path::{Path, PathBuf};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = resolve_config(None)?;
//!     let settings = resolve_store_settings(&CredentialArgs::default(), &config)?;
//!     let store = create_place_store(&settings).await?;
//!
//!     let mut coordinator =
//!         IngestCoordinator::new(store, ApplyOptions::default(), PathBuf::from("reports"));
//!     let summary = coordinator.execute(Path::new("data/batch_01.csv")).await?;
//!
//!     println!("Updated {} places", summary.apply.updated_rows);
//!     Ok(())
//! }
//! ```
//!
//! ## Consistency
//!
//! With the PostgreSQL backend every update of a run happens in one
//! transaction: if the number of confirmed updates does not match the rows
//! expected to exist, nothing is committed. The REST backend has no such
//! transaction, so the same failure leaves earlier updates in place.
//!
//! ## Error Handling
//!
//! All fallible library functions return [`domain::Result`], whose error type
//! is [`domain::IngestError`]. Every error maps to exit code 1.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
