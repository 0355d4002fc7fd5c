//! Core business logic for halal-ingest.
//!
//! # Modules
//!
//! - [`validate`] - Required columns and per-row validation
//! - [`analyze`] - Status mapping, zabiha/certifier signals and note composition
//! - [`dedupe`] - Collapsing rows that share a place id
//! - [`apply`] - Writing analyzed rows through a place store
//! - [`report`] - Applied and duplicates CSV reports
//! - [`ingest`] - Orchestration of one run and its summary
//!
//! # Ingest Workflow
//!
//! 1. **Validate**: Check required columns, split rows into valid and invalid
//! 2. **Dedupe**: Keep the highest-confidence row per id
//! 3. **Apply**: Analyze each row and update the place table in one session
//! 4. **Report**: Write the audit CSVs after a successful apply
//!
//! # Example
//!
//! ```rust
//! use halal_ingest::core::analyze::analyze;
//! use halal_ingest::domain::{HalalStatus, ValidatedRow};
//!
//! let row = ValidatedRow {
//!     source_line: 2,
//!     id: "42".to_string(),
//!     name: "Al Baraka Grill".to_string(),
//!     likelihood_raw: "LIKELY_HALAL".to_string(),
//!     type_raw: "FULLY_HALAL".to_string(),
//!     confidence: 90,
//!     reasoning_raw: "Certified by IFANCA. Also listed on Zabiha.".to_string(),
//! };
//!
//! let result = analyze(&row);
//! assert_eq!(result.status, HalalStatus::Only);
//! assert_eq!(result.certifier_org.as_deref(), Some("IFANCA"));
//! ```

pub mod analyze;
pub mod apply;
pub mod dedupe;
pub mod ingest;
pub mod report;
pub mod validate;
