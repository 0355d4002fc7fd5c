//! Text analysis of validation rows
//!
//! Turns the free-text columns of a [`ValidatedRow`] into the structured
//! fields written to the place store. Everything here is a pure function of
//! its input: analyzing the same row twice yields the same result.
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
//! let analysis = analyze(&row);
//! assert_eq!(analysis.status, HalalStatus::Only);
//! assert_eq!(analysis.note, "Halal: Fully. Certified by IFANCA. Listed on Zabiha.");
//! ```

pub mod evidence;
pub mod note;
pub mod patterns;
pub mod signals;
pub mod status;

pub use evidence::select_evidence;
pub use note::{build_note, NOTE_MAX_CHARS};
pub use signals::{extract_certifier, extract_is_zabiha};
pub use status::map_status;

use crate::domain::{HalalStatus, ValidatedRow};

/// Structured signals derived from one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub status: HalalStatus,
    pub certifier_org: Option<String>,
    pub is_zabiha: Option<bool>,
    /// At most [`NOTE_MAX_CHARS`] characters
    pub note: String,
}

/// Analyze a validated row
pub fn analyze(row: &ValidatedRow) -> AnalysisResult {
    let status = map_status(&row.likelihood_raw, &row.type_raw);
    let certifier = extract_certifier(&row.reasoning_raw);
    let is_zabiha = extract_is_zabiha(&row.reasoning_raw);
    let evidence = select_evidence(status, &row.reasoning_raw, certifier);
    let note = build_note(status, evidence.as_deref(), is_zabiha);

    AnalysisResult {
        status,
        certifier_org: certifier.map(str::to_string),
        is_zabiha,
        note,
    }
}
