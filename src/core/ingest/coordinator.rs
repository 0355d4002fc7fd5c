//! Ingest coordinator - main orchestrator for one run

use super::summary::IngestSummary;
use crate::adapters::loader::load_rows;
use crate::adapters::store::PlaceStore;
use crate::core::apply::{ApplyEngine, ApplyOptions};
use crate::core::dedupe::dedupe_rows;
use crate::core::report::write_reports;
use crate::core::validate::validate_rows;
use crate::domain::Result;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Ingest coordinator
pub struct IngestCoordinator {
    engine: ApplyEngine,
    reports_dir: PathBuf,
}

impl IngestCoordinator {
    /// Create a coordinator writing through `store`
    pub fn new(store: Box<dyn PlaceStore>, options: ApplyOptions, reports_dir: PathBuf) -> Self {
        Self {
            engine: ApplyEngine::new(store, options),
            reports_dir,
        }
    }

    /// Process one input file
    ///
    /// Nothing is written to the reports directory unless the apply pass
    /// succeeds.
    ///
    /// # Errors
    ///
    /// Any load, validation, store or report error ends the run.
    pub async fn execute(&mut self, input: &Path) -> Result<IngestSummary> {
        let start = Instant::now();
        tracing::info!(input = %input.display(), "Starting ingest");

        let sheet = load_rows(input)?;
        let total_rows = sheet.rows.len();

        let validation = validate_rows(&sheet.headers, &sheet.rows)?;
        let valid_rows = validation.valid.len();

        let deduped = dedupe_rows(validation.valid);
        tracing::info!(
            unique = deduped.unique.len(),
            dropped = deduped.dropped_count(),
            "Rows deduplicated"
        );

        let apply = self.engine.apply(&deduped.unique).await?;

        let reports = write_reports(&self.reports_dir, input, &apply, &deduped.duplicates)?;

        let summary = IngestSummary {
            input: input.to_path_buf(),
            total_rows,
            valid_rows,
            unique_rows: deduped.unique.len(),
            invalid: validation.invalid,
            duplicates: deduped.duplicates,
            apply,
            reports,
            duration: start.elapsed(),
        };

        tracing::info!(
            applied = summary.apply.applied_count(),
            missing = summary.apply.missing_count(),
            duration_ms = summary.duration.as_millis() as u64,
            "Ingest completed"
        );
        Ok(summary)
    }
}
