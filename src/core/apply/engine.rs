//! Apply engine - writes analyzed rows to the place store
//!
//! All updates go through one [`WriteSession`]. After the loop the engine
//! checks that the store confirmed every row it was expected to update; on a
//! mismatch the session is rolled back and the run fails. The REST backend
//! cannot roll back, so there a mismatch fails the run with the earlier
//! updates still applied.

use super::summary::{ApplyOutcome, ApplySummary};
use crate::adapters::store::{PlaceStore, WriteSession};
use crate::core::analyze::{analyze, AnalysisResult};
use crate::domain::{IngestError, PlaceUpdate, Result, ValidatedRow};

/// Apply behavior switches
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplyOptions {
    /// Treat ids missing from the store as a count mismatch
    pub fail_on_missing: bool,
}

/// Apply engine
pub struct ApplyEngine {
    store: Box<dyn PlaceStore>,
    options: ApplyOptions,
}

impl ApplyEngine {
    /// Create a new apply engine over a store
    pub fn new(store: Box<dyn PlaceStore>, options: ApplyOptions) -> Self {
        Self { store, options }
    }

    /// Analyze and write every row
    ///
    /// # Errors
    ///
    /// - Store errors while resolving the table, opening the session or
    ///   updating a row (the session is rolled back first)
    /// - [`IngestError::CountMismatch`] when the confirmed update count does
    ///   not match the rows expected to exist
    pub async fn apply(&mut self, rows: &[ValidatedRow]) -> Result<ApplySummary> {
        let options = self.options;
        let backend = self.store.backend_name();

        let table = self.store.resolve_target_table().await?;
        tracing::info!(backend, table = %table, rows = rows.len(), "Applying updates");

        let mut session = self.store.begin(table).await?;
        let mut summary = ApplySummary::new(table);

        for row in rows {
            let analysis = analyze(row);
            let update = place_update(row, &analysis);

            let touched = match session.update_by_id(&row.id, &update).await {
                Ok(touched) => touched,
                Err(e) => {
                    tracing::error!(id = %row.id, error = %e, "Update failed, rolling back");
                    abandon(session).await;
                    return Err(e);
                }
            };

            tracing::debug!(
                id = %row.id,
                status = %analysis.status,
                touched = touched.len(),
                "Row applied"
            );
            summary.record(ApplyOutcome::new(row.clone(), analysis, &touched));
        }

        let expected = summary.expected_updates();
        let updated = summary.updated_rows;
        let missing = summary.missing_count();

        if updated != expected || (options.fail_on_missing && missing > 0) {
            let unconfirmed_ids = summary.unconfirmed_ids();
            tracing::error!(
                expected,
                updated,
                missing,
                unconfirmed = unconfirmed_ids.len(),
                "Update count mismatch"
            );

            let rolled_back = match session.rollback().await {
                Ok(rollback) => rollback.rolled_back(),
                Err(e) => {
                    tracing::error!(error = %e, "Rollback failed");
                    false
                }
            };
            if !rolled_back {
                tracing::warn!(backend, "Backend cannot roll back; earlier updates remain applied");
            }

            return Err(IngestError::CountMismatch {
                expected,
                updated,
                unconfirmed_ids,
                rolled_back,
            });
        }

        session.commit().await?;
        summary.log_summary();
        Ok(summary)
    }
}

/// Fields written for one row
pub fn place_update(row: &ValidatedRow, analysis: &AnalysisResult) -> PlaceUpdate {
    PlaceUpdate {
        cc_halal_status: analysis.status,
        cc_halal_likelihood: row.likelihood_raw.clone(),
        cc_halal_type: row.type_raw.clone(),
        cc_halal_confidence: row.confidence,
        cc_note: analysis.note.clone(),
        cc_reasoning_raw: row.reasoning_raw.clone(),
        cc_is_zabiha: analysis.is_zabiha,
        cc_certifier_org: analysis.certifier_org.clone(),
    }
}

async fn abandon(session: Box<dyn WriteSession + '_>) {
    match session.rollback().await {
        Ok(rollback) => tracing::info!(?rollback, "Session abandoned"),
        Err(e) => tracing::error!(error = %e, "Rollback failed"),
    }
}
