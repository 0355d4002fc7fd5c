//! Apply outcomes and run summary

use crate::core::analyze::AnalysisResult;
use crate::domain::{HalalStatus, PriorPlace, TargetTable, ValidatedRow};

/// Result of writing one deduplicated row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyOutcome {
    pub row: ValidatedRow,
    pub analysis: AnalysisResult,

    /// Number of store rows the update touched
    pub touched: usize,

    /// Place name in the store before the update
    pub prior_name: Option<String>,

    /// `halal_status` in the store before the update
    pub prior_status: Option<String>,
}

impl ApplyOutcome {
    /// Build an outcome from the rows the store reported as touched
    pub fn new(row: ValidatedRow, analysis: AnalysisResult, touched: &[PriorPlace]) -> Self {
        let prior = touched.first().cloned().unwrap_or_default();
        Self {
            row,
            analysis,
            touched: touched.len(),
            prior_name: prior.name,
            prior_status: prior.halal_status,
        }
    }

    pub fn id(&self) -> &str {
        &self.row.id
    }

    /// Whether the store had a place with this id
    pub fn found(&self) -> bool {
        self.touched > 0
    }

    pub fn new_status(&self) -> HalalStatus {
        self.analysis.status
    }

    /// Whether the existing status differs from the new one
    ///
    /// An absent prior status always differs.
    pub fn differs(&self) -> bool {
        self.prior_status.as_deref() != Some(self.new_status().as_str())
    }
}

/// Everything the apply pass produced
#[derive(Debug, Clone)]
pub struct ApplySummary {
    /// Table the updates went to
    pub table: TargetTable,

    /// One outcome per deduplicated row, in processing order
    pub outcomes: Vec<ApplyOutcome>,

    /// Total store rows touched across all updates
    pub updated_rows: usize,
}

impl ApplySummary {
    pub fn new(table: TargetTable) -> Self {
        Self {
            table,
            outcomes: Vec::new(),
            updated_rows: 0,
        }
    }

    /// Record one outcome
    pub fn record(&mut self, outcome: ApplyOutcome) {
        self.updated_rows += outcome.touched;
        self.outcomes.push(outcome);
    }

    /// Outcomes for places that were found and updated
    pub fn applied(&self) -> impl Iterator<Item = &ApplyOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.found())
    }

    /// Outcomes for ids the store did not have
    pub fn missing(&self) -> impl Iterator<Item = &ApplyOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.found())
    }

    pub fn applied_count(&self) -> usize {
        self.applied().count()
    }

    pub fn missing_count(&self) -> usize {
        self.missing().count()
    }

    /// Rows expected to be updated: everything not reported missing
    pub fn expected_updates(&self) -> usize {
        self.outcomes.len() - self.missing_count()
    }

    /// Ids not confirmed as updated exactly once
    pub fn unconfirmed_ids(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.touched != 1)
            .map(|outcome| outcome.id().to_string())
            .collect()
    }

    pub fn unclear_count(&self) -> usize {
        self.applied()
            .filter(|outcome| outcome.new_status() == HalalStatus::Unclear)
            .count()
    }

    pub fn differs_count(&self) -> usize {
        self.applied().filter(|outcome| outcome.differs()).count()
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            table = %self.table,
            processed = self.outcomes.len(),
            applied = self.applied_count(),
            missing = self.missing_count(),
            unclear = self.unclear_count(),
            differs = self.differs_count(),
            "Apply completed"
        );

        for outcome in self.missing() {
            tracing::warn!(id = %outcome.id(), name = %outcome.row.name, "Place id not found");
        }
    }
}
