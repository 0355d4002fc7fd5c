//! Run summary

use crate::core::apply::ApplySummary;
use crate::core::dedupe::DuplicateGroup;
use crate::core::report::ReportPaths;
use crate::domain::InvalidRow;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::time::Duration;

/// Everything a successful run produced
#[derive(Debug, Clone)]
pub struct IngestSummary {
    pub input: PathBuf,

    /// Non-blank data rows in the file
    pub total_rows: usize,

    /// Rows that passed validation
    pub valid_rows: usize,

    /// Rows left after deduplication
    pub unique_rows: usize,

    pub invalid: Vec<InvalidRow>,
    pub duplicates: Vec<DuplicateGroup>,
    pub apply: ApplySummary,
    pub reports: ReportPaths,
    pub duration: Duration,
}

impl IngestSummary {
    /// Rows dropped by deduplication
    pub fn duplicates_dropped(&self) -> usize {
        self.duplicates.iter().map(DuplicateGroup::dropped_count).sum()
    }

    /// Whether a duplicates report was written
    pub fn has_duplicates_report(&self) -> bool {
        !self.duplicates.is_empty()
    }

    /// Human-readable summary printed at the end of a run
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Applied report: {}", self.reports.applied.display());
        let _ = writeln!(out, "Rows in file: {}", self.total_rows);
        let _ = writeln!(out, "Rows after validation: {}", self.valid_rows);
        let _ = writeln!(out, "Rows after dedupe: {}", self.unique_rows);
        let _ = writeln!(out, "Updated rows: {}", self.apply.updated_rows);
        let _ = writeln!(out, "Missing ids: {}", self.apply.missing_count());
        let _ = writeln!(out, "Duplicates dropped: {}", self.duplicates_dropped());
        let _ = writeln!(out, "Unclear: {}", self.apply.unclear_count());
        let _ = writeln!(out, "Differs from existing: {}", self.apply.differs_count());

        if !self.invalid.is_empty() {
            let _ = writeln!(out, "Invalid rows:");
            for row in &self.invalid {
                let _ = writeln!(
                    out,
                    "  row {}: id={} name={}",
                    row.source_line, row.id, row.name
                );
            }
        }

        if self.apply.missing_count() > 0 {
            let _ = writeln!(out, "Missing ids:");
            for outcome in self.apply.missing() {
                let _ = writeln!(out, "  {} ({})", outcome.id(), outcome.row.name);
            }
        }

        if self.has_duplicates_report() {
            let _ = writeln!(
                out,
                "Duplicates report: {}",
                self.reports.duplicates.display()
            );
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analyze::analyze;
    use crate::core::apply::ApplyOutcome;
    use crate::core::dedupe::dedupe_rows;
    use crate::domain::{PriorPlace, TargetTable, ValidatedRow};
    use std::path::Path;

    fn row(line: usize, id: &str, confidence: i32) -> ValidatedRow {
        ValidatedRow {
            source_line: line,
            id: id.to_string(),
            name: format!("Place {id}"),
            likelihood_raw: "LIKELY_HALAL".to_string(),
            type_raw: "FULLY_HALAL".to_string(),
            confidence,
            reasoning_raw: "Official menu.".to_string(),
        }
    }

    #[test]
    fn test_render_lists_everything() {
        let deduped = dedupe_rows(vec![row(2, "1", 70), row(3, "1", 95), row(4, "2", 50)]);

        let mut apply = ApplySummary::new(TargetTable::Place);
        for unique in &deduped.unique {
            let touched = if unique.id == "1" {
                vec![PriorPlace {
                    name: Some("Place 1".to_string()),
                    halal_status: Some("only".to_string()),
                }]
            } else {
                vec![]
            };
            apply.record(ApplyOutcome::new(unique.clone(), analyze(unique), &touched));
        }

        let summary = IngestSummary {
            input: PathBuf::from("data/batch.csv"),
            total_rows: 4,
            valid_rows: 3,
            unique_rows: deduped.unique.len(),
            invalid: vec![InvalidRow {
                source_line: 5,
                id: "9".to_string(),
                name: "Bad".to_string(),
            }],
            duplicates: deduped.duplicates,
            apply,
            reports: ReportPaths::for_input(Path::new("reports"), Path::new("data/batch.csv")),
            duration: Duration::from_millis(5),
        };

        let text = summary.render();
        assert!(text.contains("Applied report: reports/batch__applied.csv"));
        assert!(text.contains("Rows after dedupe: 2"));
        assert!(text.contains("Updated rows: 1"));
        assert!(text.contains("Missing ids: 1"));
        assert!(text.contains("Duplicates dropped: 1"));
        assert!(text.contains("Differs from existing: 0"));
        assert!(text.contains("  row 5: id=9 name=Bad"));
        assert!(text.contains("  2 (Place 2)"));
        assert!(text.contains("Duplicates report: reports/batch__duplicates.csv"));
    }
}
