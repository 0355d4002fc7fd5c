//! CSV report writing

use crate::core::apply::{ApplyOutcome, ApplySummary};
use crate::core::dedupe::DuplicateGroup;
use crate::domain::{IngestError, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const APPLIED_HEADERS: [&str; 12] = [
    "id",
    "name_file",
    "name_db",
    "existing_halal_status",
    "new_cc_halal_status",
    "differs_from_existing",
    "cc_halal_likelihood",
    "cc_halal_type",
    "cc_halal_confidence",
    "cc_is_zabiha",
    "cc_certifier_org",
    "cc_note",
];

pub const DUPLICATES_HEADERS: [&str; 5] = ["id", "row_index", "halal_confidence", "name_file", "kept"];

/// Field order must match [`APPLIED_HEADERS`]
#[derive(Debug, Serialize)]
struct AppliedRecord<'a> {
    id: &'a str,
    name_file: &'a str,
    name_db: Option<&'a str>,
    existing_halal_status: Option<&'a str>,
    new_cc_halal_status: &'static str,
    differs_from_existing: bool,
    cc_halal_likelihood: &'a str,
    cc_halal_type: &'a str,
    cc_halal_confidence: i32,
    cc_is_zabiha: Option<bool>,
    cc_certifier_org: Option<&'a str>,
    cc_note: &'a str,
}

impl<'a> From<&'a ApplyOutcome> for AppliedRecord<'a> {
    fn from(outcome: &'a ApplyOutcome) -> Self {
        Self {
            id: &outcome.row.id,
            name_file: &outcome.row.name,
            name_db: outcome.prior_name.as_deref(),
            existing_halal_status: outcome.prior_status.as_deref(),
            new_cc_halal_status: outcome.new_status().as_str(),
            differs_from_existing: outcome.differs(),
            cc_halal_likelihood: &outcome.row.likelihood_raw,
            cc_halal_type: &outcome.row.type_raw,
            cc_halal_confidence: outcome.row.confidence,
            cc_is_zabiha: outcome.analysis.is_zabiha,
            cc_certifier_org: outcome.analysis.certifier_org.as_deref(),
            cc_note: &outcome.analysis.note,
        }
    }
}

/// Field order must match [`DUPLICATES_HEADERS`]
#[derive(Debug, Serialize)]
struct DuplicateRecord<'a> {
    id: &'a str,
    row_index: usize,
    halal_confidence: i32,
    name_file: &'a str,
    kept: bool,
}

/// Where the reports for one input file go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub applied: PathBuf,
    pub duplicates: PathBuf,
}

impl ReportPaths {
    /// Report paths for `input` inside `reports_dir`
    pub fn for_input(reports_dir: &Path, input: &Path) -> Self {
        let base = input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "input".to_string());

        Self {
            applied: reports_dir.join(format!("{base}__applied.csv")),
            duplicates: reports_dir.join(format!("{base}__duplicates.csv")),
        }
    }
}

fn open_writer(path: &Path, headers: &[&str]) -> Result<csv::Writer<fs::File>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| {
            IngestError::Report(format!("Failed to create {}: {e}", path.display()))
        })?;
    writer.write_record(headers)?;
    Ok(writer)
}

/// Write the applied report
pub fn write_applied_report(path: &Path, summary: &ApplySummary) -> Result<()> {
    let mut writer = open_writer(path, &APPLIED_HEADERS)?;
    for outcome in summary.applied() {
        writer.serialize(AppliedRecord::from(outcome))?;
    }
    writer.flush()?;

    tracing::info!(
        path = %path.display(),
        rows = summary.applied_count(),
        "Applied report written"
    );
    Ok(())
}

/// Write the duplicates report
///
/// Groups appear in first-occurrence order of their id; members within a
/// group in input order.
pub fn write_duplicates_report(path: &Path, groups: &[DuplicateGroup]) -> Result<()> {
    let mut writer = open_writer(path, &DUPLICATES_HEADERS)?;
    for group in groups {
        let mut members: Vec<(usize, _)> = group.members.iter().enumerate().collect();
        members.sort_by_key(|(_, member)| member.source_line);

        for (idx, member) in members {
            writer.serialize(DuplicateRecord {
                id: &group.id,
                row_index: member.source_line,
                halal_confidence: member.confidence,
                name_file: &member.name,
                kept: idx == group.kept,
            })?;
        }
    }
    writer.flush()?;

    tracing::info!(path = %path.display(), groups = groups.len(), "Duplicates report written");
    Ok(())
}

/// Write all reports for a finished run
///
/// Creates `reports_dir` if needed. The duplicates report is only written
/// when `groups` is non-empty.
pub fn write_reports(
    reports_dir: &Path,
    input: &Path,
    summary: &ApplySummary,
    groups: &[DuplicateGroup],
) -> Result<ReportPaths> {
    fs::create_dir_all(reports_dir).map_err(|e| {
        IngestError::Report(format!(
            "Failed to create reports directory {}: {e}",
            reports_dir.display()
        ))
    })?;

    let paths = ReportPaths::for_input(reports_dir, input);
    write_applied_report(&paths.applied, summary)?;
    if !groups.is_empty() {
        write_duplicates_report(&paths.duplicates, groups)?;
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analyze::analyze;
    use crate::core::dedupe::dedupe_rows;
    use crate::domain::{PriorPlace, TargetTable, ValidatedRow};
    use tempfile::TempDir;

    fn row(line: usize, id: &str, confidence: i32, reasoning: &str) -> ValidatedRow {
        ValidatedRow {
            source_line: line,
            id: id.to_string(),
            name: format!("Place, {id}"),
            likelihood_raw: "LIKELY_HALAL".to_string(),
            type_raw: "FULLY_HALAL".to_string(),
            confidence,
            reasoning_raw: reasoning.to_string(),
        }
    }

    #[test]
    fn test_report_paths() {
        let paths = ReportPaths::for_input(Path::new("reports"), Path::new("data/batch_01.xlsx"));
        assert_eq!(paths.applied, Path::new("reports/batch_01__applied.csv"));
        assert_eq!(paths.duplicates, Path::new("reports/batch_01__duplicates.csv"));
    }

    #[test]
    fn test_applied_report_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out__applied.csv");

        let mut summary = ApplySummary::new(TargetTable::Place);
        let found = row(2, "42", 90, "Certified by IFANCA. Also listed on Zabiha.");
        let analysis = analyze(&found);
        summary.record(ApplyOutcome::new(
            found,
            analysis,
            &[PriorPlace {
                name: Some("Al Baraka".to_string()),
                halal_status: None,
            }],
        ));
        let missing = row(3, "43", 50, "Nothing.");
        let analysis = analyze(&missing);
        summary.record(ApplyOutcome::new(missing, analysis, &[]));

        write_applied_report(&path, &summary).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], APPLIED_HEADERS.join(","));
        assert_eq!(
            lines[1],
            "42,\"Place, 42\",Al Baraka,,only,true,LIKELY_HALAL,FULLY_HALAL,90,true,IFANCA,\
             Halal: Fully. Certified by IFANCA. Listed on Zabiha."
        );
    }

    #[test]
    fn test_applied_report_header_only_when_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty__applied.csv");

        write_applied_report(&path, &ApplySummary::new(TargetTable::Places)).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.trim_end(), APPLIED_HEADERS.join(","));
    }

    #[test]
    fn test_duplicates_report_marks_kept() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dups.csv");

        let outcome = dedupe_rows(vec![
            row(2, "7", 70, "Menu."),
            row(3, "8", 60, "Menu."),
            row(4, "7", 95, "Menu."),
        ]);
        write_duplicates_report(&path, &outcome.duplicates).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "id,row_index,halal_confidence,name_file,kept");
        assert_eq!(lines[1], "7,2,70,\"Place, 7\",false");
        assert_eq!(lines[2], "7,4,95,\"Place, 7\",true");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_write_reports_skips_duplicates_file_when_none() {
        let dir = TempDir::new().unwrap();
        let reports_dir = dir.path().join("nested/reports");

        let paths = write_reports(
            &reports_dir,
            Path::new("input.csv"),
            &ApplySummary::new(TargetTable::Place),
            &[],
        )
        .unwrap();

        assert!(paths.applied.exists());
        assert!(!paths.duplicates.exists());
    }
}
