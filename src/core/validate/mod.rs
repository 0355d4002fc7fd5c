//! Row validation
//!
//! Checks the header row for the required columns, then splits the loaded
//! rows into [`ValidatedRow`]s and [`InvalidRow`]s. A missing column fails the
//! whole run; a bad row is only skipped.

use crate::domain::{IngestError, InvalidRow, RawRow, Result, ValidatedRow};

/// Columns every input file must carry (after header normalization)
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "id",
    "name",
    "halal_likelihood",
    "halal_type",
    "halal_confidence",
    "halal_reasoning",
];

/// Valid and invalid rows, both in input order
#[derive(Debug, Clone, Default)]
pub struct ValidationOutcome {
    pub valid: Vec<ValidatedRow>,
    pub invalid: Vec<InvalidRow>,
}

/// Fail if any required column is absent from the header set
///
/// Missing names are reported sorted.
pub fn check_required_columns(headers: &[String]) -> Result<()> {
    let mut missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|header| header == *column))
        .map(|column| column.to_string())
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    missing.sort();
    Err(IngestError::MissingColumns(missing))
}

/// Parse a confidence cell such as `85`, `85%` or `85.0`
///
/// The value goes through floating point and is truncated toward zero, so
/// `85.9` reads as `85`. Returns `None` for blank, non-numeric or non-finite
/// input.
pub fn parse_confidence(text: &str) -> Option<i32> {
    let cleaned = text.trim().trim_end_matches('%').trim();
    if cleaned.is_empty() {
        return None;
    }

    let value: f64 = cleaned.parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    let truncated = value.trunc();
    if truncated < i32::MIN as f64 || truncated > i32::MAX as f64 {
        return None;
    }
    Some(truncated as i32)
}

/// Validate a single row
pub fn validate_row(row: &RawRow) -> std::result::Result<ValidatedRow, InvalidRow> {
    let id = row.text("id").trim().to_string();
    let name = row.text("name").trim().to_string();
    let likelihood = row.text("halal_likelihood").trim().to_string();
    let halal_type = row.text("halal_type").trim().to_string();
    let reasoning = row.text("halal_reasoning");
    let confidence = parse_confidence(&row.text("halal_confidence"));

    let complete = !id.is_empty()
        && !name.is_empty()
        && !likelihood.is_empty()
        && !halal_type.is_empty()
        && !reasoning.trim().is_empty();

    match confidence {
        Some(confidence) if complete => Ok(ValidatedRow {
            source_line: row.source_line,
            id,
            name,
            likelihood_raw: likelihood,
            type_raw: halal_type,
            confidence,
            reasoning_raw: reasoning,
        }),
        _ => Err(InvalidRow {
            source_line: row.source_line,
            id,
            name,
        }),
    }
}

/// Validate all loaded rows
///
/// Blank rows are dropped without being counted as invalid.
///
/// # Errors
///
/// Returns [`IngestError::MissingColumns`] if the header lacks a required
/// column, and [`IngestError::NoValidRows`] if nothing survives.
pub fn validate_rows(headers: &[String], rows: &[RawRow]) -> Result<ValidationOutcome> {
    check_required_columns(headers)?;

    let mut outcome = ValidationOutcome::default();
    for row in rows.iter().filter(|row| !row.is_blank()) {
        match validate_row(row) {
            Ok(valid) => outcome.valid.push(valid),
            Err(invalid) => {
                tracing::debug!(
                    source_line = invalid.source_line,
                    id = %invalid.id,
                    "Skipping invalid row"
                );
                outcome.invalid.push(invalid);
            }
        }
    }

    tracing::info!(
        valid = outcome.valid.len(),
        invalid = outcome.invalid.len(),
        "Rows validated"
    );

    if outcome.valid.is_empty() {
        return Err(IngestError::NoValidRows);
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CellValue;

    fn headers() -> Vec<String> {
        REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect()
    }

    fn row(line: usize, cells: [&str; 6]) -> RawRow {
        RawRow::from_cells(
            line,
            &headers(),
            cells
                .iter()
                .map(|c| CellValue::Text(c.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_parse_confidence_accepts_percent_and_float() {
        assert_eq!(parse_confidence("85"), Some(85));
        assert_eq!(parse_confidence("85%"), Some(85));
        assert_eq!(parse_confidence("85.0"), Some(85));
        assert_eq!(parse_confidence(" 85.9 % "), Some(85));
        assert_eq!(parse_confidence("-3.7"), Some(-3));
    }

    #[test]
    fn test_parse_confidence_rejects_garbage() {
        assert_eq!(parse_confidence("n/a"), None);
        assert_eq!(parse_confidence(""), None);
        assert_eq!(parse_confidence("%"), None);
        assert_eq!(parse_confidence("inf"), None);
        assert_eq!(parse_confidence("NaN"), None);
        assert_eq!(parse_confidence("1e20"), None);
    }

    #[test]
    fn test_missing_columns_reported_sorted() {
        let headers = vec!["name".to_string(), "id".to_string()];
        let err = check_required_columns(&headers).unwrap_err();
        match err {
            IngestError::MissingColumns(missing) => assert_eq!(
                missing,
                vec![
                    "halal_confidence",
                    "halal_likelihood",
                    "halal_reasoning",
                    "halal_type"
                ]
            ),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_extra_columns_ignored() {
        let mut headers = headers();
        headers.push("address".to_string());
        assert!(check_required_columns(&headers).is_ok());
    }

    #[test]
    fn test_validate_rows_partitions() {
        let rows = vec![
            row(2, ["1", "Kabob House", "LIKELY_HALAL", "FULLY_HALAL", "90%", "Certified."]),
            row(3, ["2", "Pizza Place", "LIKELY_HALAL", "FULLY_HALAL", "n/a", "Menu."]),
            row(4, ["3", "", "LIKELY_HALAL", "FULLY_HALAL", "70", "Menu."]),
            row(5, ["4", "Deli", "UNKNOWN", "UNKNOWN", "50", "   "]),
        ];

        let outcome = validate_rows(&headers(), &rows).unwrap();
        assert_eq!(outcome.valid.len(), 1);
        assert_eq!(outcome.valid[0].id, "1");
        assert_eq!(outcome.valid[0].confidence, 90);
        assert_eq!(
            outcome
                .invalid
                .iter()
                .map(|r| r.source_line)
                .collect::<Vec<_>>(),
            vec![3, 4, 5]
        );
    }

    #[test]
    fn test_blank_rows_silently_dropped() {
        let rows = vec![
            row(2, ["", "", "", "", "", ""]),
            row(3, ["1", "Grill", "LIKELY_HALAL", "FULLY_HALAL", "90", "Official site."]),
        ];

        let outcome = validate_rows(&headers(), &rows).unwrap();
        assert_eq!(outcome.valid.len(), 1);
        assert!(outcome.invalid.is_empty());
        assert_eq!(outcome.valid[0].source_line, 3);
    }

    #[test]
    fn test_trims_fields_but_keeps_raw_reasoning() {
        let rows = vec![row(
            2,
            [" 42 ", " Grill ", " likely_halal ", "FULLY_HALAL", "90", "  Certified by HMS.  "],
        )];

        let outcome = validate_rows(&headers(), &rows).unwrap();
        let valid = &outcome.valid[0];
        assert_eq!(valid.id, "42");
        assert_eq!(valid.name, "Grill");
        assert_eq!(valid.likelihood_raw, "likely_halal");
        assert_eq!(valid.reasoning_raw, "  Certified by HMS.  ");
    }

    #[test]
    fn test_no_valid_rows_is_error() {
        let rows = vec![row(2, ["1", "Grill", "LIKELY_HALAL", "FULLY_HALAL", "??", "x"])];
        let err = validate_rows(&headers(), &rows).unwrap_err();
        assert!(matches!(err, IngestError::NoValidRows));
    }

    #[test]
    fn test_missing_column_fails_before_rows() {
        let headers: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|c| **c != "halal_confidence")
            .map(|c| c.to_string())
            .collect();
        let err = validate_rows(&headers, &[]).unwrap_err();
        assert!(matches!(err, IngestError::MissingColumns(_)));
    }
}
