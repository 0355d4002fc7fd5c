//! CSV input

use super::{build_sheet, LoadedSheet};
use crate::domain::{CellValue, IngestError, Result};
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

/// Read a CSV file
///
/// Records may be shorter or longer than the header. Every cell is text.
pub fn load_csv(path: &Path) -> Result<LoadedSheet> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::Load(format!("{}: {}", path.display(), e)))?;

    let mut lines = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            IngestError::Load(format!("CSV parse error in {}: {}", path.display(), e))
        })?;

        let line = record
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(idx + 1);

        let cells = record
            .iter()
            .enumerate()
            .map(|(col, field)| {
                let field = if idx == 0 && col == 0 {
                    field.trim_start_matches(UTF8_BOM)
                } else {
                    field
                };
                if field.is_empty() {
                    CellValue::Empty
                } else {
                    CellValue::Text(field.to_string())
                }
            })
            .collect();

        lines.push((line, cells));
    }

    Ok(build_sheet(lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("input.csv");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_bom_is_stripped_from_first_header() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "\u{feff}ID,Name\n1,Al Baraka\n");

        let sheet = load_csv(&path).unwrap();
        assert_eq!(sheet.headers, vec!["id", "name"]);
        assert_eq!(sheet.rows[0].text("id"), "1");
    }

    #[test]
    fn test_source_line_counts_physical_lines() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "id,halal_reasoning\n1,\"line one\nline two\"\n,\n2,plain\n",
        );

        let sheet = load_csv(&path).unwrap();
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[0].source_line, 2);
        assert_eq!(sheet.rows[0].text("halal_reasoning"), "line one\nline two");
        assert_eq!(sheet.rows[1].source_line, 5);
    }

    #[test]
    fn test_short_records_are_padded() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "id,name,notes\n7\n");

        let sheet = load_csv(&path).unwrap();
        assert_eq!(sheet.rows[0].text("name"), "");
    }

    #[test]
    fn test_empty_file_has_no_rows() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "");

        let sheet = load_csv(&path).unwrap();
        assert!(sheet.headers.is_empty());
        assert!(sheet.rows.is_empty());
    }
}
