//! XLSX/XLSM input

use super::{build_sheet, LoadedSheet};
use crate::domain::{CellValue, IngestError, Result};
use calamine::{open_workbook_auto, Data, Reader, Sheets};
use std::path::Path;

/// Read the first worksheet of a workbook
pub fn load_xlsx(path: &Path) -> Result<LoadedSheet> {
    let mut workbook: Sheets<_> = open_workbook_auto(path)
        .map_err(|e| IngestError::Load(format!("Failed to open Excel file: {}", e)))?;

    let Some(sheet_name) = workbook.sheet_names().first().cloned() else {
        return Ok(LoadedSheet::default());
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| IngestError::Load(format!("Failed to read sheet '{}': {}", sheet_name, e)))?;

    // Range start offset (data may not begin at A1)
    let (start_row, start_col) = range.start().unwrap_or((0, 0));
    let leading = vec![CellValue::Empty; start_col as usize];

    let lines = range.rows().enumerate().map(|(idx, row)| {
        let line = start_row as usize + idx + 1;
        let cells = leading
            .iter()
            .cloned()
            .chain(row.iter().map(cell_value))
            .collect();
        (line, cells)
    });

    Ok(build_sheet(lines))
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) if s.is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(n) => CellValue::Int(*n),
        Data::Float(n) => CellValue::Float(*n),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Float(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(format!("#{:?}", e)),
    }
}
