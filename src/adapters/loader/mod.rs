//! Row loader
//!
//! Reads the review spreadsheet into [`RawRow`]s. CSV goes through the `csv`
//! crate; XLSX/XLSM through `calamine`, first worksheet only.
//!
//! Headers are trimmed and lower-cased. Rows with nothing but blank cells are
//! dropped. An empty file, or one with only a header, is
//! [`IngestError::NoRows`].

pub mod csv;
pub mod xlsx;

use crate::domain::{CellValue, IngestError, RawRow, Result};
use std::path::{Path, PathBuf};

/// Header row and data rows of the input file
#[derive(Debug, Clone, Default)]
pub struct LoadedSheet {
    /// Normalized column names, in file order
    pub headers: Vec<String>,

    /// Non-blank data rows, in file order
    pub rows: Vec<RawRow>,
}

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Xlsx,
}

impl InputFormat {
    /// Detect the format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(InputFormat::Csv),
            "xlsx" | "xlsm" => Ok(InputFormat::Xlsx),
            "" => Err(IngestError::UnsupportedFileType(format!(
                "{} has no extension",
                path.display()
            ))),
            other => Err(IngestError::UnsupportedFileType(format!(".{other}"))),
        }
    }
}

/// Locate the input file
///
/// A path that is absolute or exists relative to the working directory is
/// used as given; otherwise it is looked up inside `data_dir`.
///
/// # Errors
///
/// Returns a configuration error if the file exists in neither place.
pub fn resolve_input_path(file: &Path, data_dir: &Path) -> Result<PathBuf> {
    if file.is_absolute() || file.exists() {
        if file.is_file() {
            return Ok(file.to_path_buf());
        }
        return Err(IngestError::Configuration(format!(
            "Input file not found: {}",
            file.display()
        )));
    }

    let candidate = data_dir.join(file);
    if candidate.is_file() {
        return Ok(candidate);
    }

    Err(IngestError::Configuration(format!(
        "Input file not found: {} (also looked in {})",
        file.display(),
        data_dir.display()
    )))
}

/// Load every non-blank row of the input file
///
/// # Errors
///
/// - [`IngestError::UnsupportedFileType`] for anything but CSV/XLSX/XLSM
/// - [`IngestError::Load`] if the file cannot be decoded
/// - [`IngestError::NoRows`] if there is no data row
pub fn load_rows(path: &Path) -> Result<LoadedSheet> {
    let format = InputFormat::from_path(path)?;
    let sheet = match format {
        InputFormat::Csv => csv::load_csv(path)?,
        InputFormat::Xlsx => xlsx::load_xlsx(path)?,
    };

    if sheet.rows.is_empty() {
        return Err(IngestError::NoRows);
    }

    tracing::info!(
        path = %path.display(),
        ?format,
        columns = sheet.headers.len(),
        rows = sheet.rows.len(),
        "Input file loaded"
    );
    Ok(sheet)
}

/// Trim and lower-case a header cell
pub(crate) fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

/// Assemble a sheet from physical lines of cells, the first being the header
///
/// Each item is `(source_line, cells)`.
pub(crate) fn build_sheet<I>(lines: I) -> LoadedSheet
where
    I: IntoIterator<Item = (usize, Vec<CellValue>)>,
{
    let mut lines = lines.into_iter();
    let Some((_, header_cells)) = lines.next() else {
        return LoadedSheet::default();
    };

    let headers: Vec<String> = header_cells
        .iter()
        .map(|cell| normalize_header(&cell.to_string()))
        .collect();

    let rows = lines
        .map(|(line, cells)| RawRow::from_cells(line, &headers, cells))
        .filter(|row| !row.is_blank())
        .collect();

    LoadedSheet { headers, rows }
}
