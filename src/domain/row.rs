//! Input row types
//!
//! A [`RawRow`] is what the loader produced for one line of the input file.
//! The validator turns it into a [`ValidatedRow`] or an [`InvalidRow`].

use std::collections::HashMap;
use std::fmt;

/// One spreadsheet cell as decoded by the loader
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Blank cell or a cell past the end of a short record
    Empty,
    /// Text cell (CSV cells are always text)
    Text(String),
    /// Integer cell
    Int(i64),
    /// Floating point cell
    Float(f64),
    /// Boolean cell
    Bool(bool),
}

impl CellValue {
    /// Returns true if the cell holds nothing but whitespace
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(text) => f.write_str(text),
            CellValue::Int(value) => write!(f, "{value}"),
            // Spreadsheets store numeric ids as floats; `42.0` must read back as `42`
            CellValue::Float(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
                write!(f, "{}", *value as i64)
            }
            CellValue::Float(value) => write!(f, "{value}"),
            CellValue::Bool(value) => write!(f, "{value}"),
        }
    }
}

/// One record as loaded, keyed by normalized column name
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    /// 1-based physical line in the input file (the header is line 1)
    pub source_line: usize,

    cells: HashMap<String, CellValue>,
}

impl RawRow {
    /// Create a row from normalized headers and cell values
    ///
    /// Cells past the end of `values` are treated as empty.
    pub fn from_cells(source_line: usize, headers: &[String], values: Vec<CellValue>) -> Self {
        let mut values = values.into_iter();
        let cells = headers
            .iter()
            .map(|header| (header.clone(), values.next().unwrap_or(CellValue::Empty)))
            .collect();
        Self { source_line, cells }
    }

    /// Get a cell by normalized column name
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Get a cell rendered as text, empty if absent
    pub fn text(&self, column: &str) -> String {
        self.get(column).map(ToString::to_string).unwrap_or_default()
    }

    /// Returns true if every cell is blank
    pub fn is_blank(&self) -> bool {
        self.cells.values().all(CellValue::is_blank)
    }
}

/// A row that passed validation
///
/// String fields are non-empty after trimming. `reasoning_raw` keeps the
/// original text untouched because it is written back to the store verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRow {
    pub source_line: usize,
    pub id: String,
    pub name: String,
    pub likelihood_raw: String,
    pub type_raw: String,
    pub confidence: i32,
    pub reasoning_raw: String,
}

/// A row skipped by validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRow {
    pub source_line: usize,
    pub id: String,
    pub name: String,
}
