//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main ingestion error type
///
/// Every fatal condition of a run ends up here. Per-row validation problems
/// and ids missing from the store are not errors; they are collected in the
/// run summary instead.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Configuration-related errors (credentials, paths, config file)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input file extension is not CSV or XLSX
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// Input file could not be decoded
    #[error("Failed to load input file: {0}")]
    Load(String),

    /// Input file has no data rows
    #[error("No rows found in file")]
    NoRows,

    /// Required columns are absent from the header row
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// Every row failed validation
    #[error("No valid rows to process after validation")]
    NoValidRows,

    /// Write backend errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The number of rows the store confirmed does not match the rows expected
    #[error(
        "Update count mismatch: expected {expected}, updated {updated}, rolled back: {rolled_back}"
    )]
    CountMismatch {
        expected: usize,
        updated: usize,
        unconfirmed_ids: Vec<String>,
        rolled_back: bool,
    },

    /// Report writing errors
    #[error("Report error: {0}")]
    Report(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl IngestError {
    /// Process exit code for this error
    ///
    /// Every failure after the `--apply` gate exits with 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Write backend errors
///
/// Errors raised by the PostgreSQL and REST backends. These don't expose
/// driver or HTTP client types.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to connect to the store
    #[error("Failed to connect: {0}")]
    ConnectionFailed(String),

    /// Neither `place` nor `places` exists
    #[error("Neither public.place nor public.places exists ({0})")]
    TargetNotFound(String),

    /// Credentials were rejected while probing
    #[error("Authorization failed: {0}")]
    Unauthorized(String),

    /// SQL statement failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// HTTP request returned an unexpected status
    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    /// Response could not be interpreted
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// BEGIN/COMMIT/ROLLBACK failed
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),
}

impl From<std::io::Error> for IngestError {
    fn from(err: std::io::Error) -> Self {
        IngestError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for IngestError {
    fn from(err: serde_json::Error) -> Self {
        IngestError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for IngestError {
    fn from(err: toml::de::Error) -> Self {
        IngestError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        IngestError::Load(err.to_string())
    }
}
