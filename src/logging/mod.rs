//! Logging and observability
//!
//! Structured logging through `tracing`:
//! - Console output on stderr
//! - Configurable log levels (`--log-level`, `RUST_LOG`)
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use halal_ingest::logging::init_logging;
//! use halal_ingest::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(rows = 42, "Input file loaded");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use halal_ingest::log_error_with_context;
/// use halal_ingest::domain::IngestError;
///
/// let error = IngestError::NoValidRows;
/// log_error_with_context!(&error, "Ingest failed");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
