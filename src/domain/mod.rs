//! Domain models and types for halal-ingest.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Row types** ([`RawRow`], [`ValidatedRow`], [`InvalidRow`]) for the input file
//! - **Canonical status** ([`HalalStatus`]) written to the place store
//! - **Store payloads** ([`PlaceUpdate`], [`PriorPlace`], [`TargetTable`])
//! - **Error types** ([`IngestError`], [`StoreError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, IngestError>`]:
//!
//! ```rust
//! use halal_ingest::domain::{IngestError, Result};
//!
//! fn example(rows: usize) -> Result<()> {
//!     if rows == 0 {
//!         return Err(IngestError::NoValidRows);
//!     }
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod place;
pub mod result;
pub mod row;
pub mod status;

pub use errors::{IngestError, StoreError};
pub use place::{PlaceUpdate, PriorPlace, TargetTable};
pub use result::Result;
pub use row::{CellValue, InvalidRow, RawRow, ValidatedRow};
pub use status::HalalStatus;
