//! Audit reports
//!
//! After a successful apply pass two CSV files are written next to each
//! other, named after the input file:
//!
//! - `<base>__applied.csv` - one line per updated place
//! - `<base>__duplicates.csv` - one line per member of each duplicate group,
//!   only when duplicates exist

pub mod writer;

pub use writer::{
    write_applied_report, write_duplicates_report, write_reports, ReportPaths,
    APPLIED_HEADERS, DUPLICATES_HEADERS,
};
