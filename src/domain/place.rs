//! Place store payloads
//!
//! These types describe what is written to, and read back from, the place
//! table regardless of which backend performs the write.

use super::status::HalalStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The place table, which exists under one of two names depending on the deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetTable {
    /// `public.place`
    Place,
    /// `public.places`
    Places,
}

impl TargetTable {
    /// Candidates in probing order
    pub const CANDIDATES: [TargetTable; 2] = [TargetTable::Place, TargetTable::Places];

    /// Unqualified table name
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetTable::Place => "place",
            TargetTable::Places => "places",
        }
    }

    /// Look up a table by name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::CANDIDATES
            .into_iter()
            .find(|table| table.as_str() == name)
    }
}

impl fmt::Display for TargetTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields written for one place
///
/// Serializes to the JSON body of the REST PATCH; the PostgreSQL backend binds
/// the same fields as statement parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceUpdate {
    pub cc_halal_status: HalalStatus,
    pub cc_halal_likelihood: String,
    pub cc_halal_type: String,
    pub cc_halal_confidence: i32,
    pub cc_note: String,
    pub cc_reasoning_raw: String,
    pub cc_is_zabiha: Option<bool>,
    pub cc_certifier_org: Option<String>,
}

/// Place state before the update, as returned by the store
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PriorPlace {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub halal_status: Option<String>,
}
