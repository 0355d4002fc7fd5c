//! Canonical halal status

use serde::{Deserialize, Serialize};
use std::fmt;

/// Four-way halal classification written to `cc_halal_status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HalalStatus {
    /// Fully halal menu
    Only,
    /// Halal options available
    Yes,
    /// Not halal
    No,
    /// Not enough evidence either way
    Unclear,
}

impl HalalStatus {
    /// Value stored in the database and written to reports
    pub fn as_str(&self) -> &'static str {
        match self {
            HalalStatus::Only => "only",
            HalalStatus::Yes => "yes",
            HalalStatus::No => "no",
            HalalStatus::Unclear => "unclear",
        }
    }

    /// Label used in the first sentence of the composed note
    pub fn note_label(&self) -> &'static str {
        match self {
            HalalStatus::Only => "Fully",
            HalalStatus::Yes => "Options",
            HalalStatus::No | HalalStatus::Unclear => "Unclear",
        }
    }
}

impl fmt::Display for HalalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(HalalStatus::Only.as_str(), "only");
        assert_eq!(HalalStatus::Yes.as_str(), "yes");
        assert_eq!(HalalStatus::No.as_str(), "no");
        assert_eq!(HalalStatus::Unclear.to_string(), "unclear");
    }

    #[test]
    fn test_note_label() {
        assert_eq!(HalalStatus::Only.note_label(), "Fully");
        assert_eq!(HalalStatus::Yes.note_label(), "Options");
        assert_eq!(HalalStatus::No.note_label(), "Unclear");
        assert_eq!(HalalStatus::Unclear.note_label(), "Unclear");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&HalalStatus::Only).unwrap();
        assert_eq!(json, "\"only\"");
    }
}
