//! Evidence sentence selection

use super::patterns::{
    contains_any, ALCOHOL_KEYWORDS, CERTIFICATION_KEYWORDS, DIRECTORY_KEYWORDS,
    NEGATIVE_KEYWORDS, OFFICIAL_KEYWORDS, PORK_KEYWORDS, REVIEW_KEYWORDS, ZABIHA_TOKENS,
};
use crate::domain::HalalStatus;

/// Pick the single sentence that best explains the status
///
/// Rules are checked in priority order and the first match wins. Returns
/// `None` when the reasoning carries no recognizable evidence.
pub fn select_evidence(
    status: HalalStatus,
    reasoning: &str,
    certifier: Option<&str>,
) -> Option<String> {
    let lowered = reasoning.to_lowercase();

    if status == HalalStatus::No {
        return Some(negative_evidence(&lowered).to_string());
    }

    if let Some(org) = certifier {
        return Some(format!("Certified by {org}."));
    }

    let sentence = if contains_any(&lowered, CERTIFICATION_KEYWORDS) {
        "Certified halal."
    } else if contains_any(&lowered, OFFICIAL_KEYWORDS) {
        "Official info indicates halal."
    } else if contains_any(&lowered, ZABIHA_TOKENS) {
        "Listed on Zabiha."
    } else if contains_any(&lowered, DIRECTORY_KEYWORDS) {
        "Listed in a halal directory."
    } else if contains_any(&lowered, REVIEW_KEYWORDS) {
        "Reviews mention halal."
    } else {
        return None;
    };
    Some(sentence.to_string())
}

fn negative_evidence(lowered: &str) -> &'static str {
    if contains_any(lowered, NEGATIVE_KEYWORDS) {
        "Marked as not halal."
    } else if contains_any(lowered, PORK_KEYWORDS) {
        "Menu mentions pork."
    } else if contains_any(lowered, ALCOHOL_KEYWORDS) {
        "Serves alcohol."
    } else {
        "Evidence suggests not halal."
    }
}
