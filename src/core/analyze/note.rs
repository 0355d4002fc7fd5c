//! Human-readable note composition

use crate::domain::HalalStatus;
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum note length in characters
pub const NOTE_MAX_CHARS: usize = 350;

const ELLIPSIS: &str = "...";

static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)https?://\S+|www\.\S+").expect("URL pattern is valid"));

/// Remove URLs and surrounding whitespace
pub fn strip_urls(text: &str) -> String {
    URL_PATTERN.replace_all(text, "").trim().to_string()
}

/// Cut `text` to at most `limit` characters, ending in "..." when cut
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let kept: String = text.chars().take(limit - ELLIPSIS.len()).collect();
    format!("{}{ELLIPSIS}", kept.trim_end())
}

/// Compose the note stored in `cc_note`
///
/// Sentences: the status label, the evidence sentence (URLs removed), a
/// Zabiha line unless the evidence already mentions it, and a fallback line
/// for unclear places. The result never exceeds [`NOTE_MAX_CHARS`].
pub fn build_note(status: HalalStatus, evidence: Option<&str>, is_zabiha: Option<bool>) -> String {
    let mut sentences = vec![format!("Halal: {}.", status.note_label())];

    if let Some(evidence) = evidence {
        let cleaned = strip_urls(evidence);
        if !cleaned.is_empty() {
            if cleaned.ends_with('.') {
                sentences.push(cleaned);
            } else {
                sentences.push(format!("{cleaned}."));
            }
        }
    }

    let evidence_mentions_zabiha =
        evidence.is_some_and(|text| text.to_lowercase().contains("zabiha"));
    if is_zabiha == Some(true) && !evidence_mentions_zabiha {
        sentences.push("Listed on Zabiha.".to_string());
    }

    if status == HalalStatus::Unclear {
        sentences.push("No official menu/certification found.".to_string());
    }

    truncate(&sentences.join(" "), NOTE_MAX_CHARS)
}
