//! Zabiha and certifier signals extracted from reasoning text

use super::patterns::{contains_any, CERTIFIERS, ZABIHA_NEGATIVE_PHRASES, ZABIHA_TOKENS};

/// Whether the reasoning says the place is listed on Zabiha
///
/// `None` when Zabiha is never mentioned, `Some(false)` when it is mentioned
/// with a negative phrase such as "not listed on zabiha".
pub fn extract_is_zabiha(reasoning: &str) -> Option<bool> {
    let lowered = reasoning.to_lowercase();
    if !contains_any(&lowered, ZABIHA_TOKENS) {
        return None;
    }
    Some(!contains_any(&lowered, ZABIHA_NEGATIVE_PHRASES))
}

/// Find the certifying body named in the reasoning
///
/// A certifier inside the "certified by ..." clause (up to the next period)
/// wins; otherwise the alias occurring earliest anywhere in the text.
pub fn extract_certifier(reasoning: &str) -> Option<&'static str> {
    let lowered = reasoning.to_lowercase();

    if let Some(segment) = certified_by_segment(&lowered) {
        let named = CERTIFIERS
            .iter()
            .find(|certifier| contains_any(segment, certifier.aliases));
        if let Some(certifier) = named {
            return Some(certifier.code);
        }
    }

    let mut earliest: Option<(usize, &'static str)> = None;
    for certifier in CERTIFIERS {
        for alias in certifier.aliases {
            if let Some(idx) = lowered.find(alias) {
                if earliest.map_or(true, |(best, _)| idx < best) {
                    earliest = Some((idx, certifier.code));
                }
            }
        }
    }
    earliest.map(|(_, code)| code)
}

fn certified_by_segment(lowered: &str) -> Option<&str> {
    let start = lowered.find("certified by")?;
    let rest = &lowered[start..];
    let end = rest.find('.').unwrap_or(rest.len());
    Some(&rest[..end])
}
