//! Likelihood/type to canonical status mapping

use crate::domain::HalalStatus;

/// Map the raw likelihood and type to a canonical status
///
/// Both inputs are trimmed and compared case-insensitively. Anything other
/// than the three recognized combinations maps to [`HalalStatus::Unclear`].
pub fn map_status(likelihood: &str, halal_type: &str) -> HalalStatus {
    let likelihood = likelihood.trim().to_uppercase();
    let halal_type = halal_type.trim().to_uppercase();

    match (likelihood.as_str(), halal_type.as_str()) {
        ("LIKELY_HALAL", "FULLY_HALAL") => HalalStatus::Only,
        ("LIKELY_HALAL", "HALAL_OPTIONS_ONLY") => HalalStatus::Yes,
        ("LIKELY_NOT_HALAL", _) => HalalStatus::No,
        _ => HalalStatus::Unclear,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("LIKELY_HALAL", "FULLY_HALAL", HalalStatus::Only ; "fully halal")]
    #[test_case("LIKELY_HALAL", "HALAL_OPTIONS_ONLY", HalalStatus::Yes ; "options only")]
    #[test_case("LIKELY_NOT_HALAL", "FULLY_HALAL", HalalStatus::No ; "not halal ignores type")]
    #[test_case("LIKELY_NOT_HALAL", "", HalalStatus::No ; "not halal empty type")]
    #[test_case("LIKELY_HALAL", "UNKNOWN", HalalStatus::Unclear ; "halal unknown type")]
    #[test_case("UNCLEAR", "FULLY_HALAL", HalalStatus::Unclear ; "unclear likelihood")]
    #[test_case(" likely_halal ", "fully_halal", HalalStatus::Only ; "case and whitespace")]
    fn test_map_status(likelihood: &str, halal_type: &str, expected: HalalStatus) {
        assert_eq!(map_status(likelihood, halal_type), expected);
    }
}
