//! Keyword tables for reasoning text
//!
//! All patterns are lowercase and matched as substrings of the lowercased
//! reasoning. Table order matters: when two certifiers match at the same
//! position the earlier entry wins.

/// A halal certifying body and the aliases it is mentioned by
#[derive(Debug, Clone, Copy)]
pub struct Certifier {
    /// Canonical code written to `cc_certifier_org`
    pub code: &'static str,
    pub aliases: &'static [&'static str],
}

pub const CERTIFIERS: &[Certifier] = &[
    Certifier {
        code: "SBNY",
        aliases: &["sbny", "shariah board", "shariah board ny"],
    },
    Certifier {
        code: "HMS",
        aliases: &["hms"],
    },
    Certifier {
        code: "HFSAA",
        aliases: &["hfsaa"],
    },
    Certifier {
        code: "IFANCA",
        aliases: &["ifanca", "islamic food and nutrition council"],
    },
];

pub const ZABIHA_TOKENS: &[&str] = &["zabiha", "zabihah"];

pub const ZABIHA_NEGATIVE_PHRASES: &[&str] = &[
    "not listed on zabiha",
    "not on zabiha",
    "no zabiha",
    "not listed in zabiha",
    "not listed on zabihah",
];

pub const CERTIFICATION_KEYWORDS: &[&str] = &["certified", "certification"];

pub const OFFICIAL_KEYWORDS: &[&str] = &[
    "official",
    "website",
    "menu",
    "sign",
    "signage",
    "owner",
    "staff",
    "phone",
    "call",
    "email",
    "instagram",
    "facebook",
];

pub const DIRECTORY_KEYWORDS: &[&str] = &[
    "halaltrip",
    "muslim pro",
    "muslimpro",
    "halal guide",
    "halalfood",
    "crescent",
    "halal directory",
];

pub const REVIEW_KEYWORDS: &[&str] = &[
    "review",
    "reviews",
    "yelp",
    "google review",
    "tripadvisor",
];

pub const NEGATIVE_KEYWORDS: &[&str] = &["not halal", "non-halal", "non halal"];

pub const PORK_KEYWORDS: &[&str] = &["pork", "bacon", "ham", "pepperoni"];

pub const ALCOHOL_KEYWORDS: &[&str] = &[
    "serves alcohol",
    "alcohol",
    "beer",
    "wine",
    "cocktail",
    "liquor",
];

/// Returns true if `haystack` contains any of `needles`
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
