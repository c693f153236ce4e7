// Lexical feature extraction for the statistical scorer.
//
// The extractor is part of the fitted model's contract: the scaler and the
// linear weights were trained against exactly these 19 values in exactly
// this order. The keyword and TLD lists below are frozen with the model and
// deliberately differ from the rule cascade's lists; changing them without
// refitting would silently skew every blended score.
//
// Measurements run against the authority as written (www. included), not
// the normalized host the rules use, because that is what the model saw
// during training.

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::urls::UrlParts;

/// Width of the structural feature vector. The scaler and model artifacts
/// are validated against this at load time.
pub const FEATURE_COUNT: usize = 19;

/// Tokens whose presence anywhere in the lower-cased URL sets feature 12.
const FEATURE_KEYWORDS: &[&str] = &[
    "login", "verify", "update", "secure", "account", "signin", "confirm",
    "password", "bank", "paypal", "alert", "free", "gift", "claim",
];

const BENIGN_TLDS: &[&str] = &[".com", ".org", ".net", ".edu", ".gov"];

const RISKY_TLDS: &[&str] = &[
    ".xyz", ".top", ".club", ".online", ".site", ".info", ".biz", ".ru", ".cn",
];

// Anchored at the start only: "1.2.3.4.evil.com" counts as numeric here,
// while the cascade's IP rule requires the whole host to be a dotted quad.
static NUMERIC_HOST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\d+\.\d+\.\d+").expect("valid regex"));

/// Extract the 19 structural features for a URL.
///
/// Total function: any input produces a full-width vector, and an empty
/// input produces all zeros. Lengths and counts are measured in characters,
/// not bytes.
pub fn extract(url: &str) -> [f64; FEATURE_COUNT] {
    if url.is_empty() {
        return [0.0; FEATURE_COUNT];
    }

    let parts = UrlParts::parse(url);
    let domain = parts.authority.as_str();
    let url_lower = url.to_lowercase();
    let url_len = url.chars().count();
    let digit_count = url.chars().filter(|c| c.is_ascii_digit()).count();
    let tail: String = url.chars().skip(8).collect();

    [
        // Lengths
        url_len as f64,
        domain.chars().count() as f64,
        parts.path.chars().count() as f64,
        parts.query.chars().count() as f64,
        // Domain shape
        domain.matches('.').count() as f64,
        domain.split('.').count() as f64,
        domain.matches('-').count() as f64,
        // TLD class
        flag(BENIGN_TLDS.iter().any(|t| domain.ends_with(t))),
        flag(RISKY_TLDS.iter().any(|t| domain.ends_with(t))),
        // Protocol
        flag(parts.scheme == "https"),
        flag(parts.scheme == "http"),
        // Credential-bait tokens
        flag(FEATURE_KEYWORDS.iter().any(|w| url_lower.contains(w))),
        // Special characters
        url.matches('@').count() as f64,
        url.matches('_').count() as f64,
        // "//" past the scheme separator suggests an embedded redirect
        flag(tail.contains("//")),
        // Digits
        digit_count as f64 / url_len as f64,
        flag(NUMERIC_HOST.is_match(domain)),
        // Encoded and unusual characters
        flag(url.contains("%20") || url.contains("%3a")),
        flag(url.contains('~')),
    ]
}

fn flag(condition: bool) -> f64 {
    if condition {
        1.0
    } else {
        0.0
    }
}
