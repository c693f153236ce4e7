// Lookalike domain detection.
//
// A domain one or two edits away from a trusted name is a stronger phishing
// signal than any generic token, which is why the cascade runs this check
// right after the whitelist.

use strsim::normalized_levenshtein;

/// Similarity ratio at or above this counts as a lookalike.
pub const DEFAULT_THRESHOLD: f64 = 0.85;

/// Compare `domain` against each trusted entry in list order and return the
/// first whose normalized edit-distance ratio reaches `threshold`, together
/// with that ratio. Identical strings are skipped; an exact match is the
/// whitelist's business, not a typosquat.
pub fn match_typosquat<'a>(
    domain: &str,
    trusted: &'a [String],
    threshold: f64,
) -> Option<(&'a str, f64)> {
    for safe in trusted {
        if domain == safe.as_str() {
            continue;
        }
        let score = normalized_levenshtein(domain, safe);
        if score >= threshold {
            return Some((safe.as_str(), score));
        }
    }
    None
}
