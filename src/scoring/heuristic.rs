// Additive risk heuristic over URL structure.
//
// This is the deterministic half of the blended score. It reads the same
// parsed parts the cascade reads but produces a probability-like value
// instead of a verdict. The weights are tuned so that structure alone can
// push a URL toward suspicion but never condemn it outright: the total is
// clamped to MAX_SCORE and the final call always involves the model.

use crate::rules::lists::WatchLists;
use crate::urls::UrlParts;

/// Ceiling for the heuristic contribution.
pub const MAX_SCORE: f64 = 0.5;

const RISKY_HOST_BONUS: f64 = 0.2;
const DEEP_SUBDOMAIN_BONUS: f64 = 0.15;
const HYPHEN_BONUS: f64 = 0.1;
const PLAIN_HTTP_BONUS: f64 = 0.1;
const KEYWORD_BONUS: f64 = 0.2;
const LOGIN_PATH_BONUS: f64 = 0.15;
const ACCOUNT_PATH_BONUS: f64 = 0.1;

/// Path tokens that mark a credential prompt rather than generic bait.
const LOGIN_TOKENS: &[&str] = &["login", "signin", "sign-in"];

/// Score one URL's structure in [0.0, MAX_SCORE].
pub fn score(parts: &UrlParts, lists: &WatchLists) -> f64 {
    let mut score = 0.0;

    if lists
        .risky_hosts
        .iter()
        .any(|risky| parts.host.contains(risky.as_str()))
    {
        score += RISKY_HOST_BONUS;
    }
    if parts.host.matches('.').count() > 3 {
        score += DEEP_SUBDOMAIN_BONUS;
    }
    if parts.host.matches('-').count() > 2 {
        score += HYPHEN_BONUS;
    }
    if parts.scheme == "http" {
        score += PLAIN_HTTP_BONUS;
    }
    if lists.keyword_hit(&parts.path, &parts.query) {
        score += KEYWORD_BONUS;
        if LOGIN_TOKENS.iter().any(|t| parts.path.contains(t)) {
            score += LOGIN_PATH_BONUS;
        }
        if parts.path.contains("account") {
            score += ACCOUNT_PATH_BONUS;
        }
    }

    score.min(MAX_SCORE)
}
