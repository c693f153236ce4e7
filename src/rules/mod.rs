// Ordered rule cascade, terminal on first match.
//
// The cascade runs before any model scoring. Each check is a total function
// from the parsed URL to an optional verdict; the first one that fires
// decides the request and later checks never run. The order is part of the
// contract: cheap, high-precision signals (exact whitelist match, IP
// literal) come before fuzzy or substring ones, and the typosquat check
// outranks TLD and keyword checks because a near-identical domain is a
// stronger signal than generic suspicious tokens.

pub mod lists;
pub mod similarity;

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::urls::UrlParts;
use crate::verdict::{Classification, Verdict};
use lists::WatchLists;

// Fully anchored: the whole host must be a dotted quad. A host with a port
// or trailing labels is not an IP literal for this rule.
static DOTTED_QUAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,3}(\.\d{1,3}){3}$").expect("valid regex"));

/// Run the cascade against one URL. Returns the first rule hit, or None
/// when no rule fired and the decision falls to the blended scorer.
pub fn evaluate(url: &str, parts: &UrlParts, lists: &WatchLists) -> Option<Classification> {
    check_whitelist(parts, lists)
        .or_else(|| check_typosquat(&parts.host, lists))
        .or_else(|| check_ip_literal(&parts.host))
        .or_else(|| check_shortener(&parts.host, lists))
        .or_else(|| check_suspicious_tld(&parts.host, lists))
        .or_else(|| check_subdomain_depth(&parts.host))
        .or_else(|| check_brand_misuse(url, &parts.host, lists))
        .or_else(|| check_keywords(parts, lists))
}

/// Rule 1: trusted domains are safe, but only over HTTPS and only when the
/// path and query carry no credential-bait tokens.
pub fn check_whitelist(parts: &UrlParts, lists: &WatchLists) -> Option<Classification> {
    let trusted = lists.trusted_match(&parts.host)?;
    if parts.scheme != "https" {
        return Some(Classification::from_rule(
            Verdict::Suspicious,
            "85",
            format!("Trusted domain ({trusted}) but using insecure HTTP protocol"),
        ));
    }
    if lists.keyword_hit(&parts.path, &parts.query) {
        return Some(Classification::from_rule(
            Verdict::Suspicious,
            "75",
            "Suspicious keywords on trusted domain",
        ));
    }
    Some(Classification::from_rule(
        Verdict::Safe,
        "99.9",
        format!("Known trusted domain ({trusted}) with HTTPS"),
    ))
}

/// Rule 2: a host within edit distance of a trusted domain.
pub fn check_typosquat(host: &str, lists: &WatchLists) -> Option<Classification> {
    let (matched, score) =
        similarity::match_typosquat(host, &lists.trusted_domains, similarity::DEFAULT_THRESHOLD)?;
    Some(Classification::from_rule(
        Verdict::Unsafe,
        format!("{:.1}", score * 100.0),
        format!("Possible typosquatting of {matched}"),
    ))
}

/// Rule 3: raw IP literals have no place in legitimate links.
pub fn check_ip_literal(host: &str) -> Option<Classification> {
    if !DOTTED_QUAD.is_match(host) {
        return None;
    }
    Some(Classification::from_rule(
        Verdict::Unsafe,
        "95",
        "IP address used instead of domain",
    ))
}

/// Rule 4: known shortener hosts hide their destination.
pub fn check_shortener(host: &str, lists: &WatchLists) -> Option<Classification> {
    if !lists.shorteners.iter().any(|s| s == host) {
        return None;
    }
    Some(Classification::from_rule(
        Verdict::Suspicious,
        "85",
        "URL shortener used",
    ))
}

/// Rule 5: cheap TLDs favored by throwaway registrations.
pub fn check_suspicious_tld(host: &str, lists: &WatchLists) -> Option<Classification> {
    if !lists
        .suspicious_tlds
        .iter()
        .any(|tld| host.ends_with(tld.as_str()))
    {
        return None;
    }
    Some(Classification::from_rule(
        Verdict::Suspicious,
        "80",
        "Suspicious top-level domain",
    ))
}

/// Rule 6: hosts with four or more dots are almost always generated chains.
pub fn check_subdomain_depth(host: &str) -> Option<Classification> {
    if host.matches('.').count() < 4 {
        return None;
    }
    Some(Classification::from_rule(
        Verdict::Unsafe,
        "90",
        "Too many subdomains detected",
    ))
}

/// Rule 7: a brand name somewhere in the URL while the host itself does not
/// carry it. Runs on the full lower-cased URL so path and query bait count.
pub fn check_brand_misuse(url: &str, host: &str, lists: &WatchLists) -> Option<Classification> {
    let url_lower = url.to_lowercase();
    let brand = lists
        .brands
        .iter()
        .find(|b| url_lower.contains(b.as_str()) && !host.contains(b.as_str()))?;
    Some(Classification::from_rule(
        Verdict::Unsafe,
        "92",
        format!("Brand impersonation detected ({brand})"),
    ))
}

/// Rule 8: credential-bait tokens in the path or query of an untrusted
/// host. Trusted hosts never reach this far; the whitelist already
/// short-circuited them.
pub fn check_keywords(parts: &UrlParts, lists: &WatchLists) -> Option<Classification> {
    if !lists.keyword_hit(&parts.path, &parts.query) {
        return None;
    }
    Some(Classification::from_rule(
        Verdict::Suspicious,
        "82",
        "Suspicious keywords in URL",
    ))
}
