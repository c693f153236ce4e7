// Reference lists consulted by the rule cascade and the heuristic scorer.
//
// These are process-lifetime read-only data. The defaults below are the
// production lists; tests inject smaller ones to pin down ordering and
// matching semantics. List order matters in two places: the whitelist and
// the typosquat matcher both return the first entry that matches.

/// Domains trusted outright (first match wins, subdomains included).
pub const TRUSTED_DOMAINS: &[&str] = &[
    "google.com",
    "github.com",
    "amazon.com",
    "paypal.com",
    "microsoft.com",
    "apple.com",
    "facebook.com",
    "twitter.com",
    "linkedin.com",
    "youtube.com",
    "gpt.com",
    "openai.com",
    "chat.openai.com",
    "stackoverflow.com",
    "example.com",
    "wikipedia.org",
    "reddit.com",
];

/// Free-hosting suffixes frequently used for throwaway phishing pages.
pub const RISKY_HOSTS: &[&str] = &[
    "github.io",
    "vercel.app",
    "netlify.app",
    "pages.dev",
    "firebaseapp.com",
];

pub const URL_SHORTENERS: &[&str] = &[
    "bit.ly", "tinyurl.com", "goo.gl", "t.co", "ow.ly", "is.gd", "buff.ly",
];

pub const SUSPICIOUS_TLDS: &[&str] = &[
    ".xyz", ".top", ".club", ".online", ".site", ".info", ".biz", ".ru", ".cn", ".tk",
];

pub const BRANDS: &[&str] = &[
    "google", "paypal", "amazon", "facebook", "microsoft", "apple", "instagram", "twitter",
];

/// Tokens in a path or query that suggest login or credential capture flows.
pub const SUSPICIOUS_WORDS: &[&str] = &[
    "login",
    "signin",
    "sign-in",
    "sign_in",
    "account",
    "verify",
    "verification",
    "update",
    "secure",
    "security",
    "reset",
    "password",
    "passcode",
    "otp",
    "2fa",
    "bank",
    "banking",
    "payment",
    "billing",
    "invoice",
    "support",
    "appeal",
    "free",
    "gift",
    "bonus",
    "prize",
    "reward",
    "claim",
    "offer",
    "urgent",
    "limited",
    "suspend",
    "unlock",
];

/// The six reference lists bundled for the cascade and heuristic.
#[derive(Debug, Clone)]
pub struct WatchLists {
    pub trusted_domains: Vec<String>,
    pub risky_hosts: Vec<String>,
    pub shorteners: Vec<String>,
    pub suspicious_tlds: Vec<String>,
    pub brands: Vec<String>,
    pub suspicious_words: Vec<String>,
}

impl Default for WatchLists {
    fn default() -> Self {
        Self {
            trusted_domains: owned(TRUSTED_DOMAINS),
            risky_hosts: owned(RISKY_HOSTS),
            shorteners: owned(URL_SHORTENERS),
            suspicious_tlds: owned(SUSPICIOUS_TLDS),
            brands: owned(BRANDS),
            suspicious_words: owned(SUSPICIOUS_WORDS),
        }
    }
}

impl WatchLists {
    /// First trusted entry the host equals or is a subdomain of.
    pub fn trusted_match(&self, host: &str) -> Option<&str> {
        for safe in &self.trusted_domains {
            if host == safe.as_str() || host.ends_with(&format!(".{safe}")) {
                return Some(safe.as_str());
            }
        }
        None
    }

    /// True when any suspicious word appears in the lower-cased path or query.
    pub fn keyword_hit(&self, path: &str, query: &str) -> bool {
        self.suspicious_words
            .iter()
            .any(|w| path.contains(w.as_str()) || query.contains(w.as_str()))
    }
}

fn owned(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|s| s.to_string()).collect()
}
