// Verdict bands and the classification result payload.
//
// These are the types that flow out of the engine. They're separate from
// the rule and scoring modules so the web layer and CLI can use them
// without depending on either.

use serde::{Deserialize, Serialize};

/// Final probability at or above this is unsafe.
pub const UNSAFE_THRESHOLD: f64 = 0.85;
/// Final probability at or above this (but below unsafe) is suspicious.
pub const SUSPICIOUS_THRESHOLD: f64 = 0.6;

/// Three-valued risk verdict. Variant order is severity order, so
/// comparisons like `Verdict::Safe < Verdict::Unsafe` hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Safe,
    Suspicious,
    Unsafe,
}

impl Verdict {
    /// Band a blended probability into a verdict. Lower bounds are closed:
    /// exactly 0.85 is unsafe and exactly 0.6 is suspicious. Anything that
    /// fails both comparisons, including NaN, falls through to safe.
    pub fn from_probability(probability: f64) -> Self {
        match probability {
            p if p >= UNSAFE_THRESHOLD => Verdict::Unsafe,
            p if p >= SUSPICIOUS_THRESHOLD => Verdict::Suspicious,
            _ => Verdict::Safe,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Safe => "safe",
            Verdict::Suspicious => "suspicious",
            Verdict::Unsafe => "unsafe",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Verdict {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "safe" => Ok(Verdict::Safe),
            "suspicious" => Ok(Verdict::Suspicious),
            "unsafe" => Ok(Verdict::Unsafe),
            other => anyhow::bail!("Unknown verdict label: {other}"),
        }
    }
}

/// Score breakdown attached to blended results for observability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetails {
    /// Model probability of the phishing class, rounded to 3 decimals.
    pub ml_probability: f64,
    /// Heuristic score, rounded to 3 decimals.
    pub rule_adjustment: f64,
}

/// One classification answer for one URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub prediction: Verdict,
    /// Percentage string, e.g. "99.9" or "85". Rule hits carry their fixed
    /// confidence; blended results format the final probability to one
    /// decimal.
    pub confidence: String,
    pub reason: String,
    /// Present only on the blended path, never on a rule short-circuit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ScoreDetails>,
}

impl Classification {
    /// A cascade verdict. Rule hits never carry score details.
    pub fn from_rule(
        prediction: Verdict,
        confidence: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            prediction,
            confidence: confidence.into(),
            reason: reason.into(),
            details: None,
        }
    }
}
