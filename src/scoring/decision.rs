// Blend of model probability and heuristic score into a final verdict.

use crate::verdict::{Classification, ScoreDetails, Verdict};

/// Weight of the calibrated model probability in the blend.
pub const ML_WEIGHT: f64 = 0.75;
/// Weight of the structural heuristic in the blend.
pub const RULE_WEIGHT: f64 = 0.25;

const BLENDED_REASON: &str = "Blended model and heuristic assessment";

/// Combine the two signals and band the result into a verdict.
///
/// The confidence string is the blended probability as a percentage with
/// one decimal place. The raw inputs are echoed in `details`, rounded to
/// three decimals, so callers can see which side drove the decision.
pub fn blend(ml_probability: f64, rule_score: f64) -> Classification {
    let combined = ML_WEIGHT * ml_probability + RULE_WEIGHT * rule_score;
    Classification {
        prediction: Verdict::from_probability(combined),
        confidence: format!("{:.1}", combined * 100.0),
        reason: BLENDED_REASON.to_string(),
        details: Some(ScoreDetails {
            ml_probability: round3(ml_probability),
            rule_adjustment: round3(rule_score),
        }),
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
