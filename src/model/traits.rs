// URL scorer trait, the swap-ready abstraction over model inference.
//
// The fitted implementation (vectorizer + scaler + linear model) lives in
// `artifact`. The trait keeps the pipeline decoupled from it so tests can
// swap in fixed-probability doubles and the CLI can run rule-only when no
// artifacts are installed.

use anyhow::Result;

use crate::features::FEATURE_COUNT;

/// Sparse TF-IDF representation of one URL: (column, weight) pairs sorted
/// by column, one entry per vocabulary n-gram found in the text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    pub entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Number of non-zero columns.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }
}

/// Trait for turning a URL into a phishing probability.
///
/// Inference is pure CPU math over small vectors, so unlike I/O-backed
/// scorers this trait is synchronous.
pub trait UrlScorer: Send + Sync {
    /// Build the sparse text representation of the URL.
    fn vectorize(&self, url: &str) -> SparseVector;

    /// Standardize the structural feature vector into model space.
    fn scale(&self, features: &[f64; FEATURE_COUNT]) -> Vec<f64>;

    /// Probability in (0, 1) that the represented URL is a phish.
    fn predict_probability(&self, text: &SparseVector, scaled: &[f64]) -> Result<f64>;

    /// Full text-plus-features pass for one URL.
    fn score_url(&self, url: &str, features: &[f64; FEATURE_COUNT]) -> Result<f64> {
        let text = self.vectorize(url);
        let scaled = self.scale(features);
        self.predict_probability(&text, &scaled)
    }
}

/// No-op scorer used when model artifacts are not installed. Errors if
/// actually called, so a missing model can never silently produce fake
/// probabilities.
pub struct NoopScorer;

impl UrlScorer for NoopScorer {
    fn vectorize(&self, _url: &str) -> SparseVector {
        SparseVector::default()
    }

    fn scale(&self, _features: &[f64; FEATURE_COUNT]) -> Vec<f64> {
        vec![0.0; FEATURE_COUNT]
    }

    fn predict_probability(&self, _text: &SparseVector, _scaled: &[f64]) -> Result<f64> {
        anyhow::bail!("No model artifacts loaded. Install them to enable blended scoring")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_scorer_refuses_to_predict() {
        let scorer = NoopScorer;
        let features = [0.0; FEATURE_COUNT];
        let err = scorer.score_url("https://example.com", &features).unwrap_err();
        assert!(err.to_string().contains("No model artifacts"));
    }

    #[test]
    fn test_noop_vectorize_is_empty() {
        let scorer = NoopScorer;
        assert_eq!(scorer.vectorize("https://example.com").nnz(), 0);
    }
}
