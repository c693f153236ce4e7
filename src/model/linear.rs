// Standardizer and calibrated linear model.
//
// The model's input is one dense row: the TF-IDF text block followed by
// the standardized structural features. Weights were fitted offline; at
// runtime this file only does the dot product, the logistic link, and an
// optional sigmoid recalibration fitted on held-out data.

use anyhow::Result;
use serde::Deserialize;

use super::traits::SparseVector;
use crate::features::FEATURE_COUNT;

/// Per-feature mean/scale pairs from a fitted standard scaler.
#[derive(Debug, Clone)]
pub struct Standardizer {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl Standardizer {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self> {
        if mean.len() != FEATURE_COUNT || scale.len() != FEATURE_COUNT {
            anyhow::bail!(
                "Scaler shape {}x{} does not cover the {FEATURE_COUNT} structural features",
                mean.len(),
                scale.len()
            );
        }
        if let Some(i) = scale.iter().position(|s| !s.is_finite() || *s == 0.0) {
            anyhow::bail!("Scaler has unusable scale {} at feature {i}", scale[i]);
        }
        Ok(Self { mean, scale })
    }

    /// Center and scale one feature row into model space.
    pub fn transform(&self, features: &[f64; FEATURE_COUNT]) -> Vec<f64> {
        features
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (m, s))| (x - m) / s)
            .collect()
    }
}

/// Optional probability recalibration applied to the raw margin.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Calibration {
    pub slope: f64,
    pub intercept: f64,
}

/// Linear model over the concatenated text and feature blocks.
#[derive(Debug, Clone)]
pub struct CalibratedLinearModel {
    weights: Vec<f64>,
    intercept: f64,
    calibration: Option<Calibration>,
    text_dim: usize,
}

impl CalibratedLinearModel {
    pub fn new(
        weights: Vec<f64>,
        intercept: f64,
        calibration: Option<Calibration>,
        text_dim: usize,
    ) -> Result<Self> {
        if weights.len() != text_dim + FEATURE_COUNT {
            anyhow::bail!(
                "Model has {} weights but the input row is {} text columns + {FEATURE_COUNT} features",
                weights.len(),
                text_dim
            );
        }
        Ok(Self {
            weights,
            intercept,
            calibration,
            text_dim,
        })
    }

    /// Width of the text block this model was fitted against.
    pub fn text_dim(&self) -> usize {
        self.text_dim
    }

    /// Margin -> probability for one input row.
    ///
    /// Errors rather than guessing when the row shape disagrees with the
    /// fitted weights; shape bugs must surface, not skew scores.
    pub fn predict_probability(&self, text: &SparseVector, scaled: &[f64]) -> Result<f64> {
        if self.text_dim + scaled.len() != self.weights.len() {
            anyhow::bail!(
                "Feature row of {} values does not fit a model expecting {}",
                scaled.len(),
                self.weights.len() - self.text_dim
            );
        }

        let mut margin = self.intercept;
        for &(col, weight) in &text.entries {
            if col >= self.text_dim {
                anyhow::bail!(
                    "Text column {col} out of range for model with text dimension {}",
                    self.text_dim
                );
            }
            margin += weight * self.weights[col];
        }
        for (i, value) in scaled.iter().enumerate() {
            margin += value * self.weights[self.text_dim + i];
        }

        let probability = match self.calibration {
            Some(c) => sigmoid(c.slope * margin + c.intercept),
            None => sigmoid(margin),
        };
        Ok(probability)
    }
}

/// Logistic link mapping any real number into (0, 1).
fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
