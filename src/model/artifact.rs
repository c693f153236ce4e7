// Loading and cross-validation of exported model artifacts.
//
// Training happens offline; the fitted pipeline is exported as three JSON
// files that this module reads back: vectorizer.json (vocabulary + idf),
// scaler.json (mean + scale) and model.json (weights + intercept + an
// optional calibration). The shapes are checked against each other at
// load time so a mixed-version install fails at startup instead of
// producing shifted probabilities per request.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::linear::{Calibration, CalibratedLinearModel, Standardizer};
use super::traits::{SparseVector, UrlScorer};
use super::vectorizer::CharGramVectorizer;
use crate::features::FEATURE_COUNT;

pub const VECTORIZER_FILE: &str = "vectorizer.json";
pub const SCALER_FILE: &str = "scaler.json";
pub const MODEL_FILE: &str = "model.json";

/// On-disk schema of vectorizer.json.
#[derive(Debug, Deserialize)]
pub struct VectorizerArtifact {
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f64>,
    pub ngram_min: usize,
    pub ngram_max: usize,
}

/// On-disk schema of scaler.json.
#[derive(Debug, Deserialize)]
pub struct ScalerArtifact {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// On-disk schema of model.json.
#[derive(Debug, Deserialize)]
pub struct ModelArtifact {
    pub weights: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub calibration: Option<Calibration>,
}

/// Default artifact directory under the platform data dir, e.g.
/// ~/.local/share/weir/model/ on Linux.
pub fn default_model_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("weir")
        .join("model")
}

/// Check whether all three artifact files exist.
pub fn artifacts_present(dir: &Path) -> bool {
    [VECTORIZER_FILE, SCALER_FILE, MODEL_FILE]
        .iter()
        .all(|file| dir.join(file).exists())
}

/// Load and cross-validate the full fitted pipeline from `dir`.
pub fn load_scorer(dir: &Path) -> Result<FittedScorer> {
    for file in [VECTORIZER_FILE, SCALER_FILE, MODEL_FILE] {
        let path = dir.join(file);
        if !path.exists() {
            anyhow::bail!(
                "Model artifact not found: {}\nInstall the exported pipeline there or point WEIR_MODEL_DIR at it.",
                path.display()
            );
        }
    }

    let vectorizer_art: VectorizerArtifact = read_json(&dir.join(VECTORIZER_FILE))?;
    let scaler_art: ScalerArtifact = read_json(&dir.join(SCALER_FILE))?;
    let model_art: ModelArtifact = read_json(&dir.join(MODEL_FILE))?;

    let vectorizer = CharGramVectorizer::new(
        vectorizer_art.vocabulary,
        vectorizer_art.idf,
        vectorizer_art.ngram_min,
        vectorizer_art.ngram_max,
    )
    .with_context(|| format!("Invalid {VECTORIZER_FILE}"))?;

    let scaler = Standardizer::new(scaler_art.mean, scaler_art.scale)
        .with_context(|| format!("Invalid {SCALER_FILE}"))?;

    // The weight count ties all three files together: text block width
    // from the vectorizer, feature block width from the scaler.
    let text_dim = vectorizer.vocabulary_len();
    let model = CalibratedLinearModel::new(
        model_art.weights,
        model_art.intercept,
        model_art.calibration,
        text_dim,
    )
    .with_context(|| format!("{MODEL_FILE} does not match {VECTORIZER_FILE}"))?;

    debug!("Loaded model artifacts from {}", dir.display());

    Ok(FittedScorer {
        vectorizer,
        scaler,
        model,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

/// The fitted pipeline: vectorize, standardize, predict.
#[derive(Debug)]
pub struct FittedScorer {
    vectorizer: CharGramVectorizer,
    scaler: Standardizer,
    model: CalibratedLinearModel,
}

impl FittedScorer {
    /// Width of the text block, i.e. the vectorizer vocabulary size.
    pub fn text_dim(&self) -> usize {
        self.model.text_dim()
    }
}

impl UrlScorer for FittedScorer {
    fn vectorize(&self, url: &str) -> SparseVector {
        self.vectorizer.transform(url)
    }

    fn scale(&self, features: &[f64; FEATURE_COUNT]) -> Vec<f64> {
        self.scaler.transform(features)
    }

    fn predict_probability(&self, text: &SparseVector, scaled: &[f64]) -> Result<f64> {
        self.model.predict_probability(text, scaled)
    }
}
