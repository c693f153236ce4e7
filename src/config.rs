use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// Everything has a sensible default; env vars override. The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Directory containing the exported model artifact files.
    pub model_dir: PathBuf,
    /// CSV file that feedback submissions are appended to.
    pub feedback_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let model_dir = env::var("WEIR_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| crate::model::artifact::default_model_dir());

        let feedback_path = env::var("WEIR_FEEDBACK_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./feedback.csv"));

        Ok(Self {
            model_dir,
            feedback_path,
        })
    }
}
