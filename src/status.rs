// System status display: model artifacts, watch lists, feedback log.

use anyhow::Result;

use crate::config::Config;
use crate::features::FEATURE_COUNT;
use crate::feedback::{CsvFeedbackStore, FeedbackStore};
use crate::model::artifact;
use crate::rules::lists::WatchLists;

/// Display system status to the terminal.
pub async fn show(config: &Config) -> Result<()> {
    // Model artifact status
    println!("Model artifacts: {}", config.model_dir.display());
    if artifact::artifacts_present(&config.model_dir) {
        match artifact::load_scorer(&config.model_dir) {
            Ok(scorer) => {
                println!(
                    "  Loaded: {} text columns + {} structural features",
                    scorer.text_dim(),
                    FEATURE_COUNT
                );
            }
            Err(e) => {
                println!("  Invalid: {e:#}");
                println!("  Re-export the fitted pipeline and reinstall.");
            }
        }
    } else {
        println!("  Not installed (rule-only mode)");
        println!("  Install vectorizer.json, scaler.json and model.json to enable blending");
    }

    // Watch list sizes
    let lists = WatchLists::default();
    println!("Watch lists:");
    println!("  Trusted domains:  {}", lists.trusted_domains.len());
    println!("  Risky hosts:      {}", lists.risky_hosts.len());
    println!("  Shorteners:       {}", lists.shorteners.len());
    println!("  Suspicious TLDs:  {}", lists.suspicious_tlds.len());
    println!("  Brands:           {}", lists.brands.len());
    println!("  Suspicious words: {}", lists.suspicious_words.len());

    // Feedback log
    let store = CsvFeedbackStore::new(config.feedback_path.clone());
    println!("Feedback log: {}", config.feedback_path.display());
    match store.entry_count().await? {
        0 => println!("  No entries yet"),
        n => println!("  Entries: {n}"),
    }

    Ok(())
}
