use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use weir::config::Config;
use weir::engine::Engine;
use weir::feedback::{CsvFeedbackStore, FeedbackStore};
use weir::model::artifact;
use weir::model::traits::{NoopScorer, UrlScorer};
use weir::rules::lists::WatchLists;

/// Weir: hybrid phishing URL detection.
///
/// Classifies URLs as safe, suspicious or unsafe by running a deterministic
/// rule cascade first and blending a trained model with structural heuristics
/// for everything the rules do not decide.
#[derive(Parser)]
#[command(name = "weir", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Address to bind (default: 0.0.0.0)
        #[arg(long, default_value = "0.0.0.0")]
        bind: String,

        /// Port to listen on (default: 5000)
        #[arg(long, default_value = "5000")]
        port: u16,
    },

    /// Classify one or more URLs from the command line
    Check {
        /// URLs to classify
        #[arg(required = true)]
        urls: Vec<String>,

        /// Print raw JSON instead of formatted output
        #[arg(long)]
        json: bool,
    },

    /// Show model, watch list and feedback status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("weir=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Serve { bind, port } => {
            let engine = Arc::new(build_engine(&config)?);
            let feedback: Arc<dyn FeedbackStore> =
                Arc::new(CsvFeedbackStore::new(config.feedback_path.clone()));
            weir::web::run_server(engine, feedback, port, &bind).await?;
        }

        Commands::Check { urls, json } => {
            let engine = build_engine(&config)?;
            for url in &urls {
                let result = engine.classify(url)?;
                if json {
                    println!("{}", serde_json::to_string(&result)?);
                } else {
                    weir::output::terminal::display_classification(url, &result);
                }
            }
        }

        Commands::Status => {
            weir::status::show(&config).await?;
        }
    }

    Ok(())
}

/// Build the classification engine, falling back to rule-only mode when no
/// model artifacts are installed. Invalid artifacts are a hard error so a
/// broken install never silently degrades.
fn build_engine(config: &Config) -> Result<Engine> {
    let scorer: Box<dyn UrlScorer> = if artifact::artifacts_present(&config.model_dir) {
        let scorer = artifact::load_scorer(&config.model_dir)?;
        info!(
            text_dim = scorer.text_dim(),
            "Model artifacts loaded from {}",
            config.model_dir.display()
        );
        Box::new(scorer)
    } else {
        warn!(
            "Model artifacts not found in {}; running rule-only",
            config.model_dir.display()
        );
        Box::new(NoopScorer)
    };

    Ok(Engine::new(WatchLists::default(), scorer))
}
