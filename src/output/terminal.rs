// Colored terminal output for classification results.
//
// The `check` subcommand delegates all formatting here so main.rs only
// wires arguments to the engine.

use colored::Colorize;

use crate::verdict::{Classification, Verdict};

/// Print one classification in human-readable form.
pub fn display_classification(url: &str, result: &Classification) {
    let preview = super::truncate_chars(url, 100);
    println!("\n  {}", preview.bold());
    println!(
        "    {}  (confidence {})",
        colorize_verdict(result.prediction),
        result.confidence
    );
    println!("    {}", result.reason.dimmed());
    if let Some(details) = &result.details {
        println!(
            "    {}",
            format!(
                "model {:.3}  |  heuristic {:.3}",
                details.ml_probability, details.rule_adjustment
            )
            .dimmed()
        );
    }
}

/// Colorize a verdict for terminal display.
fn colorize_verdict(verdict: Verdict) -> colored::ColoredString {
    match verdict {
        Verdict::Safe => verdict.as_str().green(),
        Verdict::Suspicious => verdict.as_str().yellow(),
        Verdict::Unsafe => verdict.as_str().red().bold(),
    }
}
