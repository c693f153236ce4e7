// Weir: hybrid phishing URL detection
//
// This is the library root. Each module corresponds to a major subsystem
// of the classification pipeline.

pub mod config;
pub mod engine;
pub mod features;
pub mod feedback;
pub mod model;
pub mod output;
pub mod rules;
pub mod scoring;
pub mod status;
pub mod urls;
pub mod verdict;
pub mod web;
