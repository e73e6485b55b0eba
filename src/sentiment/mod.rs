//! Sentiment Scoring Module
//!
//! Provides a unified interface for polarity scorers.

use crate::config::Config;
use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

pub mod lexicon;

/// Trait for sentiment scorers
///
/// Scorers are local and synchronous; they return a polarity in [-1, 1]
/// where positive values lean positive and negative values lean negative.
pub trait SentimentScorer: Send + Sync + std::fmt::Debug {
    /// Score the given text, returning a polarity in [-1, 1]
    fn score(&self, text: &str) -> Result<f32>;

    /// Get the scorer name
    fn name(&self) -> &str;
}

/// Factory to create the configured sentiment scorer
///
/// Returns `None` when scoring is disabled; the workflow then falls back to
/// a Neutral result.
pub fn create_scorer(config: &Config) -> Option<Arc<dyn SentimentScorer>> {
    match config.sentiment_engine.as_str() {
        "lexicon" => {
            info!("🛠️ Using lexicon sentiment scorer");
            Some(Arc::new(lexicon::LexiconScorer::new()))
        }
        "none" => {
            info!("😶 Sentiment scoring disabled");
            None
        }
        other => {
            warn!("⚠️ Unknown sentiment engine '{}', scoring disabled", other);
            None
        }
    }
}
