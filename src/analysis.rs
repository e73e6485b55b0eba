//! Analysis Workflow
//!
//! The one workflow the program performs: validate input, optionally
//! translate it to English, score polarity, map it to a sentiment label,
//! and speak the result. Every capability is optional and every capability
//! failure degrades to a safe default instead of aborting the run.

use crate::error::{MoodError, MoodResult};
use crate::language::Language;
use crate::sentiment::SentimentScorer;
use crate::translate::Translator;
use crate::tts::TtsEngine;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Polarity above this maps to Positive, below its negation to Negative
const POLARITY_THRESHOLD: f32 = 0.1;

/// Confidence reported for Neutral results
const NEUTRAL_CONFIDENCE: f32 = 0.5;

/// Sentiment label of an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        };
        write!(f, "{}", label)
    }
}

/// A single user submission. Immutable, discarded after use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub text: String,
    pub source: Language,
    pub target: Language,
}

impl AnalysisRequest {
    /// Build a request, rejecting whitespace-only text
    pub fn new(text: &str, source: Language, target: Language) -> MoodResult<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(MoodError::EmptyInput);
        }
        Ok(Self {
            text: trimmed.to_string(),
            source,
            target,
        })
    }
}

/// Result of one analysis run. Rendered once and discarded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisResult {
    pub sentiment: Sentiment,
    pub confidence: f32,
}

impl AnalysisResult {
    /// The default when no scorer is available or scoring fails
    pub fn neutral() -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            confidence: NEUTRAL_CONFIDENCE,
        }
    }
}

/// Map a polarity in [-1, 1] to a labeled result
pub fn classify(polarity: f32) -> AnalysisResult {
    if polarity > POLARITY_THRESHOLD {
        AnalysisResult {
            sentiment: Sentiment::Positive,
            confidence: polarity,
        }
    } else if polarity < -POLARITY_THRESHOLD {
        AnalysisResult {
            sentiment: Sentiment::Negative,
            confidence: polarity.abs(),
        }
    } else {
        AnalysisResult::neutral()
    }
}

/// Analysis workflow with dependency-injected optional capabilities
#[derive(Debug, Clone, Default)]
pub struct Workflow {
    translator: Option<Arc<dyn Translator>>,
    scorer: Option<Arc<dyn SentimentScorer>>,
    tts: Option<Arc<dyn TtsEngine>>,
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_translator(&mut self, translator: Arc<dyn Translator>) {
        self.translator = Some(translator);
    }

    pub fn set_scorer(&mut self, scorer: Arc<dyn SentimentScorer>) {
        self.scorer = Some(scorer);
    }

    pub fn set_tts(&mut self, tts: Arc<dyn TtsEngine>) {
        self.tts = Some(tts);
    }

    pub fn has_tts(&self) -> bool {
        self.tts.is_some()
    }

    /// Run one analysis to completion
    ///
    /// Infallible past request construction: each step falls back to a safe
    /// default on capability failure, so the caller always gets a result.
    pub async fn run(&self, request: &AnalysisRequest) -> AnalysisResult {
        let text = self.translate_step(request).await;
        let result = self.score_step(&text);
        self.speak_step(&result).await;
        info!(
            "⭐ Analysis complete: {} ({:.0}%)",
            result.sentiment,
            result.confidence * 100.0
        );
        result
    }

    /// Translate to English for the English-tuned scorer.
    ///
    /// Skipped for English input; failure falls back to the original text,
    /// even though scoring untranslated text may misclassify.
    async fn translate_step(&self, request: &AnalysisRequest) -> String {
        if request.source == Language::English {
            return request.text.clone();
        }

        let Some(translator) = &self.translator else {
            debug!("🌐 No translator available, scoring original text");
            return request.text.clone();
        };

        match translator
            .translate(&request.text, request.source, Language::English)
            .await
        {
            Ok(translated) => {
                debug!("🌐 Translated via {}: {}", translator.name(), translated);
                translated
            }
            Err(e) => {
                warn!("⚠️ Translation failed, using original text: {}", e);
                request.text.clone()
            }
        }
    }

    fn score_step(&self, text: &str) -> AnalysisResult {
        let Some(scorer) = &self.scorer else {
            debug!("😶 No scorer available, defaulting to Neutral");
            return AnalysisResult::neutral();
        };

        match scorer.score(text) {
            Ok(polarity) => classify(polarity),
            Err(e) => {
                warn!("⚠️ Sentiment scoring failed, defaulting to Neutral: {}", e);
                AnalysisResult::neutral()
            }
        }
    }

    /// Speak the label. Failure is silent and never blocks result delivery.
    async fn speak_step(&self, result: &AnalysisResult) {
        if let Some(tts) = &self.tts {
            let utterance = format!("This text is {}", result.sentiment);
            if let Err(e) = tts.speak(&utterance).await {
                warn!("🔇 Spoken readout failed: {}", e);
            }
        }
    }
}
