//! Mock Sentiment Scorer for Testing
//!
//! Returns a fixed polarity and records every text it scored.

use anyhow::Result;
use std::sync::{Arc, Mutex};

/// Mock scorer with a fixed polarity
#[derive(Debug)]
pub struct MockScorer {
    /// Polarity returned for every call
    pub polarity: f32,
    /// Every text this scorer was asked to score
    pub scored: Arc<Mutex<Vec<String>>>,
    /// Simulate failure on every call
    pub should_fail: Arc<Mutex<bool>>,
}

impl MockScorer {
    pub fn new(polarity: f32) -> Self {
        Self {
            polarity,
            scored: Arc::new(Mutex::new(Vec::new())),
            should_fail: Arc::new(Mutex::new(false)),
        }
    }

    pub fn failing() -> Self {
        let mock = Self::new(0.0);
        *mock.should_fail.lock().unwrap() = true;
        mock
    }

    /// Get all scored texts
    pub fn get_scored(&self) -> Vec<String> {
        self.scored.lock().unwrap().clone()
    }
}

impl moodlens::sentiment::SentimentScorer for MockScorer {
    fn score(&self, text: &str) -> Result<f32> {
        self.scored.lock().unwrap().push(text.to_string());
        if *self.should_fail.lock().unwrap() {
            return Err(anyhow::anyhow!("Mock scorer failure"));
        }
        Ok(self.polarity)
    }

    fn name(&self) -> &str {
        "mock"
    }
}
