//! Lexicon-based polarity scorer
//!
//! A small English polarity lexicon averaged over matched tokens, with
//! negation flips and intensifier boosts. Tuned for English input; text in
//! other languages mostly scores as neutral.

use super::SentimentScorer;
use anyhow::Result;
use std::collections::HashMap;
use tracing::debug;

/// Words that invert the polarity of the following sentiment word
const NEGATIONS: &[&str] = &["not", "no", "never", "isnt", "dont", "cant", "wont"];

/// Words that amplify the polarity of the following sentiment word
const INTENSIFIERS: &[&str] = &["very", "really", "so", "extremely", "absolutely", "totally"];

const INTENSIFIER_BOOST: f32 = 1.3;
const NEGATION_FACTOR: f32 = -0.5;

#[derive(Debug)]
pub struct LexiconScorer {
    lexicon: HashMap<&'static str, f32>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        let mut lexicon = HashMap::new();

        for (word, polarity) in [
            // Positive
            ("love", 0.5),
            ("loved", 0.5),
            ("like", 0.3),
            ("liked", 0.3),
            ("great", 0.8),
            ("good", 0.7),
            ("best", 1.0),
            ("better", 0.5),
            ("excellent", 1.0),
            ("amazing", 0.8),
            ("wonderful", 0.9),
            ("fantastic", 0.9),
            ("awesome", 0.9),
            ("beautiful", 0.85),
            ("happy", 0.8),
            ("glad", 0.6),
            ("nice", 0.6),
            ("perfect", 1.0),
            ("enjoy", 0.5),
            ("enjoyed", 0.5),
            ("brilliant", 0.9),
            ("delightful", 0.8),
            ("pleasant", 0.6),
            ("fun", 0.5),
            ("recommend", 0.4),
            // Negative
            ("hate", -0.8),
            ("hated", -0.8),
            ("bad", -0.7),
            ("worst", -1.0),
            ("worse", -0.5),
            ("terrible", -1.0),
            ("awful", -1.0),
            ("horrible", -1.0),
            ("sad", -0.5),
            ("angry", -0.7),
            ("disappointing", -0.6),
            ("disappointed", -0.6),
            ("boring", -0.6),
            ("ugly", -0.7),
            ("poor", -0.4),
            ("annoying", -0.6),
            ("broken", -0.4),
            ("useless", -0.8),
            ("dislike", -0.4),
            ("unhappy", -0.7),
            ("disgusting", -0.9),
            ("painful", -0.6),
            ("wrong", -0.5),
            ("fail", -0.5),
            ("failed", -0.5),
        ] {
            lexicon.insert(word, polarity);
        }

        Self { lexicon }
    }

    /// Lowercase and strip everything that is not alphabetic or whitespace.
    /// Apostrophes are removed first so contractions match the negation list.
    fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .replace(['\'', '\u{2019}'], "")
            .split(|c: char| !c.is_alphabetic())
            .filter(|t| !t.is_empty())
            .map(|t| t.to_string())
            .collect()
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<f32> {
        let tokens = Self::tokenize(text);

        let mut sum = 0.0_f32;
        let mut hits = 0usize;
        let mut negate = false;
        let mut boost = 1.0_f32;

        for token in &tokens {
            if NEGATIONS.contains(&token.as_str()) {
                negate = true;
                continue;
            }
            if INTENSIFIERS.contains(&token.as_str()) {
                boost = INTENSIFIER_BOOST;
                continue;
            }

            if let Some(&polarity) = self.lexicon.get(token.as_str()) {
                let mut value = polarity * boost;
                if negate {
                    value *= NEGATION_FACTOR;
                }
                sum += value;
                hits += 1;
            }

            // Modifiers only reach the next sentiment-bearing word
            negate = false;
            boost = 1.0;
        }

        if hits == 0 {
            return Ok(0.0);
        }

        let polarity = (sum / hits as f32).clamp(-1.0, 1.0);
        debug!("📊 Lexicon polarity {:.2} over {} hits", polarity, hits);
        Ok(polarity)
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let scorer = LexiconScorer::new();
        let polarity = scorer.score("I love this, it is great").unwrap();
        assert!(polarity > 0.1, "expected positive, got {}", polarity);
    }

    #[test]
    fn test_negative_text() {
        let scorer = LexiconScorer::new();
        let polarity = scorer.score("This is terrible and I hate it").unwrap();
        assert!(polarity < -0.1, "expected negative, got {}", polarity);
    }

    #[test]
    fn test_unknown_words_are_neutral() {
        let scorer = LexiconScorer::new();
        let polarity = scorer.score("the quick brown fox jumps").unwrap();
        assert_eq!(polarity, 0.0);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let scorer = LexiconScorer::new();
        let plain = scorer.score("good").unwrap();
        let negated = scorer.score("not good").unwrap();
        assert!(plain > 0.0);
        assert!(negated < 0.0, "negated 'good' should lean negative");
    }

    #[test]
    fn test_contraction_negation() {
        let scorer = LexiconScorer::new();
        let polarity = scorer.score("this isn't good").unwrap();
        assert!(polarity < 0.0, "contracted negation should flip polarity");
    }

    #[test]
    fn test_intensifier_boosts() {
        let scorer = LexiconScorer::new();
        let plain = scorer.score("nice").unwrap();
        let boosted = scorer.score("very nice").unwrap();
        assert!(boosted > plain);
    }

    #[test]
    fn test_polarity_stays_in_range() {
        let scorer = LexiconScorer::new();
        let polarity = scorer.score("very perfect very best very excellent").unwrap();
        assert!((-1.0..=1.0).contains(&polarity));
    }

    #[test]
    fn test_punctuation_ignored() {
        let scorer = LexiconScorer::new();
        let a = scorer.score("great!!!").unwrap();
        let b = scorer.score("great").unwrap();
        assert_eq!(a, b);
    }
}
