// crates/inference/src/sentiment.rs
//! Keyword sentiment classifier.
//!
//! Tokens are the lowercased whitespace-separated words of the input, taken
//! as a set: repeating a keyword does not raise its weight. Punctuation is not
//! stripped, so `"great!"` is not a match for `great`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

const POSITIVE_WORDS: [&str; 17] = [
    "good",
    "great",
    "excellent",
    "amazing",
    "wonderful",
    "fantastic",
    "love",
    "best",
    "perfect",
    "awesome",
    "incredible",
    "outstanding",
    "brilliant",
    "superb",
    "magnificent",
    "impressive",
    "lovely",
];

const NEGATIVE_WORDS: [&str; 17] = [
    "bad",
    "terrible",
    "awful",
    "horrible",
    "poor",
    "worst",
    "hate",
    "disappointing",
    "disappointed",
    "sad",
    "angry",
    "frustrating",
    "useless",
    "pathetic",
    "disgusting",
    "miserable",
    "dreadful",
];

// Confidences are computed in hundredths so the 2-decimal result is exact.
const POLAR_BASE: usize = 60;
const POLAR_STEP: usize = 10;
const NEUTRAL_BASE: usize = 50;
const NEUTRAL_STEP: usize = 1;
const MAX_CONFIDENCE: usize = 95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub sentiment: Sentiment,
    /// In `0.5..=0.95`, two decimals.
    pub confidence: f64,
}

pub fn classify(text: &str) -> Classification {
    let lowered = text.to_lowercase();
    let words: HashSet<&str> = lowered.split_whitespace().collect();

    let positive = words.iter().filter(|w| POSITIVE_WORDS.contains(*w)).count();
    let negative = words.iter().filter(|w| NEGATIVE_WORDS.contains(*w)).count();

    let (sentiment, hundredths) = if positive > negative {
        (Sentiment::Positive, POLAR_BASE + POLAR_STEP * positive)
    } else if negative > positive {
        (Sentiment::Negative, POLAR_BASE + POLAR_STEP * negative)
    } else {
        (Sentiment::Neutral, NEUTRAL_BASE + NEUTRAL_STEP * words.len())
    };

    Classification {
        sentiment,
        confidence: hundredths.min(MAX_CONFIDENCE) as f64 / 100.0,
    }
}
