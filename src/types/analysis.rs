//! Classifier output structures

use serde::{Deserialize, Serialize};
use crate::types::MoodLabel;

/// Raw signals extracted from text, kept for verbose output and logging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoodSignals {
    /// Distinct positive lexicon words found (before boosting)
    pub positive_hits: u32,
    /// Distinct negative lexicon words found (before boosting)
    pub negative_hits: u32,
    /// More than one '!'
    pub excitement: bool,
    /// Whole text is uppercase
    pub all_caps: bool,
    pub positive_emoji: bool,
    pub negative_emoji: bool,
    /// Whitespace-separated token count
    pub token_count: usize,
    /// Mean token length in chars
    pub mean_token_len: f64,
}

impl MoodSignals {
    /// Positive count after the surface boost
    pub fn positive_count(&self) -> u32 {
        let boost = if self.excitement || self.all_caps || self.positive_emoji {
            crate::SIGNAL_BOOST
        } else {
            0
        };
        self.positive_hits + boost
    }

    /// Negative count after the emoji boost
    pub fn negative_count(&self) -> u32 {
        let boost = if self.negative_emoji { crate::SIGNAL_BOOST } else { 0 };
        self.negative_hits + boost
    }
}

/// Classification result for one message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodResult {
    pub mood: MoodLabel,
    /// 0.0-1.0, rounded to 2 decimals
    pub score: f64,
    /// True when any lexical or surface signal contributed
    pub keywords_found: bool,
}

impl MoodResult {
    pub fn new(mood: MoodLabel, score: f64, keywords_found: bool) -> Self {
        Self {
            mood,
            score,
            keywords_found,
        }
    }

    /// Result for empty input
    pub fn neutral() -> Self {
        Self::new(MoodLabel::Neutral, crate::NEUTRAL_SCORE, false)
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "mood={} | score={:.2} | keywords={}",
            self.mood, self.score, self.keywords_found
        )
    }
}
