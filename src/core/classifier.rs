//! Mood Classifier: lexical hits + surface signals → mood label and score
//!
//! Lexical matching runs on lower-cased text; surface signals (exclamations,
//! all caps, emoji) run on the original casing. When nothing fires, the mood
//! falls back to token-count/length heuristics.

use crate::{
    CASUAL_MAX_TOKENS, EXCITED_SCORE, EXCLAMATION_MIN, NEUTRAL_SCORE,
    SCORE_THRESHOLD_POSITIVE, SCORE_THRESHOLD_SLIGHTLY_NEGATIVE,
    SCORE_THRESHOLD_VERY_POSITIVE, THOUGHTFUL_MIN_MEAN_LEN, THOUGHTFUL_MIN_TOKENS,
};
use crate::core::lexicon::{
    contains_any, count_hits, NEGATIVE_EMOJI, NEGATIVE_WORDS, POSITIVE_EMOJI, POSITIVE_WORDS,
};
use crate::types::{MoodLabel, MoodResult, MoodSignals};

/// Stateless mood classifier
#[derive(Debug, Default, Clone, Copy)]
pub struct MoodClassifier;

impl MoodClassifier {
    /// Create new classifier
    pub fn new() -> Self {
        Self
    }

    /// Classify text. Total over all inputs and deterministic.
    pub fn analyze(&self, text: &str) -> MoodResult {
        if text.trim().is_empty() {
            return MoodResult::neutral();
        }
        classify(&self.signals(text))
    }

    /// Classify and also return the signal breakdown
    pub fn analyze_detailed(&self, text: &str) -> (MoodResult, MoodSignals) {
        if text.trim().is_empty() {
            return (MoodResult::neutral(), MoodSignals::default());
        }
        let signals = self.signals(text);
        (classify(&signals), signals)
    }

    /// Extract raw signals from text
    pub fn signals(&self, text: &str) -> MoodSignals {
        let lowered = text.to_lowercase();

        let (token_count, total_len) = text
            .split_whitespace()
            .fold((0usize, 0usize), |(n, len), tok| (n + 1, len + tok.chars().count()));
        let mean_token_len = if token_count > 0 {
            total_len as f64 / token_count as f64
        } else {
            0.0
        };

        MoodSignals {
            positive_hits: count_hits(POSITIVE_WORDS, &lowered),
            negative_hits: count_hits(NEGATIVE_WORDS, &lowered),
            excitement: text.matches('!').count() > EXCLAMATION_MIN,
            all_caps: is_all_caps(text),
            positive_emoji: contains_any(POSITIVE_EMOJI, text),
            negative_emoji: contains_any(NEGATIVE_EMOJI, text),
            token_count,
            mean_token_len,
        }
    }
}

/// Convenience wrapper around `MoodClassifier::analyze`
pub fn analyze_mood(text: &str) -> MoodResult {
    MoodClassifier::new().analyze(text)
}

/// Map signals to a result
pub fn classify(signals: &MoodSignals) -> MoodResult {
    let positive = signals.positive_count();
    let negative = signals.negative_count();
    let total = positive + negative;

    if total == 0 {
        return structural_fallback(signals);
    }

    let score = round2(positive as f64 / total as f64);
    let mood = if score > SCORE_THRESHOLD_VERY_POSITIVE {
        MoodLabel::VeryPositive
    } else if score > SCORE_THRESHOLD_POSITIVE {
        MoodLabel::Positive
    } else if score > SCORE_THRESHOLD_SLIGHTLY_NEGATIVE {
        MoodLabel::SlightlyNegative
    } else {
        MoodLabel::VeryNegative
    };

    MoodResult::new(mood, score, true)
}

fn structural_fallback(signals: &MoodSignals) -> MoodResult {
    // Excitement also boosts the positive count, so this arm only fires
    // if the boost is ever removed.
    if signals.excitement {
        return MoodResult::new(MoodLabel::Excited, EXCITED_SCORE, false);
    }

    let mood = if signals.token_count > THOUGHTFUL_MIN_TOKENS
        || signals.mean_token_len > THOUGHTFUL_MIN_MEAN_LEN
    {
        MoodLabel::Thoughtful
    } else if signals.token_count <= CASUAL_MAX_TOKENS {
        MoodLabel::Casual
    } else {
        MoodLabel::Neutral
    };

    MoodResult::new(mood, NEUTRAL_SCORE, false)
}

/// At least one cased char and no lowercase or titlecase chars
fn is_all_caps(text: &str) -> bool {
    let mut cased = false;
    for c in text.chars() {
        if c.is_lowercase() || is_titlecase(c) {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

/// Unicode titlecase letters (general category Lt)
fn is_titlecase(c: char) -> bool {
    matches!(
        c,
        '\u{01C5}' | '\u{01C8}' | '\u{01CB}' | '\u{01F2}'
            | '\u{1F88}'..='\u{1F8F}'
            | '\u{1F98}'..='\u{1F9F}'
            | '\u{1FA8}'..='\u{1FAF}'
            | '\u{1FBC}' | '\u{1FCC}' | '\u{1FFC}'
    )
}

/// Two decimals, ties to even on the exact binary value
fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

// =============================================================================
// TESTS
// =============================================================================
