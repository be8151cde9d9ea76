//! Mood Mirror: heuristic mood classification for A2A chat webhooks
//!
//! Pipeline: text → normalizer → MoodClassifier → ResponseGenerator → reply

pub mod core;
pub mod error;
pub mod types;

// =============================================================================
// CLASSIFIER THRESHOLDS [C] - first match wins, evaluated top-down
// =============================================================================

/// score above this → "very positive"
pub const SCORE_THRESHOLD_VERY_POSITIVE: f64 = 0.7;

/// score above this → "positive"
pub const SCORE_THRESHOLD_POSITIVE: f64 = 0.4;

/// score above this → "slightly negative", otherwise "very negative"
pub const SCORE_THRESHOLD_SLIGHTLY_NEGATIVE: f64 = 0.2;

/// Count added when a surface signal fires
pub const SIGNAL_BOOST: u32 = 2;

/// More than this many '!' counts as excitement
pub const EXCLAMATION_MIN: usize = 1;

// =============================================================================
// STRUCTURAL FALLBACK [C] - used only when no lexical/surface signal fired
// =============================================================================

/// Token count above which text is "thoughtful"
pub const THOUGHTFUL_MIN_TOKENS: usize = 15;

/// Mean token length above which text is "thoughtful"
pub const THOUGHTFUL_MIN_MEAN_LEN: f64 = 6.0;

/// Token count at or below which text is "casual"
pub const CASUAL_MAX_TOKENS: usize = 2;

/// Score reported for the structural "excited" case
pub const EXCITED_SCORE: f64 = 0.8;

/// Score reported for every other neutral-ish case
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Text used when the normalized input is empty
pub const FALLBACK_TEXT: &str = "Hello!";

// =============================================================================
// AGENT
// =============================================================================

pub const AGENT_NAME: &str = "Mood Mirror Agent";

pub const VERSION: &str = "1.0.0";
