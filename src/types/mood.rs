//! Mood label definitions

use serde::{Deserialize, Serialize};

/// The eight mood labels the classifier can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoodLabel {
    #[serde(rename = "very positive")]
    VeryPositive,
    #[serde(rename = "positive")]
    Positive,
    /// Only reachable through the structural fallback
    #[serde(rename = "excited")]
    Excited,
    #[serde(rename = "neutral")]
    Neutral,
    /// Long or wordy text with no sentiment signal
    #[serde(rename = "thoughtful")]
    Thoughtful,
    /// One or two tokens with no sentiment signal
    #[serde(rename = "casual")]
    Casual,
    #[serde(rename = "slightly negative")]
    SlightlyNegative,
    #[serde(rename = "very negative")]
    VeryNegative,
}

impl MoodLabel {
    /// Every label, in template-table order
    pub const ALL: [MoodLabel; 8] = [
        MoodLabel::VeryPositive,
        MoodLabel::Positive,
        MoodLabel::Excited,
        MoodLabel::Neutral,
        MoodLabel::Thoughtful,
        MoodLabel::Casual,
        MoodLabel::SlightlyNegative,
        MoodLabel::VeryNegative,
    ];

    /// Wire label, e.g. "very positive"
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLabel::VeryPositive => "very positive",
            MoodLabel::Positive => "positive",
            MoodLabel::Excited => "excited",
            MoodLabel::Neutral => "neutral",
            MoodLabel::Thoughtful => "thoughtful",
            MoodLabel::Casual => "casual",
            MoodLabel::SlightlyNegative => "slightly negative",
            MoodLabel::VeryNegative => "very negative",
        }
    }

    /// Parse a wire label back into a MoodLabel
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.as_str() == label)
    }

    /// Terminal color name for `colored`
    pub fn color(&self) -> &'static str {
        match self {
            MoodLabel::VeryPositive | MoodLabel::Positive => "green",
            MoodLabel::Excited => "magenta",
            MoodLabel::Neutral | MoodLabel::Casual => "white",
            MoodLabel::Thoughtful => "cyan",
            MoodLabel::SlightlyNegative => "yellow",
            MoodLabel::VeryNegative => "red",
        }
    }

    /// Get emoji for mood
    pub fn emoji(&self) -> &'static str {
        match self {
            MoodLabel::VeryPositive => "🌟",
            MoodLabel::Positive => "🙂",
            MoodLabel::Excited => "⚡",
            MoodLabel::Neutral => "🤔",
            MoodLabel::Thoughtful => "🧠",
            MoodLabel::Casual => "💬",
            MoodLabel::SlightlyNegative => "🌧️",
            MoodLabel::VeryNegative => "💔",
        }
    }
}

impl std::fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_spaced_label() {
        let json = serde_json::to_string(&MoodLabel::SlightlyNegative).unwrap();
        assert_eq!(json, "\"slightly negative\"");
    }

    #[test]
    fn test_from_label_covers_all() {
        for mood in MoodLabel::ALL {
            assert_eq!(MoodLabel::from_label(mood.as_str()), Some(mood));
        }
        assert_eq!(MoodLabel::from_label("negative"), None);
    }
}
