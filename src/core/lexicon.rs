//! Static word and emoji sets used by the classifier
//!
//! Words match as substrings of the lower-cased text, so "good" also
//! fires inside "goodbye". Each entry counts at most once per message.

/// Positive-signal words
pub const POSITIVE_WORDS: &[&str] = &[
    "happy",
    "good",
    "great",
    "awesome",
    "thanks",
    "love",
    "nice",
    "excited",
    "amazing",
    "wonderful",
    "perfect",
    "fantastic",
    "yay",
    "joy",
    "pleased",
    "delighted",
    "brilliant",
    "excellent",
    "super",
    "outstanding",
    "marvelous",
    "fabulous",
    "terrific",
];

/// Negative-signal words
pub const NEGATIVE_WORDS: &[&str] = &[
    "sad",
    "bad",
    "angry",
    "hate",
    "worried",
    "stress",
    "ugh",
    "annoying",
    "terrible",
    "awful",
    "horrible",
    "dislike",
    "upset",
    "frustrated",
    "mad",
    "disappointed",
    "dreadful",
    "miserable",
    "depressed",
    "anxious",
    "scared",
    "fearful",
];

pub const POSITIVE_EMOJI: &[&str] = &["😊", "😂", "❤️", "🎉", "✨", "🥳", "😍", "👍", "⭐"];

pub const NEGATIVE_EMOJI: &[&str] = &["😢", "😠", "💔", "😞", "👎", "😤", "💀", "😔", "😩"];

/// Number of entries in `words` that occur anywhere in `lowered`
pub fn count_hits(words: &[&str], lowered: &str) -> u32 {
    words.iter().filter(|w| lowered.contains(*w)).count() as u32
}

/// True if any glyph from `set` occurs in `text`
pub fn contains_any(set: &[&str], text: &str) -> bool {
    set.iter().any(|glyph| text.contains(glyph))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lexicons_have_no_duplicates() {
        let pos: HashSet<_> = POSITIVE_WORDS.iter().collect();
        let neg: HashSet<_> = NEGATIVE_WORDS.iter().collect();
        assert_eq!(pos.len(), POSITIVE_WORDS.len());
        assert_eq!(neg.len(), NEGATIVE_WORDS.len());
        assert!(pos.is_disjoint(&neg));
    }

    #[test]
    fn test_substring_matching() {
        assert_eq!(count_hits(POSITIVE_WORDS, "goodbye"), 1);
        assert_eq!(count_hits(NEGATIVE_WORDS, "badminton and madness"), 2);
        assert_eq!(count_hits(POSITIVE_WORDS, "love love love"), 1);
    }

    #[test]
    fn test_emoji_sets() {
        assert!(contains_any(POSITIVE_EMOJI, "party 🎉 time"));
        assert!(contains_any(NEGATIVE_EMOJI, "💔"));
        assert!(!contains_any(NEGATIVE_EMOJI, "plain text"));
    }
}
