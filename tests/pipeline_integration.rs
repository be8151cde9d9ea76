//! Integration tests for the classification pipeline
//!
//! Tests the full path: raw text → normalize → MoodClassifier → ResponseGenerator

use moodmirror::core::{analyze_mood, normalize, MoodClassifier, ResponseGenerator};
use moodmirror::types::MoodLabel;
use moodmirror::FALLBACK_TEXT;
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

const SAMPLES: &[&str] = &[
    "",
    "   ",
    "I love this, it's amazing!!",
    "I hate this, it's terrible",
    "THIS IS SO COOL",
    "ok",
    "meh 😔 whatever",
    "🎉🎉🎉",
    "Honestly the deployment went fine but the review process was stressful and slow and nobody answered",
    "Ünïcödé façade naïveté",
    "!!!",
    "good bad good bad",
    "<b>markup</b> only",
];

#[test]
fn test_full_pipeline_path() {
    let classifier = MoodClassifier::new();
    let generator = ResponseGenerator::new();
    let mut rng = StdRng::seed_from_u64(11);

    let text = normalize("<p>I'm   so <i>happy</i> today 😊</p>");
    assert_eq!(text, "I'm so happy today 😊");

    let result = classifier.analyze(&text);
    assert_eq!(result.mood, MoodLabel::VeryPositive);

    let reply = generator.generate(result.mood, result.score, &text, &mut rng);
    assert!(reply.contains(&text));
}

#[test]
fn test_score_bounds_and_rounding() {
    for sample in SAMPLES {
        let result = analyze_mood(sample);
        assert!(
            (0.0..=1.0).contains(&result.score),
            "score out of range for {:?}: {}",
            sample,
            result.score
        );
        let scaled = result.score * 100.0;
        assert!((scaled - scaled.round()).abs() < 1e-9, "score not rounded: {}", result.score);
        assert!(MoodLabel::ALL.contains(&result.mood));
    }
}

#[test]
fn test_classifier_is_idempotent() {
    for sample in SAMPLES {
        assert_eq!(analyze_mood(sample), analyze_mood(sample));
    }
}

#[test]
fn test_reply_always_echoes_normalized_text() {
    let generator = ResponseGenerator::new();
    let mut rng = StdRng::seed_from_u64(5);
    for sample in SAMPLES {
        let text = normalize(sample);
        let result = analyze_mood(&text);
        let reply = generator.generate(result.mood, result.score, &text, &mut rng);
        assert!(!reply.is_empty());
        assert!(reply.contains(&text));
    }
}

#[test]
fn test_empty_input_becomes_greeting() {
    let text = normalize("<p></p>");
    assert_eq!(text, FALLBACK_TEXT);
    assert_eq!(analyze_mood(&text).mood, MoodLabel::Casual);
}

#[test]
fn test_balanced_words_are_positive() {
    let result = analyze_mood("good bad good bad");
    assert_eq!(result.score, 0.5);
    assert_eq!(result.mood, MoodLabel::Positive);
}

#[test]
fn test_emoji_only_positive() {
    let result = analyze_mood("🎉🎉🎉");
    assert_eq!(result.mood, MoodLabel::VeryPositive);
    assert!(result.keywords_found);
}
