//! Response Generator: picks a reply template for a mood and echoes the text
//!
//! Randomness is injected so callers (and tests) control template choice.

use rand::seq::SliceRandom;
use rand::Rng;
use crate::types::MoodLabel;

/// Placeholder substituted with the user's text
pub const PLACEHOLDER: &str = "{text}";

const VERY_POSITIVE: &[&str] = &[
    "🌟 I can feel your positive energy! \"{text}\" - that's wonderful!",
    "😊 Your happiness is contagious! \"{text}\" made me smile too!",
    "🎉 So much positivity! I love that you said: \"{text}\"",
    "✨ Your enthusiasm in \"{text}\" is absolutely infectious!",
    "🥳 What fantastic energy! \"{text}\" radiates positivity!",
];

const POSITIVE: &[&str] = &[
    "🙂 That sounds nice! \"{text}\" - I'm glad things are going well!",
    "💫 I sense good vibes from \"{text}\" - keep it up!",
    "✨ Your message \"{text}\" has such positive energy!",
    "😄 I'm smiling reading \"{text}\" - such good news!",
    "🌞 Your optimism in \"{text}\" is really uplifting!",
];

const EXCITED: &[&str] = &[
    "🎊 I can feel your excitement! \"{text}\" - how thrilling!",
    "⚡ So much energy in \"{text}\" - this is exciting!",
    "🚀 Your excitement is palpable! \"{text}\" sounds amazing!",
    "🌈 What an exciting message! \"{text}\" got me pumped too!",
];

const NEUTRAL: &[&str] = &[
    "🤔 \"{text}\" - I'm here to listen if you want to share more!",
    "📝 You mentioned \"{text}\" - tell me how you're really feeling!",
    "💭 \"{text}\" - I'm curious to know more about your thoughts!",
    "🎯 \"{text}\" - I'm listening. What makes you say that?",
];

const THOUGHTFUL: &[&str] = &[
    "🔍 \"{text}\" - that's intriguing! Help me understand your perspective.",
    "🧠 \"{text}\" - that sounds like it has a story behind it!",
    "💫 \"{text}\" - interesting point! What are your thoughts about this?",
    "🌌 \"{text}\" - fascinating! Could you elaborate?",
];

const CASUAL: &[&str] = &[
    "💫 \"{text}\" - interesting! What are your thoughts about this?",
    "🎨 \"{text}\" - creative thinking! I'd love to explore this more with you.",
    "🌟 \"{text}\" - I sense there's more to this. Want to share?",
    "😊 \"{text}\" - simple but meaningful! Tell me more!",
];

const SLIGHTLY_NEGATIVE: &[&str] = &[
    "🤗 I sense some concern in \"{text}\" - I'm here for you!",
    "💝 \"{text}\" sounds tough - want to talk about it?",
    "🌧️ I hear the difficulty in \"{text}\" - you're not alone!",
    "🫂 \"{text}\" seems challenging - I'm here to support you.",
];

const VERY_NEGATIVE: &[&str] = &[
    "🫂 I can feel the pain in \"{text}\" - that must be really hard.",
    "❤️ \"{text}\" sounds really challenging - I'm listening.",
    "🌈 Even in difficult moments like \"{text}\", I'm here to support you.",
    "💔 I hear your struggle in \"{text}\" - you're being so strong.",
];

/// Ordered template list for a mood
pub fn templates_for(mood: MoodLabel) -> &'static [&'static str] {
    match mood {
        MoodLabel::VeryPositive => VERY_POSITIVE,
        MoodLabel::Positive => POSITIVE,
        MoodLabel::Excited => EXCITED,
        MoodLabel::Neutral => NEUTRAL,
        MoodLabel::Thoughtful => THOUGHTFUL,
        MoodLabel::Casual => CASUAL,
        MoodLabel::SlightlyNegative => SLIGHTLY_NEGATIVE,
        MoodLabel::VeryNegative => VERY_NEGATIVE,
    }
}

/// Template list for a wire label; unknown labels get the neutral list
pub fn templates_for_label(label: &str) -> &'static [&'static str] {
    MoodLabel::from_label(label)
        .map(templates_for)
        .unwrap_or(NEUTRAL)
}

/// Fill a template's placeholder with the original text, verbatim
pub fn render(template: &str, text: &str) -> String {
    template.replacen(PLACEHOLDER, text, 1)
}

/// Reply generator
#[derive(Debug, Default, Clone, Copy)]
pub struct ResponseGenerator;

impl ResponseGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Pick a template for `mood` uniformly at random and fill it with `text`.
    ///
    /// `score` is accepted for callers that carry it alongside the mood; the
    /// choice depends only on the label.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        mood: MoodLabel,
        _score: f64,
        text: &str,
        rng: &mut R,
    ) -> String {
        pick(templates_for(mood), text, rng)
    }

    /// Same as `generate`, keyed by wire label
    pub fn generate_for_label<R: Rng + ?Sized>(&self, label: &str, text: &str, rng: &mut R) -> String {
        pick(templates_for_label(label), text, rng)
    }
}

fn pick<R: Rng + ?Sized>(templates: &[&str], text: &str, rng: &mut R) -> String {
    let template = templates.choose(rng).copied().unwrap_or(NEUTRAL[0]);
    render(template, text)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_every_mood_has_templates_with_placeholder() {
        for mood in MoodLabel::ALL {
            let templates = templates_for(mood);
            assert!(!templates.is_empty(), "{} has no templates", mood);
            for t in templates {
                assert!(t.contains(PLACEHOLDER), "template missing placeholder: {}", t);
            }
        }
    }

    #[test]
    fn test_reply_contains_text_for_every_mood() {
        let generator = ResponseGenerator::new();
        let mut rng = StdRng::seed_from_u64(7);
        let text = "my cat knocked over {the} plant";
        for mood in MoodLabel::ALL {
            for _ in 0..20 {
                let reply = generator.generate(mood, 0.5, text, &mut rng);
                assert!(reply.contains(text), "reply for {} lost the text: {}", mood, reply);
            }
        }
    }

    #[test]
    fn test_zero_source_picks_first_template() {
        let generator = ResponseGenerator::new();
        let mut rng = StepRng::new(0, 0);
        let reply = generator.generate(MoodLabel::VeryNegative, 0.0, "rough day", &mut rng);
        assert_eq!(
            reply,
            "🫂 I can feel the pain in \"rough day\" - that must be really hard."
        );
    }

    #[test]
    fn test_same_seed_same_reply() {
        let generator = ResponseGenerator::new();
        let a = generator.generate(MoodLabel::Casual, 0.5, "hey", &mut StdRng::seed_from_u64(42));
        let b = generator.generate(MoodLabel::Casual, 0.5, "hey", &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_label_uses_neutral() {
        let generator = ResponseGenerator::new();
        let mut rng = StepRng::new(0, 0);
        let reply = generator.generate_for_label("negative", "hmm", &mut rng);
        assert_eq!(reply, render(NEUTRAL[0], "hmm"));
    }

    #[test]
    fn test_render_is_verbatim() {
        assert_eq!(render("<{text}>", "a {text} b"), "<a {text} b>");
    }
}
