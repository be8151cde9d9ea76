//! Core modules for Mood Mirror

pub mod normalizer;
pub mod lexicon;
pub mod classifier;
pub mod responder;
pub mod agent;
pub mod api;

pub use normalizer::{normalize, extract_text, extract_and_normalize};
pub use classifier::{MoodClassifier, analyze_mood, classify};
pub use responder::{ResponseGenerator, templates_for, render};
pub use agent::{MoodMirrorAgent, MoodReply, MOOD_ARTIFACT_NAME};
pub use api::{create_router, run_server, A2A_PATH};
