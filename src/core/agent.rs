//! Mood Mirror agent: message → normalized text → mood → reply → task result

use std::sync::Mutex;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::core::{extract_and_normalize, MoodClassifier, ResponseGenerator};
use crate::types::{
    utc_timestamp, A2AMessage, Artifact, MessagePart, MoodResult, TaskResult, TaskState,
    TaskStatus,
};
use crate::{AGENT_NAME, VERSION};

/// Name of the data artifact carrying the classification
pub const MOOD_ARTIFACT_NAME: &str = "mood_analysis";

/// Everything one turn produced, before it is wrapped for the wire
#[derive(Debug, Clone)]
pub struct MoodReply {
    /// Normalized text the classifier saw
    pub text: String,
    pub analysis: MoodResult,
    pub reply: String,
}

/// Stateless apart from the random source used for template choice
#[derive(Debug)]
pub struct MoodMirrorAgent {
    pub name: &'static str,
    pub version: &'static str,
    classifier: MoodClassifier,
    generator: ResponseGenerator,
    rng: Mutex<StdRng>,
}

impl Default for MoodMirrorAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl MoodMirrorAgent {
    /// Agent seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Agent with a fixed seed, for reproducible replies
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            name: AGENT_NAME,
            version: VERSION,
            classifier: MoodClassifier::new(),
            generator: ResponseGenerator::new(),
            rng: Mutex::new(rng),
        }
    }

    /// Classify already-extracted text and pick a reply
    pub fn reply_to_text(&self, raw: &str) -> MoodReply {
        let text = crate::core::normalize(raw);
        let analysis = self.classifier.analyze(&text);
        let reply = {
            let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            self.generator.generate(analysis.mood, analysis.score, &text, &mut *rng)
        };
        MoodReply { text, analysis, reply }
    }

    /// Process an incoming A2A message into a completed task
    pub fn process_message(
        &self,
        request_id: &Value,
        message: A2AMessage,
        context_id: Option<String>,
    ) -> TaskResult {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        self.process_message_with_rng(request_id, message, context_id, &mut *rng)
    }

    /// Same as `process_message` with a caller-supplied random source
    pub fn process_message_with_rng<R: Rng + ?Sized>(
        &self,
        request_id: &Value,
        message: A2AMessage,
        context_id: Option<String>,
        rng: &mut R,
    ) -> TaskResult {
        let text = extract_and_normalize(&message);
        let analysis = self.classifier.analyze(&text);
        let reply = self.generator.generate(analysis.mood, analysis.score, &text, rng);

        tracing::debug!(
            mood = %analysis.mood,
            score = analysis.score,
            keywords_found = analysis.keywords_found,
            chars = text.chars().count(),
            "classified message"
        );

        let now = utc_timestamp(Utc::now());

        let response_message = A2AMessage {
            role: "agent".to_string(),
            parts: vec![MessagePart::text(reply)],
            message_id: Some(Uuid::new_v4().to_string()),
            task_id: message.task_id.clone(),
        };

        let artifact = Artifact {
            artifact_id: Uuid::new_v4().to_string(),
            name: MOOD_ARTIFACT_NAME.to_string(),
            parts: vec![MessagePart::data(json!({
                "mood": analysis.mood,
                "score": analysis.score,
                "keywords_found": analysis.keywords_found,
                "analysis_timestamp": now,
            }))],
        };

        let context_id = message
            .task_id
            .clone()
            .or(context_id)
            .unwrap_or_else(generate_context_id);

        TaskResult {
            id: id_to_string(request_id),
            context_id,
            status: TaskStatus {
                state: TaskState::Completed,
                timestamp: now,
                message: Some(response_message.clone()),
            },
            artifacts: vec![artifact],
            history: vec![message, response_message],
        }
    }
}

/// JSON-RPC ids may be strings or numbers; tasks always carry a string
pub fn id_to_string(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        Value::Null => Uuid::new_v4().to_string(),
        other => other.to_string(),
    }
}

fn generate_context_id() -> String {
    let simple = Uuid::new_v4().simple().to_string();
    format!("mood-context-{}", &simple[..8])
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MoodLabel;
    use rand::rngs::mock::StepRng;

    fn user_message(text: &str, task_id: Option<&str>) -> A2AMessage {
        A2AMessage {
            role: "user".to_string(),
            parts: vec![MessagePart::text(text)],
            message_id: Some("msg-1".to_string()),
            task_id: task_id.map(str::to_string),
        }
    }

    #[test]
    fn test_process_builds_completed_task() {
        let agent = MoodMirrorAgent::with_seed(1);
        let result = agent.process_message(
            &json!("req-1"),
            user_message("<p>I love this, it's amazing!!</p>", Some("task-9")),
            None,
        );

        assert_eq!(result.id, "req-1");
        assert_eq!(result.context_id, "task-9");
        assert_eq!(result.status.state, TaskState::Completed);
        assert_eq!(result.history.len(), 2);

        let reply = result.status.message.as_ref().unwrap();
        assert_eq!(reply.role, "agent");
        assert_eq!(reply.task_id.as_deref(), Some("task-9"));
        let reply_text = reply.parts[0].text.as_deref().unwrap();
        assert!(reply_text.contains("I love this, it's amazing!!"));

        let data = result.artifacts[0].parts[0].data.as_ref().unwrap();
        assert_eq!(result.artifacts[0].name, MOOD_ARTIFACT_NAME);
        assert_eq!(data["mood"], "very positive");
        assert_eq!(data["score"], 1.0);
        assert_eq!(data["keywords_found"], true);
        assert!(data["analysis_timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_context_id_fallbacks() {
        let agent = MoodMirrorAgent::with_seed(1);
        let from_param = agent.process_message(
            &json!(1),
            user_message("hi", None),
            Some("ctx-7".to_string()),
        );
        assert_eq!(from_param.context_id, "ctx-7");
        assert_eq!(from_param.id, "1");

        let generated = agent.process_message(&json!("x"), user_message("hi", None), None);
        assert!(generated.context_id.starts_with("mood-context-"));
        assert_eq!(generated.context_id.len(), "mood-context-".len() + 8);
    }

    #[test]
    fn test_empty_message_greets() {
        let agent = MoodMirrorAgent::new();
        let mut rng = StepRng::new(0, 0);
        let result = agent.process_message_with_rng(
            &json!("e"),
            A2AMessage::default(),
            None,
            &mut rng,
        );
        let reply = result.status.message.unwrap();
        // "Hello!" is a single token with no signal → casual, first template
        assert_eq!(
            reply.parts[0].text.as_deref(),
            Some("💫 \"Hello!\" - interesting! What are your thoughts about this?")
        );
    }

    #[test]
    fn test_reply_to_text() {
        let agent = MoodMirrorAgent::with_seed(3);
        let out = agent.reply_to_text("  I hate this, it's terrible  ");
        assert_eq!(out.text, "I hate this, it's terrible");
        assert_eq!(out.analysis.mood, MoodLabel::VeryNegative);
        assert!(out.reply.contains(&out.text));
    }
}
