//! Normalizer: turns raw message parts into one clean line of text

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use crate::FALLBACK_TEXT;
use crate::types::{A2AMessage, MessagePart};

lazy_static! {
    /// Anything that looks like a markup tag
    static ref RE_TAG: Regex = Regex::new(r"<[^>]+>").unwrap();

    static ref RE_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Rich-text editors send this for an empty paragraph
const EMPTY_PARAGRAPH: &str = "<p></p>";

/// Strip tags, collapse whitespace, trim. Empty results become `FALLBACK_TEXT`.
pub fn normalize(raw: &str) -> String {
    let stripped = RE_TAG.replace_all(raw, "");
    let collapsed = RE_WHITESPACE.replace_all(&stripped, " ");
    let clean = collapsed.trim();

    if clean.is_empty() {
        FALLBACK_TEXT.to_string()
    } else {
        clean.to_string()
    }
}

/// Concatenate the text-bearing parts of a message.
///
/// Text parts contribute their `text`; data parts contribute any
/// `{"kind": "text", "text": ...}` objects found in a `data` array.
/// The result is not normalized.
pub fn extract_text(message: &A2AMessage) -> String {
    let mut fragments: Vec<&str> = Vec::new();

    for part in &message.parts {
        match part.kind.as_str() {
            "text" => {
                if let Some(text) = keep_fragment(part.text.as_deref()) {
                    fragments.push(text);
                }
            }
            "data" => collect_data_fragments(part, &mut fragments),
            _ => {}
        }
    }

    fragments.join(" ").trim().to_string()
}

/// Extract then normalize in one step
pub fn extract_and_normalize(message: &A2AMessage) -> String {
    normalize(&extract_text(message))
}

fn collect_data_fragments<'a>(part: &'a MessagePart, fragments: &mut Vec<&'a str>) {
    let Some(Value::Array(items)) = &part.data else {
        return;
    };

    for item in items {
        let Value::Object(obj) = item else { continue };
        if obj.get("kind").and_then(Value::as_str) != Some("text") {
            continue;
        }
        if let Some(text) = keep_fragment(obj.get("text").and_then(Value::as_str)) {
            fragments.push(text);
        }
    }
}

fn keep_fragment(text: Option<&str>) -> Option<&str> {
    let text = text?.trim();
    if text.is_empty() || text == EMPTY_PARAGRAPH {
        None
    } else {
        Some(text)
    }
}

// =============================================================================
// TESTS
// =============================================================================
