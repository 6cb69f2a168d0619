//! Reply normalization: fence stripping and JSON decode-with-fallback.
//!
//! Both stages are pure so endpoint fallbacks can be tested without a model.
//! Stripping is deliberately narrow: one "```json" or "```" opener and one
//! closing "```" are removed, nothing more. Replies that only parse under a
//! looser reading fall through to the caller's default.

use serde_json::{Map, Value};

const FENCE: &str = "```";
const JSON_FENCE: &str = "```json";

/// Trims the reply and removes at most one opening and one closing fence.
pub fn strip_json_fences(text: &str) -> &str {
    let mut text = text.trim();
    if let Some(stripped) = text.strip_prefix(JSON_FENCE) {
        text = stripped;
    }
    if let Some(stripped) = text.strip_prefix(FENCE) {
        text = stripped;
    }
    if let Some(stripped) = text.strip_suffix(FENCE) {
        text = stripped.trim();
    }
    text
}

/// Decodes `text` as a JSON object. Arrays, scalars and invalid JSON yield `None`.
pub fn decode_object(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Strip then decode.
pub fn normalize_json_reply(reply: &str) -> Option<Map<String, Value>> {
    decode_object(strip_json_fences(reply))
}

/// Reads `key` as display text: strings as-is, other values in JSON form,
/// `default` when the key is absent.
pub fn text_or(map: &Map<String, Value>, key: &str, default: &str) -> String {
    match map.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => default.to_string(),
    }
}
