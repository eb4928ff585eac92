//! # Response Normalizer
//!
//! Turns a `RemoteResult` into the text the user sees.
//! Failures become fixed messages; successful payloads have their `reply` field extracted as is.
//! Operations known to double encode their answer (a JSON document serialized into a string
//! field, sometimes with Python-style quotes) go through [`decoded_reply_text`] instead.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use crate::domain::types::{ErrorKind, Payload, RemoteResult, ReplyOutcome};
use crate::strings::messages;

static ANALYSIS_WRAPPER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\{?\s*['"]?analysis['"]?\s*:\s*['"]?"#).expect("valid wrapper regex")
});
static WRAPPER_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"]?\s*\}?$"#).expect("valid wrapper tail regex"));

/// Field names that hold the interesting text inside a nested document, in priority order.
const NESTED_KEYS: [&str; 2] = ["analysis", "reply"];

pub fn normalize(result: &RemoteResult) -> ReplyOutcome {
    match result {
        RemoteResult::Failure { kind, .. } => ReplyOutcome::Reply(failure_message(*kind)),
        RemoteResult::Success(payload) => match reply_text(payload) {
            Some(text) => ReplyOutcome::Reply(text),
            None => ReplyOutcome::NoReply,
        },
    }
}

pub fn failure_message(kind: ErrorKind) -> String {
    match kind {
        ErrorKind::Timeout => messages::TIMEOUT.to_string(),
        ErrorKind::ConnectionFailure => messages::CONNECTION_FAILED.to_string(),
        ErrorKind::RemoteError(status) => messages::remote_error(status),
        ErrorKind::MalformedResponse => messages::MALFORMED_RESPONSE.to_string(),
        ErrorKind::Unknown => messages::UNKNOWN_ERROR.to_string(),
    }
}

/// The `reply` field untouched, or the whole body when the backend answered with a bare string.
pub fn reply_text(payload: &Payload) -> Option<String> {
    let text = match payload {
        Payload::Text(raw) => raw.clone(),
        Payload::Structured(value) => render_value(value.get("reply")?)?,
    };
    (!text.trim().is_empty()).then_some(text)
}

/// The `reply` field with one level of string encoding and its leftovers removed.
pub fn decoded_reply_text(payload: &Payload) -> Option<String> {
    let text = match payload {
        Payload::Text(raw) => unwrap_encoded(raw),
        Payload::Structured(value) => match value.get("reply")? {
            Value::String(raw) => unwrap_encoded(raw),
            other => render_value(other)?,
        },
    };
    (!text.is_empty()).then_some(text)
}

/// Renders a JSON value as reply text: strings as-is, lists one item per line.
pub fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(render_value)
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        other => Some(other.to_string()),
    }
}

fn unwrap_encoded(raw: &str) -> String {
    let trimmed = raw.trim();
    if !looks_structured(trimmed) {
        return clean(trimmed);
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::String(inner)) => clean(&inner),
        Ok(Value::Object(map)) => NESTED_KEYS
            .iter()
            .find_map(|key| map.get(*key))
            .and_then(render_value)
            .map(|text| clean(&text))
            .unwrap_or_else(|| clean(trimmed)),
        Ok(other) => render_value(&other)
            .map(|text| clean(&text))
            .unwrap_or_default(),
        Err(_) => clean(trimmed),
    }
}

fn looks_structured(text: &str) -> bool {
    text.starts_with('{') || text.starts_with('[') || text.starts_with('"')
}

/// Strips leftovers of double encoding: surrounding quotes, escaped quotes and an
/// `{"analysis": ...}` wrapper that failed to parse as JSON.
fn clean(text: &str) -> String {
    let text = text.trim();
    let text = text.strip_prefix(['"', '\'']).unwrap_or(text);
    let text = text.strip_suffix(['"', '\'']).unwrap_or(text);
    let text = text.replace("\\'", "'").replace("\\\"", "\"");

    let text = match ANALYSIS_WRAPPER.find(&text) {
        Some(wrapper) => {
            let body = &text[wrapper.end()..];
            WRAPPER_TAIL.replace(body, "").into_owned()
        }
        None => text,
    };
    text.trim().to_string()
}
