//! # Domain Types
//!
//! Common data structures and enums used across the message-handling logic:
//! the inbound event, the parsed command token, backend calls and their results.

use serde_json::{Map, Value};
use thiserror::Error;

/// One incoming chat message, as supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundEvent {
    pub room: String,
    pub sender_id: String,
    pub text: String,
    pub is_group_chat: bool,
}

impl InboundEvent {
    pub fn new(room: impl Into<String>, sender_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            room: room.into(),
            sender_id: sender_id.into(),
            text: text.into(),
            is_group_chat: true,
        }
    }
}

/// A command name plus its arguments, parsed from marker-prefixed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandToken {
    pub name: String,
    pub args: Vec<String>,
    /// Everything after the name, trimmed, with its original spacing.
    pub rest: String,
}

impl CommandToken {
    /// Strips `marker` and splits the remainder on whitespace.
    /// Returns `None` when the text does not start with the marker.
    pub fn parse(text: &str, marker: &str) -> Option<Self> {
        let body = text.strip_prefix(marker)?;
        let (name, rest) = match body.find(char::is_whitespace) {
            Some(idx) => (&body[..idx], body[idx..].trim()),
            None => (body, ""),
        };
        Some(Self {
            name: name.to_string(),
            args: rest.split_whitespace().map(str::to_string).collect(),
            rest: rest.to_string(),
        })
    }

    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Logical backend operations. Paths are resolved by the remote client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    SaveMessage,
    ProcessMessage,
    ChatStats { room: String },
    TodayNews,
    RefreshNews,
    MonthlyRankings { room: String },
    RecalculateRankings,
    LearnSentence,
    LearnedSentence { room: String },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::SaveMessage => "save_message",
            Operation::ProcessMessage => "process_message",
            Operation::ChatStats { .. } => "chat_stats",
            Operation::TodayNews => "today_news",
            Operation::RefreshNews => "refresh_news",
            Operation::MonthlyRankings { .. } => "monthly_rankings",
            Operation::RecalculateRankings => "recalculate_monthly_rankings",
            Operation::LearnSentence => "learn_sentence",
            Operation::LearnedSentence { .. } => "get_learned_sentence",
        }
    }

    /// Path segments below the base URL. Room names are pushed as single
    /// segments so the transport percent-encodes them.
    pub fn path_segments(&self) -> Vec<&str> {
        match self {
            Operation::ChatStats { room }
            | Operation::MonthlyRankings { room }
            | Operation::LearnedSentence { room } => vec![self.name(), room.as_str()],
            _ => vec![self.name()],
        }
    }
}

/// A single backend interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteCall {
    pub operation: Operation,
    pub method: Method,
    pub payload: Option<Map<String, Value>>,
}

impl RemoteCall {
    pub fn get(operation: Operation) -> Self {
        Self {
            operation,
            method: Method::Get,
            payload: None,
        }
    }

    pub fn post<I, K>(operation: Operation, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self {
            operation,
            method: Method::Post,
            payload: Some(fields.into_iter().map(|(k, v)| (k.into(), v)).collect()),
        }
    }

    pub fn save_message(event: &InboundEvent) -> Self {
        Self::post(Operation::SaveMessage, message_fields(event, &event.text))
    }

    /// `process_message` on behalf of the event's sender with an arbitrary message body.
    pub fn process_message(event: &InboundEvent, message: &str) -> Self {
        Self::post(Operation::ProcessMessage, message_fields(event, message))
    }

    #[cfg(test)]
    pub fn payload_str(&self, key: &str) -> Option<&str> {
        self.payload.as_ref()?.get(key)?.as_str()
    }
}

fn message_fields(event: &InboundEvent, message: &str) -> [(&'static str, Value); 3] {
    [
        ("user_id", Value::from(event.sender_id.as_str())),
        ("room", Value::from(event.room.as_str())),
        ("message", Value::from(message)),
    ]
}

/// Classified failure of a remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("request timed out")]
    Timeout,
    #[error("connection failed")]
    ConnectionFailure,
    #[error("backend returned status {0}")]
    RemoteError(u16),
    #[error("malformed response body")]
    MalformedResponse,
    #[error("unknown transport error")]
    Unknown,
}

impl ErrorKind {
    /// Transport-level failures are retried; answers from the backend are not.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ErrorKind::Timeout | ErrorKind::ConnectionFailure | ErrorKind::Unknown
        )
    }
}

/// A decoded backend body.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The body was a bare JSON string.
    Text(String),
    Structured(Value),
}

impl Payload {
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::String(s) => Payload::Text(s),
            other => Payload::Structured(other),
        }
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        match self {
            Payload::Structured(value) => value.get(key),
            Payload::Text(_) => None,
        }
    }

    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.field(key).and_then(Value::as_str)
    }

    /// `status == "success"`, the backend's acknowledgement convention.
    pub fn is_success(&self) -> bool {
        self.str_field("status") == Some("success")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RemoteResult {
    Success(Payload),
    Failure { kind: ErrorKind, detail: String },
}

impl RemoteResult {
    pub fn failure(kind: ErrorKind, detail: impl Into<String>) -> Self {
        RemoteResult::Failure {
            kind,
            detail: detail.into(),
        }
    }
}

/// What the pipeline sends back for one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    Reply(String),
    NoReply,
}

impl ReplyOutcome {
    pub fn reply(text: impl Into<String>) -> Self {
        ReplyOutcome::Reply(text.into())
    }

    #[cfg(test)]
    pub fn text(&self) -> Option<&str> {
        match self {
            ReplyOutcome::Reply(text) => Some(text),
            ReplyOutcome::NoReply => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_args_and_rest() {
        let token = CommandToken::parse("!학습  오늘은  맑음", "!").unwrap();
        assert_eq!(token.name, "학습");
        assert_eq!(token.args, vec!["오늘은", "맑음"]);
        assert_eq!(token.rest, "오늘은  맑음");
        assert_eq!(token.arg(0), Some("오늘은"));
        assert_eq!(token.arg(2), None);
    }

    #[test]
    fn bare_command_has_no_args() {
        let token = CommandToken::parse("!뉴스", "!").unwrap();
        assert_eq!(token.name, "뉴스");
        assert!(token.args.is_empty());
        assert_eq!(token.rest, "");
    }

    #[test]
    fn text_without_marker_is_not_a_command() {
        assert!(CommandToken::parse("뉴스", "!").is_none());
        assert!(CommandToken::parse("*뉴스", "!").is_none());
        assert_eq!(CommandToken::parse("*뉴스", "*").unwrap().name, "뉴스");
    }

    #[test]
    fn room_operations_carry_room_segment() {
        let op = Operation::ChatStats {
            room: "몰루 아카이브".to_string(),
        };
        assert_eq!(op.path_segments(), vec!["chat_stats", "몰루 아카이브"]);
        assert_eq!(Operation::TodayNews.path_segments(), vec!["today_news"]);
    }

    #[test]
    fn save_message_payload() {
        let event = InboundEvent::new("R", "U", "hello");
        let call = RemoteCall::save_message(&event);
        assert_eq!(call.method, Method::Post);
        assert_eq!(call.payload_str("user_id"), Some("U"));
        assert_eq!(call.payload_str("room"), Some("R"));
        assert_eq!(call.payload_str("message"), Some("hello"));
    }

    #[test]
    fn only_transport_failures_retry() {
        assert!(ErrorKind::Timeout.is_retryable());
        assert!(ErrorKind::ConnectionFailure.is_retryable());
        assert!(!ErrorKind::RemoteError(500).is_retryable());
        assert!(!ErrorKind::MalformedResponse.is_retryable());
    }
}
