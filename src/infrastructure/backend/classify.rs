//! Maps transport errors onto [`ErrorKind`].

use crate::domain::types::ErrorKind;
use std::error::Error as _;

pub(super) fn classify(error: &reqwest::Error) -> ErrorKind {
    if error.is_timeout() {
        return ErrorKind::Timeout;
    }
    if error.is_connect() {
        return ErrorKind::ConnectionFailure;
    }
    classify_message(&error_chain(error))
}

/// Best-effort fallback for errors reqwest does not tag.
pub(super) fn classify_message(message: &str) -> ErrorKind {
    let lower = message.to_lowercase();
    if lower.contains("timed out") || lower.contains("timeout") {
        ErrorKind::Timeout
    } else if lower.contains("connection refused")
        || lower.contains("connection reset")
        || lower.contains("dns error")
        || lower.contains("failed to lookup address")
        || lower.contains("unknown host")
        || lower.contains("network is unreachable")
    {
        ErrorKind::ConnectionFailure
    } else {
        ErrorKind::Unknown
    }
}

/// `error: source: source ...`, since reqwest's own message hides the cause.
pub(super) fn error_chain(error: &reqwest::Error) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_matching() {
        assert_eq!(classify_message("operation timed out"), ErrorKind::Timeout);
        assert_eq!(
            classify_message("tcp connect error: Connection refused (os error 111)"),
            ErrorKind::ConnectionFailure
        );
        assert_eq!(
            classify_message("dns error: failed to lookup address information"),
            ErrorKind::ConnectionFailure
        );
        assert_eq!(classify_message("something odd"), ErrorKind::Unknown);
    }
}
