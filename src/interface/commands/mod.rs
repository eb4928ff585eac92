//! # Command Handlers
//!
//! Contains specific handler functions for each supported command (e.g., !고인물, !뉴스, !학습).
//! These handlers are invoked by the Router and each returns exactly one `ReplyOutcome`.

pub mod chat;
pub mod help;
pub mod learn;
pub mod news;
pub mod personality;
pub mod rankings;
pub mod stats;

use crate::application::normalizer;
use crate::domain::types::{Payload, RemoteResult, ReplyOutcome};

/// Failures get the normalizer's fixed message; a success is rendered by `render`,
/// falling back to `fallback` when the payload lacks what the command needs.
pub(crate) fn respond<F>(result: RemoteResult, fallback: &str, render: F) -> ReplyOutcome
where
    F: FnOnce(&Payload) -> Option<String>,
{
    match result {
        RemoteResult::Success(payload) => {
            ReplyOutcome::Reply(render(&payload).unwrap_or_else(|| fallback.to_string()))
        }
        failure @ RemoteResult::Failure { .. } => normalizer::normalize(&failure),
    }
}
