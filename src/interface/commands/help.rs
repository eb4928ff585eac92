//! # Help Commands
//!
//! Handles `!가이드` and `!ping`. Both answer locally without touching the backend.

use crate::domain::types::ReplyOutcome;

pub fn handle_guide() -> ReplyOutcome {
    ReplyOutcome::reply(crate::strings::help::GUIDE)
}

pub fn handle_ping() -> ReplyOutcome {
    ReplyOutcome::reply(crate::strings::messages::PONG)
}
