//! # Personality Command
//!
//! Handles `!성격분석 <user>`. The analysis comes back double encoded, so the reply goes
//! through the normalizer's decoding path.

use crate::application::normalizer;
use crate::domain::traits::RemoteInvoker;
use crate::domain::types::{InboundEvent, RemoteCall, ReplyOutcome};
use crate::strings::messages;

pub async fn handle_personality(
    backend: &dyn RemoteInvoker,
    event: &InboundEvent,
    target: Option<&str>,
) -> ReplyOutcome {
    let Some(target) = target else {
        return ReplyOutcome::reply(messages::PERSONALITY_USAGE);
    };

    // The backend matches on this exact prefix, whatever marker the bot uses.
    let message = format!("!성격분석 {target}");
    let result = backend
        .invoke(RemoteCall::process_message(event, &message))
        .await;
    super::respond(result, messages::PERSONALITY_FAILED, normalizer::decoded_reply_text)
}
