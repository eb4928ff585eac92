//! # Learn Commands
//!
//! Handles `!학습 <문장>` and `!학습확인`: teach the room a sentence and read it back.

use serde_json::Value;

use crate::domain::traits::RemoteInvoker;
use crate::domain::types::{InboundEvent, Operation, RemoteCall, ReplyOutcome};
use crate::strings::messages;

pub async fn handle_learn(
    backend: &dyn RemoteInvoker,
    event: &InboundEvent,
    sentence: &str,
) -> ReplyOutcome {
    let sentence = sentence.trim();
    if sentence.is_empty() {
        return ReplyOutcome::reply(messages::LEARN_USAGE);
    }

    let call = RemoteCall::post(
        Operation::LearnSentence,
        [
            ("room", Value::from(event.room.as_str())),
            ("sentence", Value::from(sentence)),
        ],
    );
    let result = backend.invoke(call).await;
    super::respond(result, messages::LEARN_FAILED, |payload| {
        payload.is_success().then(|| messages::learned(sentence))
    })
}

pub async fn handle_learned(backend: &dyn RemoteInvoker, event: &InboundEvent) -> ReplyOutcome {
    let call = RemoteCall::get(Operation::LearnedSentence {
        room: event.room.clone(),
    });
    let result = backend.invoke(call).await;
    super::respond(result, messages::NOTHING_LEARNED, |payload| {
        payload
            .str_field("sentence")
            .filter(|s| !s.is_empty())
            .map(messages::current_learned)
    })
}
