//! # Stats Command
//!
//! Handles `!고인물` / `!ㄱㅇㅁ`: the room's top talkers by message count and by length.

use crate::application::normalizer::render_value;
use crate::domain::traits::RemoteInvoker;
use crate::domain::types::{InboundEvent, Operation, Payload, RemoteCall, ReplyOutcome};
use crate::strings::messages;

pub async fn handle_stats(backend: &dyn RemoteInvoker, event: &InboundEvent) -> ReplyOutcome {
    let call = RemoteCall::get(Operation::ChatStats {
        room: event.room.clone(),
    });
    let result = backend.invoke(call).await;
    super::respond(result, messages::STATS_FAILED, format_stats)
}

fn format_stats(payload: &Payload) -> Option<String> {
    let chat_count = render_value(payload.field("chat_count")?)?;
    let message_count = render_value(payload.field("message_count")?)?;
    Some(messages::stats_summary(&chat_count, &message_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeBackend;
    use serde_json::json;

    #[tokio::test]
    async fn asks_for_the_event_room() {
        let backend = FakeBackend::new().respond_json(
            "chat_stats",
            json!({"chat_count": ["1. a (10)"], "message_count": ["1. b (300자)"]}),
        );
        let event = InboundEvent::new("몰루 아카이브 PGR", "U", "!ㄱㅇㅁ");

        let outcome = handle_stats(&backend, &event).await;
        assert_eq!(
            outcome,
            ReplyOutcome::Reply(messages::stats_summary("1. a (10)", "1. b (300자)"))
        );
        assert_eq!(
            backend.calls()[0].operation,
            Operation::ChatStats {
                room: "몰루 아카이브 PGR".to_string()
            }
        );
    }

    #[tokio::test]
    async fn incomplete_stats_use_fallback() {
        let backend = FakeBackend::new().respond_json("chat_stats", json!({"chat_count": ["a"]}));
        let outcome = handle_stats(&backend, &InboundEvent::new("R", "U", "!고인물")).await;
        assert_eq!(outcome, ReplyOutcome::reply(messages::STATS_FAILED));
    }
}
