//! # Rankings Commands
//!
//! Handles `!순위` (monthly attendance ranking) and `!순위업데이트` (recalculate it).

use serde_json::Value;

use crate::application::normalizer::render_value;
use crate::domain::traits::RemoteInvoker;
use crate::domain::types::{InboundEvent, Operation, RemoteCall, ReplyOutcome};
use crate::strings::messages;

pub async fn handle_rankings(backend: &dyn RemoteInvoker, event: &InboundEvent) -> ReplyOutcome {
    let call = RemoteCall::get(Operation::MonthlyRankings {
        room: event.room.clone(),
    });
    let result = backend.invoke(call).await;
    super::respond(result, messages::RANKINGS_FAILED, |payload| {
        render_value(payload.field("rankings")?).filter(|text| !text.is_empty())
    })
}

pub async fn handle_recalculate(backend: &dyn RemoteInvoker, event: &InboundEvent) -> ReplyOutcome {
    let call = RemoteCall::post(
        Operation::RecalculateRankings,
        [("room", Value::from(event.room.as_str()))],
    );
    let result = backend.invoke(call).await;
    super::respond(result, messages::RANKINGS_RECALCULATE_FAILED, |payload| {
        payload
            .is_success()
            .then(|| messages::RANKINGS_RECALCULATED.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeBackend;
    use serde_json::json;

    #[tokio::test]
    async fn rankings_text_is_replied_as_is() {
        let backend = FakeBackend::new().respond_json(
            "monthly_rankings",
            json!({"rankings": "🏅 1위 채채 (20일)\n🥈 2위 짬뽕순두부 (18일)"}),
        );
        let outcome = handle_rankings(&backend, &InboundEvent::new("R", "U", "!순위")).await;
        assert_eq!(
            outcome,
            ReplyOutcome::reply("🏅 1위 채채 (20일)\n🥈 2위 짬뽕순두부 (18일)")
        );
    }

    #[tokio::test]
    async fn missing_rankings_use_fallback() {
        let backend = FakeBackend::new().respond_json("monthly_rankings", json!({"rankings": []}));
        let outcome = handle_rankings(&backend, &InboundEvent::new("R", "U", "!순위")).await;
        assert_eq!(outcome, ReplyOutcome::reply(messages::RANKINGS_FAILED));
    }

    #[tokio::test]
    async fn recalculate_posts_room() {
        let backend = FakeBackend::new();
        let outcome = handle_recalculate(&backend, &InboundEvent::new("R", "U", "!순위업데이트")).await;
        assert_eq!(outcome, ReplyOutcome::reply(messages::RANKINGS_RECALCULATED));
        assert_eq!(
            backend.calls_to("recalculate_monthly_rankings")[0].payload_str("room"),
            Some("R")
        );
    }
}
