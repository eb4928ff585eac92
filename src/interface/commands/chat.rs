//! # Chat & Attendance
//!
//! Free-form messages and the `ㅊㅊ` attendance check both go to the backend's
//! `process_message` operation, which decides what to answer.

use crate::application::normalizer;
use crate::domain::traits::RemoteInvoker;
use crate::domain::types::{InboundEvent, RemoteCall, ReplyOutcome};
use crate::strings::messages;

/// Message body the backend recognizes as an attendance check.
const ATTENDANCE_MESSAGE: &str = "출석체크";

pub async fn handle_chat(
    backend: &dyn RemoteInvoker,
    event: &InboundEvent,
    message: &str,
) -> ReplyOutcome {
    let result = backend
        .invoke(RemoteCall::process_message(event, message))
        .await;
    super::respond(result, messages::CHAT_NO_ANSWER, normalizer::reply_text)
}

pub async fn handle_attendance(backend: &dyn RemoteInvoker, event: &InboundEvent) -> ReplyOutcome {
    let result = backend
        .invoke(RemoteCall::process_message(event, ATTENDANCE_MESSAGE))
        .await;
    super::respond(result, messages::ATTENDANCE_FAILED, normalizer::reply_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeBackend;
    use serde_json::json;

    #[tokio::test]
    async fn empty_chat_answer_uses_fallback() {
        let backend = FakeBackend::new().respond_json("process_message", json!({"status": "ok"}));
        let event = InboundEvent::new("R", "U", "!안녕");

        let outcome = handle_chat(&backend, &event, "안녕").await;
        assert_eq!(outcome, ReplyOutcome::reply(messages::CHAT_NO_ANSWER));
    }

    #[tokio::test]
    async fn chat_answer_is_not_rewritten() {
        let answer = "\"안녕\"이라고 말했어요";
        let backend =
            FakeBackend::new().respond_json("process_message", json!({"reply": answer}));
        let event = InboundEvent::new("R", "U", "인사해줘");

        assert_eq!(
            handle_chat(&backend, &event, "인사해줘").await,
            ReplyOutcome::reply(answer)
        );
    }

    #[tokio::test]
    async fn attendance_answer_is_not_rewritten() {
        let answer = "analysis: 오늘도 출석 완료!";
        let backend =
            FakeBackend::new().respond_json("process_message", json!({"reply": answer}));
        let event = InboundEvent::new("R", "U", "ㅊㅊ");

        assert_eq!(
            handle_attendance(&backend, &event).await,
            ReplyOutcome::reply(answer)
        );
    }

    #[tokio::test]
    async fn attendance_sends_sender_and_room() {
        let backend = FakeBackend::new();
        let event = InboundEvent::new("몰루 아카이브", "선생님", "ㅊㅊ");

        let outcome = handle_attendance(&backend, &event).await;
        assert_eq!(outcome, ReplyOutcome::reply(messages::ATTENDANCE_FAILED));

        let call = &backend.calls_to("process_message")[0];
        assert_eq!(call.payload_str("user_id"), Some("선생님"));
        assert_eq!(call.payload_str("room"), Some("몰루 아카이브"));
        assert_eq!(call.payload_str("message"), Some(ATTENDANCE_MESSAGE));
    }
}
