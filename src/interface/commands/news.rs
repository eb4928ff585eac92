//! # News Commands
//!
//! Handles `!뉴스` / `!ㄴㅅ` (today's summary) and the admin-only `!뉴스새로고침`.

use crate::application::normalizer::render_value;
use crate::domain::traits::RemoteInvoker;
use crate::domain::types::{Operation, Payload, RemoteCall, ReplyOutcome};
use crate::strings::messages;

pub async fn handle_news(backend: &dyn RemoteInvoker) -> ReplyOutcome {
    let result = backend.invoke(RemoteCall::get(Operation::TodayNews)).await;
    super::respond(result, messages::NEWS_FAILED, format_news)
}

pub async fn handle_refresh(backend: &dyn RemoteInvoker) -> ReplyOutcome {
    let result = backend.invoke(RemoteCall::get(Operation::RefreshNews)).await;
    super::respond(result, messages::NEWS_REFRESH_FAILED, |payload| {
        payload
            .is_success()
            .then(|| messages::NEWS_REFRESHED.to_string())
    })
}

fn format_news(payload: &Payload) -> Option<String> {
    if !payload.is_success() {
        return None;
    }
    let summary = payload.field("news_summary")?.as_object()?;

    let mut text = String::from(messages::NEWS_HEADER);
    for (category, body) in summary {
        let Some(body) = render_value(body) else {
            continue;
        };
        text.push_str(&messages::news_category_label(category));
        text.push('\n');
        text.push_str(&body);
        text.push_str("\n\n");
    }
    Some(text.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeBackend;
    use serde_json::json;

    #[tokio::test]
    async fn formats_categories_with_labels() {
        let backend = FakeBackend::new().respond_json(
            "today_news",
            json!({
                "status": "success",
                "news_summary": {
                    "economic": "금리 동결",
                    "sports": "국가대표 승리",
                    "weather": "맑음"
                }
            }),
        );

        let outcome = handle_news(&backend).await;
        let text = outcome.text().unwrap();
        assert!(text.starts_with(messages::NEWS_HEADER));
        assert!(text.contains("[경제]\n금리 동결"));
        assert!(text.contains("[스포츠]\n국가대표 승리"));
        assert!(text.contains("[weather]\n맑음"));
    }

    #[tokio::test]
    async fn categories_keep_backend_order() {
        let backend = FakeBackend::new().respond_json(
            "today_news",
            json!({
                "status": "success",
                "news_summary": {
                    "sports": "국가대표 승리",
                    "economic": "금리 동결",
                    "entertainment": "신작 개봉"
                }
            }),
        );

        let outcome = handle_news(&backend).await;
        let text = outcome.text().unwrap();
        let sports = text.find("[스포츠]").unwrap();
        let economic = text.find("[경제]").unwrap();
        let entertainment = text.find("[연예]").unwrap();
        assert!(sports < economic && economic < entertainment);
    }

    #[tokio::test]
    async fn unsuccessful_status_uses_fallback() {
        let backend =
            FakeBackend::new().respond_json("today_news", json!({"status": "error", "message": "x"}));
        assert_eq!(
            handle_news(&backend).await,
            ReplyOutcome::reply(messages::NEWS_FAILED)
        );
    }

    #[tokio::test]
    async fn refresh_reports_backend_status() {
        let ok = FakeBackend::new();
        assert_eq!(
            handle_refresh(&ok).await,
            ReplyOutcome::reply(messages::NEWS_REFRESHED)
        );

        let failed = FakeBackend::new().respond_json("refresh_news", json!({"status": "error"}));
        assert_eq!(
            handle_refresh(&failed).await,
            ReplyOutcome::reply(messages::NEWS_REFRESH_FAILED)
        );
    }
}
