//! # Messages
//!
//! Contains constant strings and format functions for user-facing replies.
//! Includes error messages, command usage hints, and result templates.

// Transport / backend failures
pub const TIMEOUT: &str = "서버 응답 시간이 초과되었습니다. 잠시 후 다시 시도해 주세요.";
pub const CONNECTION_FAILED: &str = "서버에 연결할 수 없습니다. 네트워크를 확인해주세요.";
pub const MALFORMED_RESPONSE: &str = "서버 응답을 이해하지 못했습니다. 잠시 후 다시 시도해 주세요.";
pub const UNKNOWN_ERROR: &str = "알 수 없는 오류가 발생했습니다. 잠시 후 다시 시도해 주세요.";

pub fn remote_error(status: u16) -> String {
    format!("서버 오류가 발생했습니다 (상태 코드: {status}). 잠시 후 다시 시도해 주세요.")
}

/// Pipeline boundary fallback.
pub const GENERIC_ERROR: &str = "오류가 발생했습니다. 잠시 후 다시 시도해 주세요.";

pub const AUTH_DENIED: &str = "이 명령어는 관리자만 사용할 수 있습니다.";

pub const CHAT_NO_ANSWER: &str = "지금은 대답하기 어렵습니다. 나중에 다시 말걸어 주세요.";

pub const ATTENDANCE_FAILED: &str = "출석체크에 실패했습니다. 나중에 다시 시도해 주세요.";

pub const STATS_FAILED: &str = "통계 정보를 가져오는데 실패했습니다. 나중에 다시 시도해 주세요.";

pub fn stats_summary(chat_count: &str, message_count: &str) -> String {
    format!(
        "🏆 이달의 수다쟁이 명예의 전당 🏆\n\n🗣️ 수다 폭격기 TOP10:\n{chat_count}\n\n📚 장문의 대가 TOP10:\n{message_count}"
    )
}

pub const PERSONALITY_USAGE: &str = "분석할 사용자를 지정해주세요. 예: !성격분석 사용자이름";
pub const PERSONALITY_FAILED: &str = "성격 분석에 실패했습니다. 나중에 다시 시도해 주세요.";

pub const NEWS_HEADER: &str = "🗞️ 오늘의 뉴스 요약 🗞️\n\n";
pub const NEWS_FAILED: &str = "오늘의 뉴스를 가져오는데 실패했습니다. 나중에 다시 시도해 주세요.";

pub fn news_category_label(category: &str) -> String {
    match category {
        "economic" => "[경제]".to_string(),
        "entertainment" => "[연예]".to_string(),
        "sports" => "[스포츠]".to_string(),
        other => format!("[{other}]"),
    }
}

pub const NEWS_REFRESHED: &str = "뉴스가 성공적으로 새로고침되었습니다.";
pub const NEWS_REFRESH_FAILED: &str = "뉴스 새로고침 중 오류가 발생했습니다. 잠시 후 다시 시도해 주세요.";

pub const RANKINGS_FAILED: &str = "월간 랭킹을 가져오는데 실패했습니다. 나중에 다시 시도해 주세요.";
pub const RANKINGS_RECALCULATED: &str = "월간 출석 랭킹을 재계산했습니다.";
pub const RANKINGS_RECALCULATE_FAILED: &str = "월간 랭킹 재계산에 실패했습니다. 나중에 다시 시도해 주세요.";

pub const LEARN_USAGE: &str = "학습할 문장을 입력해주세요. 예: !학습 오늘도 좋은 하루";
pub const LEARN_FAILED: &str = "문장 학습에 실패했습니다. 나중에 다시 시도해 주세요.";

pub fn learned(sentence: &str) -> String {
    format!("새로운 문장을 학습했어요: {sentence}")
}

pub fn current_learned(sentence: &str) -> String {
    format!("현재 학습된 문장: {sentence}")
}

pub const NOTHING_LEARNED: &str = "현재 학습된 문장이 없습니다.";

pub const PONG: &str = "pong!";
