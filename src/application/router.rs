//! # Command Router
//!
//! Routes incoming messages to the appropriate command handler (in `interface/commands`).
//! It recognizes the attendance shortcut, parses the command string (e.g., `!뉴스`),
//! checks the admin allow-list and dispatches with the necessary context.

use std::sync::Arc;

use crate::domain::config::BotConfig;
use crate::domain::traits::RemoteInvoker;
use crate::domain::types::{CommandToken, InboundEvent, ReplyOutcome};
use crate::interface::commands;
use crate::strings::messages;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Stats,
    Guide,
    Personality,
    News,
    RefreshNews,
    Rankings,
    RecalculateRankings,
    Learn,
    LearnedSentence,
    Ping,
}

/// Command names and their initial-consonant aliases. Lookup is exact; the first entry wins.
const COMMAND_TABLE: &[(&str, Command)] = &[
    ("고인물", Command::Stats),
    ("ㄱㅇㅁ", Command::Stats),
    ("가이드", Command::Guide),
    ("성격분석", Command::Personality),
    ("뉴스", Command::News),
    ("ㄴㅅ", Command::News),
    ("뉴스새로고침", Command::RefreshNews),
    ("순위", Command::Rankings),
    ("순위업데이트", Command::RecalculateRankings),
    ("학습", Command::Learn),
    ("학습확인", Command::LearnedSentence),
    ("ping", Command::Ping),
];

impl Command {
    pub fn lookup(name: &str) -> Option<Command> {
        COMMAND_TABLE
            .iter()
            .find(|(alias, _)| *alias == name)
            .map(|(_, cmd)| *cmd)
    }

    pub fn admin_only(&self) -> bool {
        matches!(self, Command::RefreshNews)
    }
}

/// Where a piece of text is headed, decided without touching the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Attendance,
    Command(Command, CommandToken),
    /// Unknown command: the marker-stripped text goes to the chat backend.
    Fallback(String),
    /// Ordinary chat: the full text goes to the chat backend.
    PlainText,
    Ignore,
}

pub struct CommandRouter {
    config: BotConfig,
    backend: Arc<dyn RemoteInvoker>,
}

impl CommandRouter {
    pub fn new(config: BotConfig, backend: Arc<dyn RemoteInvoker>) -> Self {
        Self { config, backend }
    }

    pub fn classify(&self, text: &str) -> Route {
        let msg = text.trim();
        let marker = self.config.marker.as_str();
        let attendance = self.config.attendance_literal.as_str();

        if msg == attendance || msg.strip_prefix(marker) == Some(attendance) {
            return Route::Attendance;
        }

        let Some(token) = CommandToken::parse(msg, marker) else {
            return if self.config.reply_to_plain_text && !msg.is_empty() {
                Route::PlainText
            } else {
                Route::Ignore
            };
        };

        if token.name.is_empty() {
            return Route::Ignore;
        }

        match Command::lookup(&token.name) {
            Some(cmd) => Route::Command(cmd, token),
            None => Route::Fallback(msg[marker.len()..].to_string()),
        }
    }

    pub async fn route(&self, event: &InboundEvent) -> ReplyOutcome {
        let route = self.classify(&event.text);
        tracing::info!(
            room = %event.room,
            sender = %event.sender_id,
            "Router dispatching {:?}",
            route
        );

        let backend = self.backend.as_ref();
        match route {
            Route::Attendance => commands::chat::handle_attendance(backend, event).await,
            Route::PlainText => commands::chat::handle_chat(backend, event, &event.text).await,
            Route::Fallback(message) => commands::chat::handle_chat(backend, event, &message).await,
            Route::Ignore => ReplyOutcome::NoReply,
            Route::Command(cmd, token) => {
                if cmd.admin_only() && !self.config.is_admin(&event.sender_id) {
                    tracing::warn!(
                        sender = %event.sender_id,
                        "Denied admin command {:?}",
                        cmd
                    );
                    return ReplyOutcome::reply(messages::AUTH_DENIED);
                }
                self.execute(cmd, &token, event).await
            }
        }
    }

    async fn execute(&self, cmd: Command, token: &CommandToken, event: &InboundEvent) -> ReplyOutcome {
        let backend = self.backend.as_ref();
        match cmd {
            Command::Stats => commands::stats::handle_stats(backend, event).await,
            Command::Guide => commands::help::handle_guide(),
            Command::Personality => {
                commands::personality::handle_personality(backend, event, token.arg(0)).await
            }
            Command::News => commands::news::handle_news(backend).await,
            Command::RefreshNews => commands::news::handle_refresh(backend).await,
            Command::Rankings => commands::rankings::handle_rankings(backend, event).await,
            Command::RecalculateRankings => {
                commands::rankings::handle_recalculate(backend, event).await
            }
            Command::Learn => commands::learn::handle_learn(backend, event, &token.rest).await,
            Command::LearnedSentence => commands::learn::handle_learned(backend, event).await,
            Command::Ping => commands::help::handle_ping(),
        }
    }
}
