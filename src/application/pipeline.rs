//! # Event Pipeline
//!
//! Handles one inbound chat event end to end: best-effort persistence, routing, and a
//! single reply. Failures inside a stage never reach the host; anything unexpected
//! turns into one generic apology.

use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::application::router::CommandRouter;
use crate::domain::config::BotConfig;
use crate::domain::traits::{RemoteInvoker, ReplyChannel};
use crate::domain::types::{InboundEvent, RemoteCall, RemoteResult, ReplyOutcome};
use crate::strings::messages;

pub struct EventPipeline {
    config: BotConfig,
    backend: Arc<dyn RemoteInvoker>,
    router: CommandRouter,
}

impl EventPipeline {
    pub fn new(config: BotConfig, backend: Arc<dyn RemoteInvoker>) -> Self {
        let router = CommandRouter::new(config.clone(), backend.clone());
        Self {
            config,
            backend,
            router,
        }
    }

    /// Run `handle` on its own task so the caller's event loop is never blocked.
    pub fn spawn(self: &Arc<Self>, event: InboundEvent, reply: Arc<dyn ReplyChannel>) -> JoinHandle<()> {
        let pipeline = Arc::clone(self);
        tokio::spawn(async move { pipeline.handle(event, reply.as_ref()).await })
    }

    pub async fn handle(&self, event: InboundEvent, reply: &dyn ReplyChannel) {
        if !self.config.is_room_allowed(&event.room) {
            tracing::debug!(room = %event.room, "Ignoring event from room outside allow-list");
            return;
        }

        let outcome = match AssertUnwindSafe(self.process(&event)).catch_unwind().await {
            Ok(outcome) => outcome,
            Err(panic) => {
                tracing::error!(
                    room = %event.room,
                    sender = %event.sender_id,
                    "Event handling panicked: {}",
                    panic_message(panic.as_ref())
                );
                ReplyOutcome::reply(messages::GENERIC_ERROR)
            }
        };

        if let ReplyOutcome::Reply(text) = outcome {
            if let Err(e) = reply.reply(&text).await {
                tracing::error!(room = %event.room, "Failed to send reply: {}", e);
            }
        }
    }

    async fn process(&self, event: &InboundEvent) -> ReplyOutcome {
        self.persist(event).await;
        self.router.route(event).await
    }

    async fn persist(&self, event: &InboundEvent) {
        let result = self.backend.invoke(RemoteCall::save_message(event)).await;
        if let RemoteResult::Failure { kind, detail } = result {
            tracing::warn!(
                room = %event.room,
                sender = %event.sender_id,
                "Failed to persist message ({}): {}",
                kind,
                detail
            );
        }
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
