//! # Domain Traits
//!
//! Abstract interfaces for the backend and the chat host's reply sink.
//! Allows for pluggable implementations in the Infrastructure layer.

use crate::domain::types::{RemoteCall, RemoteResult};
use async_trait::async_trait;

/// Abstract interface for the backend service.
#[async_trait]
pub trait RemoteInvoker: Send + Sync {
    /// Perform one logical call. Never fails outright: every problem is a `RemoteResult::Failure`.
    async fn invoke(&self, call: RemoteCall) -> RemoteResult;
}

/// One-shot sink for the visible response to an event (e.g. a Matrix room, stdout)
#[async_trait]
pub trait ReplyChannel: Send + Sync {
    async fn reply(&self, text: &str) -> Result<(), String>;
}
