//! Test doubles for the backend and the reply sink.

use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::traits::{RemoteInvoker, ReplyChannel};
use crate::domain::types::{Payload, RemoteCall, RemoteResult};

/// Scripted backend: answers per operation name and records every call.
/// Unscripted operations answer `{"status": "success"}`.
pub struct FakeBackend {
    responses: HashMap<&'static str, RemoteResult>,
    calls: Mutex<Vec<RemoteCall>>,
    panic_on: Option<&'static str>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            calls: Mutex::new(Vec::new()),
            panic_on: None,
        }
    }

    pub fn respond(mut self, operation: &'static str, result: RemoteResult) -> Self {
        self.responses.insert(operation, result);
        self
    }

    pub fn respond_json(self, operation: &'static str, value: Value) -> Self {
        self.respond(operation, RemoteResult::Success(Payload::from_json(value)))
    }

    pub fn panic_on(mut self, operation: &'static str) -> Self {
        self.panic_on = Some(operation);
        self
    }

    pub fn calls(&self) -> Vec<RemoteCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, operation: &str) -> Vec<RemoteCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.operation.name() == operation)
            .collect()
    }
}

#[async_trait]
impl RemoteInvoker for FakeBackend {
    async fn invoke(&self, call: RemoteCall) -> RemoteResult {
        let name = call.operation.name();
        self.calls.lock().unwrap().push(call);
        if self.panic_on == Some(name) {
            panic!("backend exploded on {name}");
        }
        self.responses
            .get(name)
            .cloned()
            .unwrap_or_else(|| RemoteResult::Success(Payload::from_json(json!({"status": "success"}))))
    }
}

/// Collects every reply sent through it.
#[derive(Default)]
pub struct RecordingChannel {
    replies: Mutex<Vec<String>>,
}

impl RecordingChannel {
    pub fn replies(&self) -> Vec<String> {
        self.replies.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReplyChannel for RecordingChannel {
    async fn reply(&self, text: &str) -> Result<(), String> {
        self.replies.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
