//! # Domain Layer
//!
//! Core definitions, types, and traits that describe a chat event, a backend call and its outcome.
//! Independent of the chat host and of the HTTP transport, serving as the contract for other layers.

pub mod config;
pub mod traits;
pub mod types;
