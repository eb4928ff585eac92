//! # Infrastructure Layer
//!
//! Handles interactions with external systems and services.
//! Implements the traits defined in the Domain layer (e.g., RemoteInvoker, ReplyChannel).

pub mod backend;
pub mod console;
pub mod logging;
pub mod matrix;
