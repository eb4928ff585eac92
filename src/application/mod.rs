//! # Application Layer
//!
//! Contains the core message-handling logic of the bot.
//! This includes the event pipeline, command routing and response normalization.

pub mod normalizer;
pub mod pipeline;
pub mod router;
