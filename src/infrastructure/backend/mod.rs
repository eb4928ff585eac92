//! # Backend Client
//!
//! Talks to the bot's HTTP backend. Every call goes through [`RemoteClient::execute`],
//! which applies the configured timeout, retries transport failures, and turns every
//! outcome into a `RemoteResult` instead of an error.

mod classify;
mod client;

pub use client::RemoteClient;
