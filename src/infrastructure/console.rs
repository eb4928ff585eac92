//! # Console Reply Channel
//!
//! Prints the reply to stdout. Used by the `send` subcommand for one-off events.

use crate::domain::traits::ReplyChannel;
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

#[derive(Clone, Default)]
pub struct ConsoleReply;

#[async_trait]
impl ReplyChannel for ConsoleReply {
    async fn reply(&self, text: &str) -> Result<(), String> {
        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(format!("{text}\n").as_bytes())
            .await
            .map_err(|e| e.to_string())?;
        stdout.flush().await.map_err(|e| e.to_string())
    }
}
