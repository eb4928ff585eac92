//! # Main Entry Point
//!
//! Initializes the bot using the layered architecture:
//! - Domain: Configuration and Types
//! - Infrastructure: Backend client, Matrix, Logging
//! - Application: Pipeline, Router, Normalizer
//! - Interface: Command Handlers
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;
#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use matrix_sdk::{
    Client,
    config::SyncSettings,
    room::Room,
    ruma::events::room::{
        member::{MembershipState, StrippedRoomMemberEvent},
        message::{MessageType, SyncRoomMessageEvent},
    },
};
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::pipeline::EventPipeline;
use crate::domain::config::{AppConfig, MatrixConfig};
use crate::domain::types::InboundEvent;
use crate::infrastructure::backend::RemoteClient;
use crate::infrastructure::console::ConsoleReply;
use crate::infrastructure::matrix::MatrixService;

#[derive(Parser)]
#[command(name = "dangdong", about = "Chat bot front end for the dangdong backend")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, default_value = "data/config.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Connect to Matrix and answer room messages (default)
    Run,
    /// Run a single message through the pipeline and print the reply
    Send {
        #[arg(long)]
        room: String,
        #[arg(long)]
        sender: String,
        #[arg(long)]
        group: bool,
        text: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load Configuration
    let config = AppConfig::load(&cli.config)?;

    // 2. Logging Setup
    let _guard = infrastructure::logging::init(&config.system.data_dir)?;
    tracing::info!("Starting dangdong (backend: {})...", config.backend.base_url);

    // 3. Pipeline
    let backend = Arc::new(RemoteClient::new(config.backend.clone())?);
    let pipeline = Arc::new(EventPipeline::new(config.bot.clone(), backend));

    match cli.command.unwrap_or(CliCommand::Run) {
        CliCommand::Run => {
            let matrix = config
                .services
                .matrix
                .clone()
                .context("services.matrix is required for `run`")?;
            run_matrix(&matrix, pipeline).await
        }
        CliCommand::Send {
            room,
            sender,
            group,
            text,
        } => {
            let event = InboundEvent {
                is_group_chat: group,
                ..InboundEvent::new(room, sender, text)
            };
            pipeline
                .spawn(event, Arc::new(ConsoleReply))
                .await
                .context("Event task failed")
        }
    }
}

async fn run_matrix(matrix: &MatrixConfig, pipeline: Arc<EventPipeline>) -> Result<()> {
    let client = Client::builder()
        .homeserver_url(&matrix.homeserver)
        .build()
        .await?;

    client
        .matrix_auth()
        .login_username(&matrix.username, &matrix.password)
        .send()
        .await?;

    tracing::info!("Logged in as {}", matrix.username);

    let start_time = std::time::SystemTime::now();

    client.add_event_handler(move |ev: SyncRoomMessageEvent, room: Room| {
        let pipeline = pipeline.clone();

        async move {
            let Some(original_msg) = ev.as_original() else {
                return;
            };

            // Ignore events older than start_time
            let ts = ev.origin_server_ts();
            let event_time =
                std::time::UNIX_EPOCH + std::time::Duration::from_millis(ts.get().into());
            if event_time < start_time {
                return;
            }

            if let MessageType::Text(text_content) = &original_msg.content.msgtype {
                if original_msg.sender == room.own_user_id() {
                    return;
                }
                tracing::info!(
                    "Received message from {}: \n{}",
                    original_msg.sender,
                    text_content.body
                );

                let chat = MatrixService::new(room);
                let event = chat.inbound_event(original_msg.sender.as_str(), &text_content.body);
                pipeline.spawn(event, Arc::new(chat));
            }
        }
    });

    // Handle Invites
    client.add_event_handler(|ev: StrippedRoomMemberEvent, room: Room| async move {
        if ev.content.membership == MembershipState::Invite {
            if let Err(e) = room.join().await {
                tracing::warn!("Failed to join {}: {}", room.room_id(), e);
            }
        }
    });

    client.sync(SyncSettings::default()).await?;
    Ok(())
}
