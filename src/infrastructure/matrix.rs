//! # Matrix Service Adapter
//!
//! Implements the `ReplyChannel` trait for the Matrix protocol using the `matrix_sdk`.
//! This module acts as the bridge between the chat host and the event pipeline:
//! it turns room messages into `InboundEvent`s and posts the single reply back to the room.

use crate::domain::traits::ReplyChannel;
use crate::domain::types::InboundEvent;
use async_trait::async_trait;
use matrix_sdk::room::Room;
use matrix_sdk::ruma::events::room::message::RoomMessageEventContent;

#[derive(Clone)]
pub struct MatrixService {
    room: Room,
}

impl MatrixService {
    pub fn new(room: Room) -> Self {
        Self { room }
    }

    pub fn room_id(&self) -> String {
        self.room.room_id().as_str().to_string()
    }

    /// Rooms are addressed by name, like the backend's chat logs; unnamed rooms fall back to their id.
    pub fn room_label(&self) -> String {
        self.room.name().unwrap_or_else(|| self.room_id())
    }

    pub fn inbound_event(&self, sender: &str, body: &str) -> InboundEvent {
        InboundEvent {
            room: self.room_label(),
            sender_id: sender.to_string(),
            text: body.to_string(),
            is_group_chat: self.room.joined_members_count() > 2,
        }
    }
}

#[async_trait]
impl ReplyChannel for MatrixService {
    async fn reply(&self, text: &str) -> Result<(), String> {
        tracing::info!("Bot sending message to {}: {}", self.room_id(), text);
        self.room
            .send(RoomMessageEventContent::text_plain(text))
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}
