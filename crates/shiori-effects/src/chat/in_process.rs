//! In-process chat backend.
//!
//! A working stand-in for the hosted document/realtime database:
//! profiles, rooms, and message history in memory, with per-room
//! fan-out to live subscriptions. Suits local development, demos, and
//! the integration suites.

use async_trait::async_trait;
use shiori_core::{
    ChatMessage, ChatStoreEffects, ChatStoreError, ClockEffects, MessageEvent,
    MessageSubscription, Profile, ProfileId, Room, RoomId,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Default)]
struct ChatState {
    /// Profiles in creation order.
    profiles: Vec<Profile>,
    /// Rooms in creation order.
    rooms: Vec<Room>,
    /// Message history per room, in send order.
    messages: HashMap<RoomId, Vec<ChatMessage>>,
    /// Live subscription senders per room. Closed ones are pruned on the
    /// next send.
    watchers: HashMap<RoomId, Vec<UnboundedSender<MessageEvent>>>,
}

impl ChatState {
    fn room_index(&self, room: RoomId) -> Result<usize, ChatStoreError> {
        self.rooms
            .iter()
            .position(|r| r.id == room)
            .ok_or_else(|| ChatStoreError::not_found(format!("room {room}")))
    }
}

/// Chat backend held entirely in process memory.
pub struct InProcessChatBackend {
    state: Arc<RwLock<ChatState>>,
    clock: Arc<dyn ClockEffects>,
}

impl InProcessChatBackend {
    /// Create an empty backend stamping records with `clock`.
    pub fn new(clock: Arc<dyn ClockEffects>) -> Self {
        Self {
            state: Arc::new(RwLock::new(ChatState::default())),
            clock,
        }
    }
}

#[async_trait]
impl ChatStoreEffects for InProcessChatBackend {
    async fn create_profile(&self, profile: &Profile) -> Result<(), ChatStoreError> {
        let mut state = self.state.write().await;
        // Upsert by id, matching document-store set semantics.
        if let Some(existing) = state.profiles.iter_mut().find(|p| p.id == profile.id) {
            *existing = profile.clone();
        } else {
            state.profiles.push(profile.clone());
        }
        debug!(profile = %profile.id, "created chat profile");
        Ok(())
    }

    async fn fetch_profiles(&self) -> Result<Vec<Profile>, ChatStoreError> {
        Ok(self.state.read().await.profiles.clone())
    }

    async fn fetch_rooms(&self, member: ProfileId) -> Result<Vec<Room>, ChatStoreError> {
        let state = self.state.read().await;
        let mut rooms: Vec<Room> = state
            .rooms
            .iter()
            .filter(|room| room.has_member(member))
            .cloned()
            .collect();
        // Most recently created first.
        rooms.reverse();
        Ok(rooms)
    }

    async fn create_room(&self, members: &[ProfileId]) -> Result<Room, ChatStoreError> {
        let created_at = self.clock.now().await;
        let mut state = self.state.write().await;

        let mut resolved = Vec::with_capacity(members.len());
        for member in members {
            let profile = state
                .profiles
                .iter()
                .find(|p| p.id == *member)
                .ok_or_else(|| ChatStoreError::not_found(format!("profile {member}")))?;
            resolved.push(profile.clone());
        }

        let room = Room {
            id: RoomId::new(),
            members: resolved,
            last_message: None,
            created_at,
        };
        state.rooms.push(room.clone());
        debug!(room = %room.id, members = members.len(), "created chat room");
        Ok(room)
    }

    async fn fetch_messages(&self, room: RoomId) -> Result<Vec<ChatMessage>, ChatStoreError> {
        let state = self.state.read().await;
        state.room_index(room)?;
        Ok(state.messages.get(&room).cloned().unwrap_or_default())
    }

    async fn send_message(&self, message: &ChatMessage) -> Result<(), ChatStoreError> {
        let mut state = self.state.write().await;
        let index = state.room_index(message.room_id)?;

        state
            .messages
            .entry(message.room_id)
            .or_default()
            .push(message.clone());
        state.rooms[index].last_message = Some(message.clone());

        if let Some(watchers) = state.watchers.get_mut(&message.room_id) {
            watchers.retain(|tx| tx.send(MessageEvent::Added(message.clone())).is_ok());
        }
        Ok(())
    }

    async fn subscribe_messages(
        &self,
        room: RoomId,
    ) -> Result<MessageSubscription, ChatStoreError> {
        let mut state = self.state.write().await;
        state.room_index(room)?;

        let (tx, subscription) = MessageSubscription::channel();
        state.watchers.entry(room).or_default().push(tx);
        debug!(room = %room, "subscribed to room messages");
        Ok(subscription)
    }
}
