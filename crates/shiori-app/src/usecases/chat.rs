//! Chat usecases: profile directory, room list, and in-room messaging.
//!
//! All of these sit on the chat store boundary. The current identity
//! comes from the auth provider; a signed-out caller gets an auth error
//! rather than a silently empty result.

use std::sync::Arc;

use shiori_core::{
    domain::{ChatMessage, Profile, Room},
    effects::{AuthProviderEffects, ChatStoreEffects, ClockEffects, MessageSubscription},
    errors::AppError,
    types::{MessageId, ProfileId, RoomId},
    Result,
};

fn require_profile(current: Option<ProfileId>) -> Result<ProfileId> {
    current.ok_or_else(|| AppError::auth("no signed-in chat profile"))
}

// =============================================================================
// Profile directory
// =============================================================================

/// Fetches the chat profile directory, excluding the signed-in profile.
#[derive(Clone)]
pub struct UserListUsecase {
    chat_store: Arc<dyn ChatStoreEffects>,
    auth_provider: Arc<dyn AuthProviderEffects>,
}

impl UserListUsecase {
    /// Create a user list usecase over the given capabilities.
    pub fn new(
        chat_store: Arc<dyn ChatStoreEffects>,
        auth_provider: Arc<dyn AuthProviderEffects>,
    ) -> Self {
        Self {
            chat_store,
            auth_provider,
        }
    }

    /// All chat profiles except the signed-in one, in store order.
    pub async fn fetch_users(&self) -> Result<Vec<Profile>> {
        let me = require_profile(self.auth_provider.current_profile().await?)?;
        let profiles = self.chat_store.fetch_profiles().await?;
        Ok(profiles
            .into_iter()
            .filter(|profile| profile.id != me)
            .collect())
    }
}

// =============================================================================
// Rooms
// =============================================================================

/// Lists the signed-in profile's rooms and opens new ones.
#[derive(Clone)]
pub struct RoomListUsecase {
    chat_store: Arc<dyn ChatStoreEffects>,
    auth_provider: Arc<dyn AuthProviderEffects>,
}

impl RoomListUsecase {
    /// Create a room list usecase over the given capabilities.
    pub fn new(
        chat_store: Arc<dyn ChatStoreEffects>,
        auth_provider: Arc<dyn AuthProviderEffects>,
    ) -> Self {
        Self {
            chat_store,
            auth_provider,
        }
    }

    /// The signed-in profile's identifier.
    pub async fn current_profile(&self) -> Result<ProfileId> {
        require_profile(self.auth_provider.current_profile().await?)
    }

    /// Rooms the signed-in profile is a member of, newest first.
    pub async fn fetch_rooms(&self) -> Result<Vec<Room>> {
        let me = self.current_profile().await?;
        Ok(self.chat_store.fetch_rooms(me).await?)
    }

    /// Open a new room between the signed-in profile and `partner`.
    pub async fn create_room(&self, partner: ProfileId) -> Result<Room> {
        let me = self.current_profile().await?;
        let room = self.chat_store.create_room(&[me, partner]).await?;
        tracing::debug!(room = %room.id, "room created");
        Ok(room)
    }
}

// =============================================================================
// In-room messaging
// =============================================================================

/// Message history, sending, and the live subscription for one room.
#[derive(Clone)]
pub struct ChatRoomUsecase {
    chat_store: Arc<dyn ChatStoreEffects>,
    clock: Arc<dyn ClockEffects>,
}

impl ChatRoomUsecase {
    /// Create a chat room usecase over the given capabilities.
    pub fn new(chat_store: Arc<dyn ChatStoreEffects>, clock: Arc<dyn ClockEffects>) -> Self {
        Self { chat_store, clock }
    }

    /// Message history of `room`, oldest first.
    pub async fn fetch_messages(&self, room: RoomId) -> Result<Vec<ChatMessage>> {
        Ok(self.chat_store.fetch_messages(room).await?)
    }

    /// Build and send one message from `sender` into `room`.
    ///
    /// The sender's name and icon are denormalized onto the message at
    /// send time. Returns the message as sent; the live subscription
    /// echoes it back to every watcher, the sender included.
    pub async fn send_message(
        &self,
        room: RoomId,
        sender: &Profile,
        text: &str,
    ) -> Result<ChatMessage> {
        let message = ChatMessage {
            id: MessageId::new(),
            room_id: room,
            sender_id: sender.id,
            sender_name: sender.name.clone(),
            icon_url: sender.icon_url.clone(),
            text: text.to_string(),
            sent_at: self.clock.now().await,
        };
        self.chat_store.send_message(&message).await?;
        Ok(message)
    }

    /// Subscribe to messages appended to `room` from now on.
    pub async fn subscribe(&self, room: RoomId) -> Result<MessageSubscription> {
        Ok(self.chat_store.subscribe_messages(room).await?)
    }
}
