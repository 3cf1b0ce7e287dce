//! Chat store trait definition.
//!
//! Boundary to the document/realtime database backing chat: profile
//! directory, rooms, message history, and a live subscription per room.
//! The subscription surface is subscribe/emit only; there is no query
//! language and no pagination at this boundary.

use crate::domain::{ChatMessage, Profile, Room};
use crate::errors::AppError;
use crate::types::{ProfileId, RoomId};
use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

/// Error type for chat store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChatStoreError {
    /// The backend reported a failure.
    #[error("chat backend failed: {message}")]
    Backend { message: String },
    /// A referenced room or profile does not exist.
    #[error("chat record not found: {message}")]
    NotFound { message: String },
}

impl ChatStoreError {
    /// Create a backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
}

impl From<ChatStoreError> for AppError {
    fn from(err: ChatStoreError) -> Self {
        Self::chat(err.to_string())
    }
}

/// One change emitted by a room subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageEvent {
    /// A message was added to the room.
    Added(ChatMessage),
}

/// Receiving half of one room subscription.
///
/// Events arrive in the order the backend applied them. `recv` returns
/// `None` once the backend has dropped the sending half.
pub struct MessageSubscription {
    receiver: mpsc::UnboundedReceiver<MessageEvent>,
}

impl MessageSubscription {
    /// Create a connected sender/subscription pair. Handlers keep the
    /// sender and emit into it as messages land.
    pub fn channel() -> (mpsc::UnboundedSender<MessageEvent>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { receiver: rx })
    }

    /// Wait for the next event.
    pub async fn recv(&mut self) -> Option<MessageEvent> {
        self.receiver.recv().await
    }

    /// Take the next event without waiting, if one is queued.
    pub fn try_recv(&mut self) -> Option<MessageEvent> {
        self.receiver.try_recv().ok()
    }
}

impl std::fmt::Debug for MessageSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageSubscription").finish_non_exhaustive()
    }
}

/// Document/realtime database backing chat.
#[async_trait]
pub trait ChatStoreEffects: Send + Sync {
    /// Create the chat profile for a new account.
    async fn create_profile(&self, profile: &Profile) -> Result<(), ChatStoreError>;

    /// All chat profiles, in creation order.
    async fn fetch_profiles(&self) -> Result<Vec<Profile>, ChatStoreError>;

    /// Rooms `member` belongs to, most recently created first.
    async fn fetch_rooms(&self, member: ProfileId) -> Result<Vec<Room>, ChatStoreError>;

    /// Create a room with the given members.
    async fn create_room(&self, members: &[ProfileId]) -> Result<Room, ChatStoreError>;

    /// Message history of a room, in send order.
    async fn fetch_messages(&self, room: RoomId) -> Result<Vec<ChatMessage>, ChatStoreError>;

    /// Append a message to its room and notify subscribers.
    async fn send_message(&self, message: &ChatMessage) -> Result<(), ChatStoreError>;

    /// Subscribe to a room's message feed. Messages sent after the
    /// subscription was taken arrive as [`MessageEvent::Added`].
    async fn subscribe_messages(&self, room: RoomId) -> Result<MessageSubscription, ChatStoreError>;
}
