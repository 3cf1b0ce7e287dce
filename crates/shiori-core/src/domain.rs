//! Domain entities.
//!
//! Plain records with no invariants beyond field presence. The catalog
//! server owns users and books; the chat backend owns profiles, rooms,
//! and messages. Wire mapping lives in the API layer, storage in the
//! effect handlers.

use crate::types::{AuthToken, BookId, MessageId, ProfileId, RoomId, Timestamp, UserId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// Catalog entities
// =============================================================================

/// Signed-in account as returned by login and signup.
///
/// Intentionally not serializable: the token lives in the credential
/// store, not in state snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Server-assigned account identifier.
    pub id: UserId,
    /// Email the account was registered with.
    pub email: String,
    /// Bearer token for authenticated catalog requests.
    pub token: AuthToken,
}

/// One cataloged book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Server-assigned book identifier.
    pub id: BookId,
    /// Title.
    pub name: String,
    /// Cover image URL, when one was uploaded.
    pub image_url: Option<String>,
    /// Purchase price in the smallest currency unit.
    pub price: Option<i64>,
    /// Date of purchase.
    pub purchase_date: Option<NaiveDate>,
}

/// Fields submitted when creating or updating a book.
///
/// `image` carries the base64-encoded cover payload; the server answers
/// with the hosted URL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookDraft {
    /// Title.
    pub name: String,
    /// Base64-encoded cover image payload.
    pub image: Option<String>,
    /// Purchase price in the smallest currency unit.
    pub price: Option<i64>,
    /// Date of purchase.
    pub purchase_date: Option<NaiveDate>,
}

// =============================================================================
// Chat entities
// =============================================================================

/// Chat profile of one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Profile identifier, shared with the auth provider account.
    pub id: ProfileId,
    /// Display name.
    pub name: String,
    /// Email the account was registered with.
    pub email: String,
    /// Avatar URL, when an icon was uploaded.
    pub icon_url: Option<String>,
    /// Creation time of the profile record.
    pub created_at: Timestamp,
}

/// One chat room with its member profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Room identifier.
    pub id: RoomId,
    /// Member profiles, in join order.
    pub members: Vec<Profile>,
    /// Most recent message, if any was sent.
    pub last_message: Option<ChatMessage>,
    /// Creation time of the room.
    pub created_at: Timestamp,
}

impl Room {
    /// The first member other than `me`. Room lists label rooms with the
    /// partner's name.
    #[must_use]
    pub fn partner(&self, me: ProfileId) -> Option<&Profile> {
        self.members.iter().find(|member| member.id != me)
    }

    /// True when `profile` is a member of this room.
    #[must_use]
    pub fn has_member(&self, profile: ProfileId) -> bool {
        self.members.iter().any(|member| member.id == profile)
    }
}

/// One chat message.
///
/// Sender name and icon are denormalized onto the message so the room
/// screen renders without a profile lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message identifier.
    pub id: MessageId,
    /// Room the message was sent to.
    pub room_id: RoomId,
    /// Sender's profile identifier.
    pub sender_id: ProfileId,
    /// Sender's display name at send time.
    pub sender_name: String,
    /// Sender's avatar URL at send time.
    pub icon_url: Option<String>,
    /// Message body.
    pub text: String,
    /// Send time.
    pub sent_at: Timestamp,
}

impl ChatMessage {
    /// True when this message was sent by `me`.
    #[must_use]
    pub fn is_mine(&self, me: ProfileId) -> bool {
        self.sender_id == me
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str) -> Profile {
        Profile {
            id: ProfileId::new(),
            name: name.to_string(),
            email: format!("{name}@example.com"),
            icon_url: None,
            created_at: Timestamp::from_millis(0),
        }
    }

    #[test]
    fn test_room_partner_skips_self() {
        let alice = profile("alice");
        let bob = profile("bob");
        let room = Room {
            id: RoomId::new(),
            members: vec![alice.clone(), bob.clone()],
            last_message: None,
            created_at: Timestamp::from_millis(0),
        };

        assert_eq!(room.partner(alice.id).map(|p| p.id), Some(bob.id));
        assert_eq!(room.partner(bob.id).map(|p| p.id), Some(alice.id));
        assert!(room.has_member(alice.id));
        assert!(!room.has_member(ProfileId::new()));
    }

    #[test]
    fn test_message_ownership() {
        let me = ProfileId::new();
        let message = ChatMessage {
            id: MessageId::new(),
            room_id: RoomId::new(),
            sender_id: me,
            sender_name: "alice".to_string(),
            icon_url: None,
            text: "hello".to_string(),
            sent_at: Timestamp::from_millis(1),
        };

        assert!(message.is_mine(me));
        assert!(!message.is_mine(ProfileId::new()));
    }
}
