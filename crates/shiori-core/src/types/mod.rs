//! Foundational value types: identifiers, timestamps, and the auth token.

pub mod identifiers;
pub mod time;
pub mod token;

pub use identifiers::{BookId, MessageId, ProfileId, RoomId, UserId};
pub use time::Timestamp;
pub use token::AuthToken;
