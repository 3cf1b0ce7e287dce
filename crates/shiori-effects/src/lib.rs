//! Shiori Effects - Effect Handlers
//!
//! Working implementations of the effect traits defined in
//! `shiori-core`: credential stores (memory and filesystem), the
//! in-process chat backend, the in-memory auth provider and icon store,
//! and the system clock.
//!
//! Handlers here are real implementations, not test doubles; scripted
//! and counting doubles live in `shiori-testkit`. The hosted SDK
//! integrations (platform keychain, managed auth, document database,
//! object storage) are bridged by the frontends against the same
//! traits.

#![allow(missing_docs)]
#![forbid(unsafe_code)]

/// In-memory auth provider.
pub mod auth;

/// Chat backend handlers.
pub mod chat;

/// Wall-clock handler.
pub mod clock;

/// Credential store handlers.
pub mod credentials;

/// In-memory icon store.
pub mod icons;

// === Public API Re-exports ===

pub use auth::MemoryAuthProvider;
pub use chat::InProcessChatBackend;
pub use clock::SystemClock;
pub use credentials::{CredentialFileConfig, FileCredentialStore, MemoryCredentialStore};
pub use icons::MemoryIconStore;
