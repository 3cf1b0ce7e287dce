//! Shiori Core - Foundation Types and Effect Interfaces
//!
//! Foundation crate for the Shiori application core: the reactive state
//! containers every screen binds through, the domain entities, the
//! unified error type, field validation, and the effect trait
//! definitions for every outside capability (credential store, auth
//! provider, chat store, icon store, clock).
//!
//! # Architecture
//!
//! - `Relay<T>` holds observable state; subscribers get the current
//!   value on subscribe and then every transition exactly once.
//! - `LoadingState<T, E>` is the per-operation lifecycle every screen
//!   projects: standby, loading, done, failed.
//! - Effect traits are pure signatures. Handlers live in
//!   `shiori-effects`, test doubles in `shiori-testkit`.
//! - `CancelToken` carries cooperative cancellation from screens into
//!   in-flight operations.

#![allow(missing_docs)]
#![forbid(unsafe_code)]

/// Cooperative cancellation tokens.
pub mod cancel;

/// Domain entities shared across layers.
pub mod domain;

/// Effect trait definitions (no implementations).
pub mod effects;

/// Unified error handling.
pub mod errors;

/// Observable value holders with replay-on-subscribe.
pub mod relay;

/// Per-operation loading state.
pub mod state;

/// Identifier, timestamp, and token types.
pub mod types;

/// Pure field validators for form screens.
pub mod validate;

// === Public API Re-exports ===

pub use cancel::CancelToken;
pub use domain::{Book, BookDraft, ChatMessage, Profile, Room, User};
pub use errors::{AppError, Result};
pub use relay::{LoadingRelay, Relay, Subscription};
pub use state::LoadingState;
pub use types::{AuthToken, BookId, MessageId, ProfileId, RoomId, Timestamp, UserId};
pub use validate::{
    all_valid, EmailValidator, FieldValidation, NickNameValidator, NumberValidator,
    PasswordConfirmationValidator, PasswordValidator, PurchaseDateValidator, TitleValidator,
};

pub use effects::{
    AuthProviderEffects, AuthProviderError, ChatStoreEffects, ChatStoreError, ClockEffects,
    CredentialError, CredentialStoreEffects, IconStoreEffects, IconStoreError, MessageEvent,
    MessageSubscription,
};
