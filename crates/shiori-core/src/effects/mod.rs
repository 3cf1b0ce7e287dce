//! Effect trait definitions.
//!
//! Pure trait definitions for every capability the application core
//! reaches outside itself for. This module defines **what** can be done;
//! handlers in `shiori-effects` define **how**, and `shiori-testkit`
//! supplies the test doubles. Usecases and screens receive these as
//! `Arc<dyn Trait>` handles at construction and never touch a concrete
//! handler or a global.

pub mod auth;
pub mod chat;
pub mod clock;
pub mod credentials;
pub mod icons;

pub use auth::{AuthProviderEffects, AuthProviderError};
pub use chat::{ChatStoreEffects, ChatStoreError, MessageEvent, MessageSubscription};
pub use clock::ClockEffects;
pub use credentials::{CredentialError, CredentialStoreEffects};
pub use icons::{IconStoreEffects, IconStoreError};
