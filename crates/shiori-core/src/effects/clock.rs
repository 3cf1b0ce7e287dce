//! Clock trait definition.
//!
//! Message and profile timestamps come from this trait so tests can pin
//! time.

use crate::types::Timestamp;
use async_trait::async_trait;

/// Wall-clock source for entity timestamps.
#[async_trait]
pub trait ClockEffects: Send + Sync {
    /// The current time.
    async fn now(&self) -> Timestamp;
}
