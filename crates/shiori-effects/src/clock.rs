//! Wall-clock handler.

use async_trait::async_trait;
use chrono::Utc;
use shiori_core::{ClockEffects, Timestamp};

/// Clock backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create the system clock.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ClockEffects for SystemClock {
    async fn now(&self) -> Timestamp {
        Timestamp::from_datetime(Utc::now())
    }
}
