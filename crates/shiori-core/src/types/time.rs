//! Timestamp type shared by chat entities.
//!
//! Milliseconds since the Unix epoch. Construction from the current wall
//! clock goes through [`ClockEffects`](crate::effects::ClockEffects) so
//! tests stay deterministic.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Milliseconds since the Unix epoch.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// Create from raw milliseconds.
    pub fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Raw milliseconds since the epoch.
    pub fn as_millis(&self) -> u64 {
        self.0
    }

    /// Convert to a UTC datetime, clamping out-of-range values.
    pub fn to_datetime(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.0 as i64)
            .single()
            .unwrap_or_default()
    }

    /// Create from a UTC datetime. Pre-epoch datetimes clamp to zero.
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self(datetime.timestamp_millis().max(0) as u64)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_datetime().to_rfc3339())
    }
}

impl From<u64> for Timestamp {
    fn from(millis: u64) -> Self {
        Self(millis)
    }
}

impl From<Timestamp> for u64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_round_trip() {
        let ts = Timestamp::from_millis(1_640_995_200_000);
        assert_eq!(ts.as_millis(), 1_640_995_200_000);
        assert_eq!(Timestamp::from_datetime(ts.to_datetime()), ts);
    }

    #[test]
    fn test_ordering_follows_time() {
        assert!(Timestamp::from_millis(1) < Timestamp::from_millis(2));
    }

    #[test]
    fn test_pre_epoch_clamps_to_zero() {
        let before_epoch = Utc.timestamp_millis_opt(-1000).single().unwrap();
        assert_eq!(Timestamp::from_datetime(before_epoch), Timestamp(0));
    }
}
