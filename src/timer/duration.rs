//! Duration and remaining-time value types

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::TimerError;

/// Largest duration the dial can select
pub const MAX_MINUTES: u32 = 60;

pub const MILLIS_PER_MINUTE: u64 = 60_000;

/// Interval between countdown ticks
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Whole minutes selected on the dial, bounded to `0..=60`.
///
/// The same value doubles as the slider position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Minutes(u32);

impl Minutes {
    pub const ZERO: Minutes = Minutes(0);

    /// Validate a raw slider position
    pub fn new(minutes: u32) -> Result<Self, TimerError> {
        if minutes > MAX_MINUTES {
            return Err(TimerError::OutOfRange(minutes));
        }
        Ok(Self(minutes))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Slider position matching a remaining time (whole minutes, rounded down)
    pub fn from_remaining(remaining: RemainingTime) -> Self {
        Self(remaining.minutes().min(u64::from(MAX_MINUTES)) as u32)
    }

    pub fn to_remaining(self) -> RemainingTime {
        RemainingTime::from_millis(u64::from(self.0) * MILLIS_PER_MINUTE)
    }
}

impl TryFrom<u32> for Minutes {
    type Error = TimerError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Minutes> for u32 {
    fn from(value: Minutes) -> Self {
        value.0
    }
}

/// Milliseconds left in a countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemainingTime(u64);

impl RemainingTime {
    pub const ZERO: RemainingTime = RemainingTime(0);

    pub fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub fn from_duration(duration: Duration) -> Self {
        Self(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn as_millis(self) -> u64 {
        self.0
    }

    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Whole minutes for the minutes display
    pub fn minutes(self) -> u64 {
        self.0 / MILLIS_PER_MINUTE
    }

    /// Seconds within the current minute for the seconds display
    pub fn seconds(self) -> u64 {
        (self.0 / 1000) % 60
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_accepts_full_dial_range() {
        assert_eq!(Minutes::new(0).unwrap(), Minutes::ZERO);
        assert_eq!(Minutes::new(60).unwrap().get(), 60);
        assert_eq!(Minutes::new(61), Err(TimerError::OutOfRange(61)));
    }

    #[test]
    fn minutes_convert_to_millis() {
        let minutes = Minutes::new(25).unwrap();
        assert_eq!(minutes.to_remaining().as_millis(), 1_500_000);
    }

    #[test]
    fn remaining_time_splits_into_minutes_and_seconds() {
        let remaining = RemainingTime::from_millis(125_000);
        assert_eq!(remaining.minutes(), 2);
        assert_eq!(remaining.seconds(), 5);

        let partial = RemainingTime::from_millis(1_499_999);
        assert_eq!(partial.minutes(), 24);
        assert_eq!(partial.seconds(), 59);
    }

    #[test]
    fn slider_position_rounds_down() {
        assert_eq!(Minutes::from_remaining(RemainingTime::from_millis(1_499_000)).get(), 24);
        assert_eq!(Minutes::from_remaining(RemainingTime::from_millis(59_999)).get(), 0);
        assert_eq!(Minutes::from_remaining(RemainingTime::from_millis(3_600_000)).get(), 60);
    }

    #[test]
    fn minutes_deserialize_with_range_check() {
        let ok: Minutes = serde_json::from_str("30").unwrap();
        assert_eq!(ok.get(), 30);
        assert!(serde_json::from_str::<Minutes>("90").is_err());
    }
}
