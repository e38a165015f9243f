//! Host wall clock

use std::time::{SystemTime, UNIX_EPOCH};

use meridian_core::traits::{TimeSource, WallTime};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// System clock, optionally shifted to start at a chosen time of day
///
/// The shift is fixed at construction, so the clock keeps running at real
/// speed from the chosen start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SystemClock {
    /// Seconds added to the system time of day
    offset_s: i64,
}

impl SystemClock {
    /// Follow the system clock (UTC)
    pub fn new() -> Self {
        Self { offset_s: 0 }
    }

    /// Run from `start` at real speed
    pub fn starting_at(start: WallTime) -> Self {
        let now = Self::new().now();
        Self {
            offset_s: start.seconds_of_day() as i64 - now.seconds_of_day() as i64,
        }
    }

    /// Offset from the system clock in seconds
    pub fn offset_s(&self) -> i64 {
        self.offset_s
    }

    fn epoch_seconds() -> u64 {
        // A clock set before 1970 reads as midnight
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }

    fn time_at(&self, epoch_s: u64) -> WallTime {
        let secs = (epoch_s as i64 + self.offset_s).rem_euclid(SECONDS_PER_DAY);
        WallTime::from_seconds_of_day(secs as u32)
    }
}

impl TimeSource for SystemClock {
    fn now(&self) -> WallTime {
        self.time_at(Self::epoch_seconds())
    }
}
