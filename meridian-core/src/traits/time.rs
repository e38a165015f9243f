//! Time of day and time source trait

use core::fmt::Write;
use core::ops::{BitOr, BitOrAssign};
use core::str::FromStr;

use heapless::String;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Time of day broken into fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallTime {
    /// Hour (0-23)
    pub hour: u8,
    /// Minute (0-59)
    pub minute: u8,
    /// Second (0-59)
    pub second: u8,
}

impl WallTime {
    /// Create a time of day, wrapping out-of-range fields
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour: hour % 24,
            minute: minute % 60,
            second: second % 60,
        }
    }

    /// Decompose an instant given in seconds since the Unix epoch (UTC)
    pub const fn from_epoch_seconds(secs: u64) -> Self {
        Self::from_seconds_of_day((secs % SECONDS_PER_DAY) as u32)
    }

    /// Decompose a count of seconds since midnight
    pub const fn from_seconds_of_day(secs: u32) -> Self {
        let secs = secs % SECONDS_PER_DAY as u32;
        Self {
            hour: (secs / 3600) as u8,
            minute: (secs / 60 % 60) as u8,
            second: (secs % 60) as u8,
        }
    }

    /// Seconds since midnight
    pub const fn seconds_of_day(&self) -> u32 {
        self.hour as u32 * 3600 + self.minute as u32 * 60 + self.second as u32
    }

    /// Fields that differ from an earlier time
    pub fn changed_since(&self, earlier: &WallTime) -> TimeUnits {
        let mut units = TimeUnits::NONE;
        if self.second != earlier.second {
            units |= TimeUnits::SECOND;
        }
        if self.minute != earlier.minute {
            units |= TimeUnits::MINUTE;
        }
        if self.hour != earlier.hour {
            units |= TimeUnits::HOUR;
        }
        units
    }

    /// Format as `HH:MM:SS`
    pub fn format(&self) -> String<8> {
        let mut buf = String::new();
        // Eight bytes always fit two-digit fields
        let _ = write!(buf, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second);
        buf
    }
}

/// Error parsing a `HH:MM` or `HH:MM:SS` time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseTimeError {
    /// Not two or three colon-separated fields
    BadFormat,
    /// A field is not a number
    BadNumber,
    /// A field is outside its range
    OutOfRange,
}

impl core::fmt::Display for ParseTimeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseTimeError::BadFormat => f.write_str("expected HH:MM or HH:MM:SS"),
            ParseTimeError::BadNumber => f.write_str("time field is not a number"),
            ParseTimeError::OutOfRange => f.write_str("time field out of range"),
        }
    }
}

impl FromStr for WallTime {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = [0u8; 3];
        let mut count = 0;
        for part in s.trim().split(':') {
            if count == fields.len() {
                return Err(ParseTimeError::BadFormat);
            }
            fields[count] = part.parse().map_err(|_| ParseTimeError::BadNumber)?;
            count += 1;
        }
        if count < 2 {
            return Err(ParseTimeError::BadFormat);
        }

        let [hour, minute, second] = fields;
        if hour > 23 || minute > 59 || second > 59 {
            return Err(ParseTimeError::OutOfRange);
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }
}

/// Source of the current time of day
pub trait TimeSource {
    /// Get the current time of day
    fn now(&self) -> WallTime;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> WallTime {
        (**self).now()
    }
}

/// Set of calendar units, used for tick subscriptions and change masks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeUnits(u8);

impl TimeUnits {
    pub const NONE: Self = Self(0);
    pub const SECOND: Self = Self(1 << 0);
    pub const MINUTE: Self = Self(1 << 1);
    pub const HOUR: Self = Self(1 << 2);
    pub const DAY: Self = Self(1 << 3);
    pub const MONTH: Self = Self(1 << 4);
    pub const YEAR: Self = Self(1 << 5);
    pub const ALL: Self = Self(0x3F);

    /// Raw bit mask
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check if every unit in `other` is also in `self`
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Check if any unit is in both sets
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Check if no unit is set
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Smallest unit in the set, if any
    pub fn finest(self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(Self(1 << self.0.trailing_zeros()))
        }
    }
}

impl BitOr for TimeUnits {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for TimeUnits {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_wraps_fields() {
        let t = WallTime::new(25, 61, 60);
        assert_eq!(t, WallTime::new(1, 1, 0));
    }

    #[test]
    fn test_from_epoch_seconds() {
        // 2024-01-01T03:01:05Z
        let t = WallTime::from_epoch_seconds(1_704_078_065);
        assert_eq!(t, WallTime::new(3, 1, 5));

        assert_eq!(WallTime::from_epoch_seconds(0), WallTime::new(0, 0, 0));
        assert_eq!(
            WallTime::from_epoch_seconds(86_399),
            WallTime::new(23, 59, 59)
        );
    }

    #[test]
    fn test_seconds_of_day_roundtrip() {
        let t = WallTime::new(13, 37, 42);
        assert_eq!(WallTime::from_seconds_of_day(t.seconds_of_day()), t);
    }

    #[test]
    fn test_format() {
        assert_eq!(WallTime::new(3, 1, 0).format().as_str(), "03:01:00");
        assert_eq!(WallTime::new(23, 59, 59).format().as_str(), "23:59:59");
    }

    #[test]
    fn test_parse() {
        assert_eq!("03:00:00".parse(), Ok(WallTime::new(3, 0, 0)));
        assert_eq!("23:59".parse(), Ok(WallTime::new(23, 59, 0)));
        assert_eq!(" 7:05:09 ".parse(), Ok(WallTime::new(7, 5, 9)));
        assert_eq!("24:00".parse::<WallTime>(), Err(ParseTimeError::OutOfRange));
        assert_eq!("12".parse::<WallTime>(), Err(ParseTimeError::BadFormat));
        assert_eq!("1:2:3:4".parse::<WallTime>(), Err(ParseTimeError::BadFormat));
        assert_eq!("ab:00".parse::<WallTime>(), Err(ParseTimeError::BadNumber));
    }

    #[test]
    fn test_changed_since() {
        let a = WallTime::new(3, 0, 59);
        let b = WallTime::new(3, 1, 0);
        let units = b.changed_since(&a);
        assert!(units.contains(TimeUnits::SECOND | TimeUnits::MINUTE));
        assert!(!units.contains(TimeUnits::HOUR));
        assert!(units.intersects(TimeUnits::MINUTE | TimeUnits::HOUR));
        assert!(!units.intersects(TimeUnits::HOUR | TimeUnits::DAY));
        assert!(a.changed_since(&a).is_empty());
    }

    #[test]
    fn test_finest_unit() {
        assert_eq!(
            (TimeUnits::MINUTE | TimeUnits::HOUR).finest(),
            Some(TimeUnits::MINUTE)
        );
        assert_eq!(TimeUnits::NONE.finest(), None);
        assert_eq!(TimeUnits::ALL.finest(), Some(TimeUnits::SECOND));
    }
}
