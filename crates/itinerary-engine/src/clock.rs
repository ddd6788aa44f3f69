//! Wall-clock times of day as minutes since midnight.
//!
//! Bookings carry their times as `HH:MM` strings. Comparing those strings
//! lexicographically only works while every value is zero-padded, so the
//! engine converts them into [`ClockTime`] once and compares integers from
//! then on.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ItineraryError, Result};

/// Minutes in a full day. Used as the exclusive upper bound of a day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A time of day, `00:00` through `23:59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Midnight, `00:00`.
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Build a time from hour and minute. Returns `None` when out of range.
    pub const fn from_hm(hour: u16, minute: u16) -> Option<ClockTime> {
        if hour < 24 && minute < 60 {
            Some(ClockTime(hour * 60 + minute))
        } else {
            None
        }
    }

    /// Build a time from minutes since midnight. Returns `None` past `23:59`.
    pub const fn from_minutes(minutes: u16) -> Option<ClockTime> {
        if minutes < MINUTES_PER_DAY {
            Some(ClockTime(minutes))
        } else {
            None
        }
    }

    /// Caller guarantees `minutes < MINUTES_PER_DAY`.
    pub(crate) const fn from_minutes_unchecked(minutes: u16) -> ClockTime {
        debug_assert!(minutes < MINUTES_PER_DAY);
        ClockTime(minutes)
    }

    /// Minutes since midnight.
    pub const fn minutes(self) -> u16 {
        self.0
    }

    pub const fn hour(self) -> u16 {
        self.0 / 60
    }

    pub const fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Parse a 24-hour `HH:MM` string.
    ///
    /// A single-digit hour (`9:30`) is accepted; seconds are not.
    pub fn parse(raw: &str) -> Result<ClockTime> {
        let time = NaiveTime::parse_from_str(raw.trim(), "%H:%M")
            .map_err(|_| ItineraryError::InvalidTime(raw.to_string()))?;
        // Both components are range-checked by chrono.
        Ok(ClockTime((time.hour() * 60 + time.minute()) as u16))
    }

    /// Parse like [`ClockTime::parse`], but never fail.
    ///
    /// Unparsable input becomes `00:00`. Because a midnight default can
    /// quietly open up "free time" that does not exist, every fallback is
    /// logged at `warn` level with the offending value.
    pub fn parse_lenient(raw: &str) -> ClockTime {
        match ClockTime::parse(raw) {
            Ok(time) => time,
            Err(_) => {
                log::warn!("unparsable time {raw:?}, treating it as 00:00");
                ClockTime::MIDNIGHT
            }
        }
    }

    /// Minutes from `self` until `later`, or 0 when `later` is not later.
    pub fn minutes_until(self, later: ClockTime) -> u32 {
        u32::from(later.0.saturating_sub(self.0))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ItineraryError;

    fn from_str(s: &str) -> Result<Self> {
        ClockTime::parse(s)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ClockTime::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_zero_padded_and_single_digit_hours() {
        assert_eq!(ClockTime::parse("09:30").unwrap().minutes(), 570);
        assert_eq!(ClockTime::parse("9:30").unwrap().minutes(), 570);
        assert_eq!(ClockTime::parse("23:59").unwrap().minutes(), 1439);
    }

    #[test]
    fn rejects_out_of_range_and_seconds() {
        assert!(ClockTime::parse("24:00").is_err());
        assert!(ClockTime::parse("12:60").is_err());
        assert!(ClockTime::parse("09:30:00").is_err());
        assert!(ClockTime::parse("").is_err());
    }

    #[test]
    fn lenient_parse_defaults_to_midnight() {
        assert_eq!(ClockTime::parse_lenient("noon"), ClockTime::MIDNIGHT);
        assert_eq!(ClockTime::parse_lenient("25:00"), ClockTime::MIDNIGHT);
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(ClockTime::from_hm(7, 5).unwrap().to_string(), "07:05");
    }

    #[test]
    fn minutes_until_saturates() {
        let nine = ClockTime::from_hm(9, 0).unwrap();
        let ten = ClockTime::from_hm(10, 0).unwrap();
        assert_eq!(nine.minutes_until(ten), 60);
        assert_eq!(ten.minutes_until(nine), 0);
    }
}
