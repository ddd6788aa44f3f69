//! Day window and threshold configuration for the analyzer.

use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::error::{ItineraryError, Result};

/// Bounds and thresholds applied to every analyzed day.
///
/// The defaults model "reasonable activity hours": free time is looked for
/// between 09:00 and 22:00, gaps shorter than an hour are not reported, and a
/// day without bookings is offered as 09:00 to 18:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerPolicy {
    /// Start of the day window.
    pub day_start: ClockTime,
    /// End of the day window.
    pub day_end: ClockTime,
    /// End of the slot emitted for a day with no bookings. The slot starts at
    /// `day_start`.
    pub free_day_end: ClockTime,
    /// Shortest gap worth reporting, in minutes.
    pub min_gap_minutes: u32,
}

impl AnalyzerPolicy {
    pub const DEFAULT_DAY_START: ClockTime = ClockTime::from_minutes_unchecked(9 * 60);
    pub const DEFAULT_DAY_END: ClockTime = ClockTime::from_minutes_unchecked(22 * 60);
    pub const DEFAULT_FREE_DAY_END: ClockTime = ClockTime::from_minutes_unchecked(18 * 60);
    pub const DEFAULT_MIN_GAP_MINUTES: u32 = 60;

    /// Reject windows that cannot produce a meaningful slot.
    ///
    /// The free-day slot must fit inside the day window and be at least
    /// `min_gap_minutes` long, like every other slot.
    pub fn validate(&self) -> Result<()> {
        if self.day_start >= self.day_end {
            return Err(ItineraryError::InvalidPolicy(format!(
                "day_start {} must be before day_end {}",
                self.day_start, self.day_end
            )));
        }
        if self.free_day_end <= self.day_start {
            return Err(ItineraryError::InvalidPolicy(format!(
                "free_day_end {} must be after day_start {}",
                self.free_day_end, self.day_start
            )));
        }
        if self.free_day_end > self.day_end {
            return Err(ItineraryError::InvalidPolicy(format!(
                "free_day_end {} must not be after day_end {}",
                self.free_day_end, self.day_end
            )));
        }
        if self.min_gap_minutes == 0 {
            return Err(ItineraryError::InvalidPolicy(
                "min_gap_minutes must be at least 1".to_string(),
            ));
        }
        if self.free_day_minutes() < self.min_gap_minutes {
            return Err(ItineraryError::InvalidPolicy(format!(
                "free day {}-{} is shorter than min_gap_minutes {}",
                self.day_start, self.free_day_end, self.min_gap_minutes
            )));
        }
        Ok(())
    }

    /// Load a policy from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let policy: AnalyzerPolicy = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Length of the slot emitted for a day with no bookings.
    pub fn free_day_minutes(&self) -> u32 {
        self.day_start.minutes_until(self.free_day_end)
    }
}

impl Default for AnalyzerPolicy {
    fn default() -> Self {
        Self {
            day_start: Self::DEFAULT_DAY_START,
            day_end: Self::DEFAULT_DAY_END,
            free_day_end: Self::DEFAULT_FREE_DAY_END,
            min_gap_minutes: Self::DEFAULT_MIN_GAP_MINUTES,
        }
    }
}
