//! Free time slots produced by the analyzer.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;

/// Where in the day a free slot sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotContext {
    #[serde(rename = "Free day - no bookings scheduled")]
    FreeDay,
    #[serde(rename = "Morning free time")]
    Morning,
    #[serde(rename = "Gap between bookings")]
    Gap,
    #[serde(rename = "Evening free time")]
    Evening,
}

impl SlotContext {
    pub fn label(self) -> &'static str {
        match self {
            SlotContext::FreeDay => "Free day - no bookings scheduled",
            SlotContext::Morning => "Morning free time",
            SlotContext::Gap => "Gap between bookings",
            SlotContext::Evening => "Evening free time",
        }
    }
}

impl fmt::Display for SlotContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A contiguous free window on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeTimeSlot {
    /// The calendar day this slot belongs to.
    pub date: NaiveDate,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    /// Always `end_time - start_time`.
    pub duration_minutes: u32,
    pub context: SlotContext,
}

impl FreeTimeSlot {
    pub fn new(
        date: NaiveDate,
        start_time: ClockTime,
        end_time: ClockTime,
        context: SlotContext,
    ) -> Self {
        Self {
            date,
            start_time,
            end_time,
            duration_minutes: start_time.minutes_until(end_time),
            context,
        }
    }
}
