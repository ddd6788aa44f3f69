//! Booking records and ingestion-time validation.
//!
//! A [`Booking`] is one row of a user's active reservations: a hotel stay, a
//! flight, or a booked activity. The analyzer only looks at the date range
//! and the start/end times; everything else rides along untouched so callers
//! can echo the snapshot back.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clock::{ClockTime, MINUTES_PER_DAY};
use crate::error::{ItineraryError, Result};

/// Kind of reservation. Informational only: the analyzer treats all kinds alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingType {
    Hotel,
    Flight,
    Activity,
}

/// A time-bound reservation occupying part of a user's schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub booking_type: BookingType,
    /// First day the booking occupies (inclusive).
    pub start_date: NaiveDate,
    /// Last day the booking occupies (inclusive).
    pub end_date: NaiveDate,
    /// `HH:MM` on `start_date`. Kept raw; see [`Booking::start_clock`].
    #[serde(default)]
    pub start_time: Option<String>,
    /// `HH:MM` on `end_date`. Kept raw; see [`Booking::end_clock`].
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i64>,
    /// Any other columns of the source row, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Booking {
    /// A booking with only the fields the analyzer reads.
    pub fn new(
        booking_type: BookingType,
        start_date: NaiveDate,
        end_date: NaiveDate,
        start_time: &str,
        end_time: &str,
    ) -> Self {
        Self {
            booking_type,
            start_date,
            end_date,
            start_time: Some(start_time.to_string()),
            end_time: Some(end_time.to_string()),
            id: None,
            title: None,
            location: None,
            booking_id: None,
            duration_minutes: None,
            extra: Map::new(),
        }
    }

    /// Start time on `start_date`. Missing or malformed values become `00:00`.
    pub fn start_clock(&self) -> ClockTime {
        lenient(self.start_time.as_deref())
    }

    /// End time on `end_date`. Missing or malformed values become `00:00`.
    pub fn end_clock(&self) -> ClockTime {
        lenient(self.end_time.as_deref())
    }

    /// End of the booking on `end_date`, in minutes since midnight.
    ///
    /// Like [`Booking::end_clock`], except that `24:00` means "until
    /// midnight" and maps to the end of the day instead of `00:00`.
    pub fn end_minutes(&self) -> u16 {
        match self.end_time.as_deref().map(str::trim) {
            Some("24:00") => MINUTES_PER_DAY,
            _ => self.end_clock().minutes(),
        }
    }

    /// Whether `date` falls within `[start_date, end_date]`.
    pub fn occupies(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Check the booking's ranges are not inverted.
    ///
    /// Malformed times are not rejected here: the analyzer defaults them.
    /// A same-day booking is only rejected when both times parse and the
    /// end precedes the start.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.end_date < self.start_date {
            return Err(format!(
                "end_date {} precedes start_date {}",
                self.end_date, self.start_date
            ));
        }

        if self.start_date == self.end_date {
            let start = self.start_time.as_deref().map(ClockTime::parse);
            let end = self.end_time.as_deref().map(ClockTime::parse);
            if let (Some(Ok(start)), Some(Ok(end))) = (start, end) {
                if end < start {
                    return Err(format!(
                        "end_time {end} precedes start_time {start} on {}",
                        self.start_date
                    ));
                }
            }
        }

        Ok(())
    }
}

fn lenient(raw: Option<&str>) -> ClockTime {
    match raw {
        Some(raw) => ClockTime::parse_lenient(raw),
        None => {
            log::warn!("missing booking time, treating it as 00:00");
            ClockTime::MIDNIGHT
        }
    }
}

/// What [`ingest`] does with a booking that fails [`Booking::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IngestMode {
    /// Reject the whole snapshot on the first invalid booking.
    #[default]
    Strict,
    /// Drop invalid bookings (logged at `warn`) and keep the rest.
    SkipInvalid,
}

/// Validate a booking snapshot before analysis.
pub fn ingest(bookings: Vec<Booking>, mode: IngestMode) -> Result<Vec<Booking>> {
    let mut accepted = Vec::with_capacity(bookings.len());

    for (index, booking) in bookings.into_iter().enumerate() {
        match booking.validate() {
            Ok(()) => accepted.push(booking),
            Err(reason) => match mode {
                IngestMode::Strict => {
                    return Err(ItineraryError::InvalidBooking { index, reason });
                }
                IngestMode::SkipInvalid => {
                    log::warn!("skipping booking at index {index}: {reason}");
                }
            },
        }
    }

    Ok(accepted)
}

/// Parse a JSON array of bookings.
pub fn bookings_from_json(json: &str) -> Result<Vec<Booking>> {
    Ok(serde_json::from_str(json)?)
}
