//! Trip-wide free time analysis.
//!
//! Sorts the bookings, determines the trip span (earliest start date to
//! latest end date), and visits every calendar day in it. A day with no
//! bookings yields one free-day slot; any other day is handed to
//! [`daily::find_daily_free_slots`](crate::daily::find_daily_free_slots).

use chrono::NaiveDate;

use crate::booking::Booking;
use crate::daily::find_daily_free_slots;
use crate::policy::AnalyzerPolicy;
use crate::slot::{FreeTimeSlot, SlotContext};

/// Find free time slots across a trip using the default policy.
///
/// See [`analyze_with_policy`].
pub fn analyze_free_time_slots(bookings: &[Booking]) -> Vec<FreeTimeSlot> {
    analyze_with_policy(bookings, &AnalyzerPolicy::default())
}

/// Find free time slots across every day of the trip span.
///
/// Bookings need not be sorted. Output is ordered by day, then by time within
/// each day. An empty booking list yields no slots.
pub fn analyze_with_policy(bookings: &[Booking], policy: &AnalyzerPolicy) -> Vec<FreeTimeSlot> {
    let Some((trip_start, trip_end)) = trip_span(bookings) else {
        return Vec::new();
    };

    let mut sorted: Vec<&Booking> = bookings.iter().collect();
    sorted.sort_by_cached_key(|b| (b.start_date, b.start_clock()));

    log::debug!(
        "analyzing {} booking(s) from {trip_start} to {trip_end}",
        sorted.len()
    );

    let mut free_slots = Vec::new();
    for date in trip_start.iter_days().take_while(|d| *d <= trip_end) {
        let day_bookings: Vec<&Booking> = sorted
            .iter()
            .copied()
            .filter(|b| b.occupies(date))
            .collect();

        if day_bookings.is_empty() {
            free_slots.push(FreeTimeSlot::new(
                date,
                policy.day_start,
                policy.free_day_end,
                SlotContext::FreeDay,
            ));
        } else {
            free_slots.extend(find_daily_free_slots(&day_bookings, date, policy));
        }
    }

    free_slots
}

/// The inclusive range of days covered by `bookings`, or `None` when empty.
pub fn trip_span(bookings: &[Booking]) -> Option<(NaiveDate, NaiveDate)> {
    let start = bookings.iter().map(|b| b.start_date).min()?;
    let end = bookings.iter().map(|b| b.end_date).max()?;
    Some((start, end))
}
