//! Gap detection within a single day.
//!
//! The bookings active on a day are turned into busy spans (minutes since
//! midnight), sorted, and merged so that overlapping or back-to-back
//! bookings form one block. A cursor then walks the blocks across the day
//! window and every gap of at least the policy's minimum length becomes a
//! [`FreeTimeSlot`]: before the first block it is morning free time, between
//! blocks a gap between bookings, after the last block evening free time.

use chrono::NaiveDate;

use crate::booking::Booking;
use crate::clock::{ClockTime, MINUTES_PER_DAY};
use crate::policy::AnalyzerPolicy;
use crate::slot::{FreeTimeSlot, SlotContext};

/// The part of `date` a booking occupies, as `[start, end)` in minutes.
///
/// A booking's start time only applies on its start date and its end time
/// only on its end date; on interior days of a multi-day booking it covers
/// the whole day. An end of `24:00` runs to midnight. An end before the
/// start collapses to an empty span.
///
/// A hotel stay therefore leaves no free time on its interior days. Callers
/// that want hotel nights to leave the daytime free should pass separate
/// check-in and check-out bookings instead of one spanning booking.
pub fn busy_span(booking: &Booking, date: NaiveDate) -> (u16, u16) {
    let start = if date == booking.start_date {
        booking.start_clock().minutes()
    } else {
        0
    };
    let end = if date == booking.end_date {
        booking.end_minutes()
    } else {
        MINUTES_PER_DAY
    };
    (start, end.max(start))
}

/// Merge overlapping or adjacent busy spans.
///
/// Returns a sorted, non-overlapping list of `(start, end)` spans.
fn merge_busy_spans(mut spans: Vec<(u16, u16)>) -> Vec<(u16, u16)> {
    spans.sort_unstable();

    let mut merged: Vec<(u16, u16)> = Vec::with_capacity(spans.len());
    for (start, end) in spans {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }

    merged
}

/// Find the free slots on `date` around the bookings active that day.
///
/// `day_bookings` should all occupy `date`; an empty slice yields no slots
/// (the trip-wide driver handles booking-free days itself). Slots are
/// clipped to the policy's day window and returned in chronological order.
pub fn find_daily_free_slots(
    day_bookings: &[&Booking],
    date: NaiveDate,
    policy: &AnalyzerPolicy,
) -> Vec<FreeTimeSlot> {
    if day_bookings.is_empty() {
        return Vec::new();
    }

    let spans = day_bookings.iter().map(|b| busy_span(b, date)).collect();
    let merged = merge_busy_spans(spans);

    let window_start = policy.day_start.minutes();
    let window_end = policy.day_end.minutes();

    let mut slots = Vec::new();
    let mut push_gap = |from: u16, to: u16, context: SlotContext| {
        if u32::from(to - from) >= policy.min_gap_minutes {
            slots.push(FreeTimeSlot::new(
                date,
                ClockTime::from_minutes_unchecked(from),
                ClockTime::from_minutes_unchecked(to),
                context,
            ));
        }
    };

    let mut cursor = window_start;
    let mut context = SlotContext::Morning;
    for (busy_start, busy_end) in merged {
        let gap_end = busy_start.min(window_end);
        if cursor < gap_end {
            push_gap(cursor, gap_end, context);
        }
        context = SlotContext::Gap;
        cursor = cursor.max(busy_end);
    }

    if cursor < window_end {
        push_gap(cursor, window_end, SlotContext::Evening);
    }

    log::debug!(
        "{date}: {} booking(s), {} free slot(s)",
        day_bookings.len(),
        slots.len()
    );

    slots
}
