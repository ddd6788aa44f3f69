//! Itinerary reports: free slots plus a message inviting the user to fill them.
//!
//! The message is produced by a [`MessageComposer`]. A generative-text client
//! can implement the trait; [`TemplateComposer`] is the deterministic
//! sentence used when no such client is wired in, or when it fails.

use serde::{Deserialize, Serialize};

use crate::analyzer::analyze_with_policy;
use crate::booking::Booking;
use crate::policy::AnalyzerPolicy;
use crate::slot::FreeTimeSlot;

/// Message returned when the analysis found no free time at all.
pub const NO_FREE_TIME_MESSAGE: &str = "No free time slots found in your current itinerary.";

/// Result of analyzing one user's itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryReport {
    pub user_id: i64,
    pub total_bookings: usize,
    pub free_time_slots: Vec<FreeTimeSlot>,
    pub contextual_message: String,
    /// The booking snapshot the report was computed from.
    pub bookings: Vec<Booking>,
}

/// Turns the most notable free slot into a user-facing message.
pub trait MessageComposer {
    type Error: std::fmt::Display;

    fn compose(&self, slot: &FreeTimeSlot) -> Result<String, Self::Error>;
}

/// Fixed sentence naming the slot's bounds. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateComposer;

impl MessageComposer for TemplateComposer {
    type Error = std::convert::Infallible;

    fn compose(&self, slot: &FreeTimeSlot) -> Result<String, Self::Error> {
        Ok(template_message(slot))
    }
}

fn template_message(slot: &FreeTimeSlot) -> String {
    format!(
        "You've got some free time between {} and {}. What kind of experience are you in the mood for?",
        slot.start_time, slot.end_time
    )
}

/// The longest slot; the earliest one wins a tie.
pub fn largest_slot(slots: &[FreeTimeSlot]) -> Option<&FreeTimeSlot> {
    slots.iter().reduce(|best, slot| {
        if slot.duration_minutes > best.duration_minutes {
            slot
        } else {
            best
        }
    })
}

/// Compose a message about the largest slot, falling back to the template.
pub fn compose_message<C: MessageComposer>(slots: &[FreeTimeSlot], composer: &C) -> String {
    let Some(slot) = largest_slot(slots) else {
        return NO_FREE_TIME_MESSAGE.to_string();
    };

    match composer.compose(slot) {
        Ok(message) => message.trim().to_string(),
        Err(e) => {
            log::warn!("message composer failed, using template: {e}");
            template_message(slot)
        }
    }
}

/// Analyze a user's booking snapshot and build the full report.
pub fn analyze_itinerary<C: MessageComposer>(
    user_id: i64,
    bookings: Vec<Booking>,
    policy: &AnalyzerPolicy,
    composer: &C,
) -> ItineraryReport {
    let free_time_slots = analyze_with_policy(&bookings, policy);
    let contextual_message = compose_message(&free_time_slots, composer);

    ItineraryReport {
        user_id,
        total_bookings: bookings.len(),
        free_time_slots,
        contextual_message,
        bookings,
    }
}
