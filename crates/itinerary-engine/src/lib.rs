//! # itinerary-engine
//!
//! Free-time analysis for travel itineraries.
//!
//! Given a snapshot of a user's bookings (hotels, flights, activities), the
//! engine walks every calendar day of the trip and reports the windows of
//! free time between and around bookings, inside a configurable day window.
//! Everything here is pure and synchronous: bookings in, slots out.
//!
//! ## Modules
//!
//! - [`clock`] — `HH:MM` wall-clock times as minutes since midnight
//! - [`booking`] — Booking records and ingestion-time validation
//! - [`policy`] — Day window and minimum-gap configuration
//! - [`slot`] — Free time slots and their context labels
//! - [`daily`] — Gap detection within a single day
//! - [`analyzer`] — Trip-wide driver over every day of the booking span
//! - [`report`] — Itinerary report with a contextual message
//! - [`error`] — Error types

pub mod analyzer;
pub mod booking;
pub mod clock;
pub mod daily;
pub mod error;
pub mod policy;
pub mod report;
pub mod slot;

pub use analyzer::{analyze_free_time_slots, analyze_with_policy};
pub use booking::{bookings_from_json, ingest, Booking, BookingType, IngestMode};
pub use clock::ClockTime;
pub use error::ItineraryError;
pub use policy::AnalyzerPolicy;
pub use report::{analyze_itinerary, ItineraryReport, MessageComposer, TemplateComposer};
pub use slot::{FreeTimeSlot, SlotContext};
