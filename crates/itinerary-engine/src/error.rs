//! Error types for itinerary-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ItineraryError {
    #[error("Invalid time '{0}': expected 24-hour HH:MM")]
    InvalidTime(String),

    /// A booking failed ingestion-time validation.
    /// `index` is the booking's 0-based position in the input.
    #[error("Invalid booking at index {index}: {reason}")]
    InvalidBooking { index: usize, reason: String },

    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ItineraryError>;
