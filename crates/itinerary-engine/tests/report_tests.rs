//! Tests for itinerary reports and contextual messages.

use chrono::NaiveDate;
use itinerary_engine::report::{compose_message, largest_slot, NO_FREE_TIME_MESSAGE};
use itinerary_engine::{
    analyze_itinerary, AnalyzerPolicy, Booking, BookingType, ClockTime, FreeTimeSlot,
    MessageComposer, SlotContext, TemplateComposer,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
}

fn slot(start: &str, end: &str, context: SlotContext) -> FreeTimeSlot {
    FreeTimeSlot::new(
        day(1),
        ClockTime::parse(start).unwrap(),
        ClockTime::parse(end).unwrap(),
        context,
    )
}

/// A composer standing in for a generative-text client that is down.
struct Unavailable;

impl MessageComposer for Unavailable {
    type Error = String;

    fn compose(&self, _slot: &FreeTimeSlot) -> Result<String, Self::Error> {
        Err("service unavailable".to_string())
    }
}

/// A composer that pads its answer with whitespace.
struct Chatty;

impl MessageComposer for Chatty {
    type Error = String;

    fn compose(&self, slot: &FreeTimeSlot) -> Result<String, Self::Error> {
        Ok(format!("\n  {} minutes to explore!  \n", slot.duration_minutes))
    }
}

#[test]
fn largest_slot_prefers_earliest_on_tie() {
    let slots = vec![
        slot("09:00", "10:00", SlotContext::Morning),
        slot("11:00", "15:00", SlotContext::Gap),
        slot("18:00", "22:00", SlotContext::Evening),
    ];
    let largest = largest_slot(&slots).unwrap();
    assert_eq!(largest.context, SlotContext::Gap);
    assert_eq!(largest_slot(&[]), None);
}

#[test]
fn no_slots_gives_fixed_message() {
    assert_eq!(compose_message(&[], &TemplateComposer), NO_FREE_TIME_MESSAGE);
}

#[test]
fn template_names_largest_slot_bounds() {
    let slots = vec![
        slot("09:00", "10:00", SlotContext::Morning),
        slot("16:00", "22:00", SlotContext::Evening),
    ];
    assert_eq!(
        compose_message(&slots, &TemplateComposer),
        "You've got some free time between 16:00 and 22:00. What kind of experience are you in the mood for?"
    );
}

#[test]
fn failing_composer_falls_back_to_template() {
    let slots = vec![slot("11:00", "15:00", SlotContext::Gap)];
    let message = compose_message(&slots, &Unavailable);
    assert!(message.starts_with("You've got some free time between 11:00 and 15:00."));
}

#[test]
fn composer_output_is_trimmed() {
    let slots = vec![slot("11:00", "15:00", SlotContext::Gap)];
    assert_eq!(compose_message(&slots, &Chatty), "240 minutes to explore!");
}

#[test]
fn report_counts_bookings_and_lists_slots() {
    let bookings = vec![
        Booking::new(BookingType::Activity, day(1), day(1), "10:00", "11:00"),
        Booking::new(BookingType::Activity, day(1), day(1), "15:00", "16:00"),
    ];

    let report = analyze_itinerary(7, bookings, &AnalyzerPolicy::default(), &TemplateComposer);

    assert_eq!(report.user_id, 7);
    assert_eq!(report.total_bookings, 2);
    assert_eq!(report.bookings.len(), 2);
    assert_eq!(report.free_time_slots.len(), 3);
    assert!(report.contextual_message.contains("16:00 and 22:00"));
}

#[test]
fn report_for_empty_snapshot() {
    let report = analyze_itinerary(3, Vec::new(), &AnalyzerPolicy::default(), &TemplateComposer);
    assert_eq!(report.total_bookings, 0);
    assert!(report.free_time_slots.is_empty());
    assert_eq!(report.contextual_message, NO_FREE_TIME_MESSAGE);
}

#[test]
fn report_serializes_slot_labels() {
    let bookings = vec![Booking::new(
        BookingType::Activity,
        day(1),
        day(1),
        "09:30",
        "11:00",
    )];
    let report = analyze_itinerary(1, bookings, &AnalyzerPolicy::default(), &TemplateComposer);
    let json = serde_json::to_value(&report).unwrap();

    let slot = &json["free_time_slots"][0];
    assert_eq!(slot["date"], "2026-03-01");
    assert_eq!(slot["start_time"], "11:00");
    assert_eq!(slot["end_time"], "22:00");
    assert_eq!(slot["duration_minutes"], 660);
    assert_eq!(slot["context"], "Evening free time");
}
