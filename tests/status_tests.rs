use chrono::NaiveTime;
use rworktime::compute_status;
use rworktime::core::logic::Core;
use rworktime::core::status::countdown_message;
use rworktime::models::clock_status::{ClockStatus, ShiftPhase};
use rworktime::models::settings::Settings;

fn status(phase: ShiftPhase, remaining_minutes: i64) -> ClockStatus {
    ClockStatus {
        phase,
        remaining_minutes,
    }
}

#[test]
fn test_before_shift_counts_down_to_start() {
    assert_eq!(
        compute_status(8 * 60, "09:00", "17:30"),
        status(ShiftPhase::BeforeShift, 60)
    );
}

#[test]
fn test_shift_start_is_inside_the_shift() {
    assert_eq!(
        compute_status(9 * 60, "09:00", "17:30"),
        status(ShiftPhase::DuringShift, 510)
    );
}

#[test]
fn test_last_minute_of_shift() {
    assert_eq!(
        compute_status(17 * 60 + 29, "09:00", "17:30"),
        status(ShiftPhase::DuringShift, 1)
    );
}

#[test]
fn test_shift_end_is_after_shift() {
    assert_eq!(
        compute_status(17 * 60 + 30, "09:00", "17:30"),
        status(ShiftPhase::AfterShift, 0)
    );
    assert_eq!(
        compute_status(23 * 60, "09:00", "17:30"),
        status(ShiftPhase::AfterShift, 0)
    );
}

#[test]
fn test_unreadable_bounds_fall_through_to_after_shift() {
    assert_eq!(
        compute_status(8 * 60, "nine", "17:30"),
        status(ShiftPhase::AfterShift, 0)
    );
    // start still readable: before-shift is decided on start alone
    assert_eq!(
        compute_status(8 * 60, "09:00", ""),
        status(ShiftPhase::BeforeShift, 60)
    );
    assert_eq!(
        compute_status(10 * 60, "09:00", ""),
        status(ShiftPhase::AfterShift, 0)
    );
}

#[test]
fn test_status_at_uses_configured_window() {
    let settings = Settings {
        required_start: "08:30".into(),
        required_end: "16:00".into(),
        ..Settings::default()
    };
    let now = NaiveTime::from_hms_opt(15, 15, 42).expect("valid time");

    assert_eq!(
        Core::status_at(now, &settings),
        status(ShiftPhase::DuringShift, 45)
    );
}

#[test]
fn test_countdown_messages() {
    assert_eq!(
        countdown_message(&status(ShiftPhase::BeforeShift, 90)),
        "Shift starts in 01h 30m"
    );
    assert_eq!(
        countdown_message(&status(ShiftPhase::DuringShift, 5)),
        "Shift ends in 00h 05m"
    );
    assert_eq!(
        countdown_message(&status(ShiftPhase::AfterShift, 0)),
        "Shift is over"
    );
}
