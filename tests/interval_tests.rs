mod common;
use common::{approx, record};

use rworktime::core::calculator::interval::{OVERTIME_CAP_HOURS, break_minutes};
use rworktime::models::day_type::DayType;
use rworktime::models::settings::{BreakWindow, Settings};
use rworktime::{compute_net_hours, overlap};

#[test]
fn test_overlap_touching_intervals_is_zero() {
    assert_eq!(overlap(0, 10, 10, 20), 0);
    assert_eq!(overlap(10, 20, 0, 10), 0);
}

#[test]
fn test_overlap_disjoint_intervals_is_zero() {
    assert_eq!(overlap(0, 5, 10, 20), 0);
    assert_eq!(overlap(30, 40, 10, 20), 0);
}

#[test]
fn test_overlap_self_is_full_length() {
    assert_eq!(overlap(540, 1050, 540, 1050), 510);
}

#[test]
fn test_overlap_partial_and_contained() {
    // work 09:00-17:30, lunch 12:00-13:30
    assert_eq!(overlap(540, 1050, 720, 810), 90);
    // work 12:30-14:00 against the same lunch
    assert_eq!(overlap(750, 840, 720, 810), 60);
}

#[test]
fn test_overlap_inverted_window_is_zero() {
    assert_eq!(overlap(0, 1000, 600, 500), 0);
}

#[test]
fn test_overlap_is_zero_for_every_ordered_non_overlapping_pair() {
    for s1 in (0..1440).step_by(60) {
        for e1 in (s1..1440).step_by(60) {
            for s2 in (e1..1440).step_by(90) {
                for e2 in (s2..1440).step_by(90) {
                    assert_eq!(overlap(s1, e1, s2, e2), 0, "{s1}-{e1} vs {s2}-{e2}");
                }
            }
        }
    }
}

#[test]
fn test_normal_day_ending_at_dinner_start() {
    // 510 min - 90 lunch - 0 dinner (17:30 touches dinner start) = 420 min
    let rec = record("2025-03-03", "09:00", "17:30", DayType::Normal);
    approx(compute_net_hours(&rec, &Settings::default()), 7.0);
}

#[test]
fn test_normal_day_deducts_lunch_and_dinner() {
    // 720 - 90 - 30 = 600
    let rec = record("2025-03-03", "08:00", "20:00", DayType::Normal);
    approx(compute_net_hours(&rec, &Settings::default()), 10.0);
}

#[test]
fn test_overtime_day_is_capped_at_eight_hours() {
    // 720 - 90 = 630 min = 10.5 h, capped
    let rec = record("2025-03-01", "08:00", "20:00", DayType::Overtime);
    approx(compute_net_hours(&rec, &Settings::default()), 8.0);
}

#[test]
fn test_overtime_day_ignores_dinner_window() {
    let settings = Settings::default();

    let ot = record("2025-03-01", "17:00", "19:00", DayType::Overtime);
    approx(compute_net_hours(&ot, &settings), 2.0);

    let normal = record("2025-03-03", "17:00", "19:00", DayType::Normal);
    approx(compute_net_hours(&normal, &settings), 1.5);
}

#[test]
fn test_overtime_uses_its_own_lunch_window() {
    let settings = Settings {
        overtime_lunch: BreakWindow::new("13:00", "13:30"),
        ..Settings::default()
    };
    // 09:00-15:00 = 360 - 30
    let rec = record("2025-03-01", "09:00", "15:00", DayType::Overtime);
    approx(compute_net_hours(&rec, &settings), 5.5);
}

#[test]
fn test_partial_lunch_overlap() {
    // 12:30-14:00 = 90 min, 60 of them inside lunch
    let rec = record("2025-03-03", "12:30", "14:00", DayType::Normal);
    approx(compute_net_hours(&rec, &Settings::default()), 0.5);
}

#[test]
fn test_end_not_after_start_yields_zero() {
    let settings = Settings::default();
    for (start, end) in [("17:00", "09:00"), ("09:00", "09:00")] {
        let rec = record("2025-03-03", start, end, DayType::Normal);
        approx(compute_net_hours(&rec, &settings), 0.0);
    }
}

#[test]
fn test_malformed_times_yield_zero() {
    let settings = Settings::default();
    for (start, end) in [("", "17:00"), ("09:00", ""), ("9h", "17:00"), ("09:00", "24:30")] {
        let rec = record("2025-03-03", start, end, DayType::Normal);
        approx(compute_net_hours(&rec, &settings), 0.0);
    }
}

#[test]
fn test_inverted_break_window_deducts_nothing() {
    let settings = Settings {
        lunch: BreakWindow::new("13:30", "12:00"),
        ..Settings::default()
    };
    let rec = record("2025-03-03", "09:00", "17:30", DayType::Normal);
    approx(compute_net_hours(&rec, &settings), 8.5);
}

#[test]
fn test_unreadable_break_window_deducts_nothing() {
    let settings = Settings {
        lunch: BreakWindow::new("noon", "13:30"),
        ..Settings::default()
    };
    assert_eq!(break_minutes(540, 1050, DayType::Normal, &settings), 0);
}

#[test]
fn test_overlapping_windows_never_produce_negative_hours() {
    let settings = Settings {
        lunch: BreakWindow::new("12:00", "18:00"),
        dinner: BreakWindow::new("17:00", "18:00"),
        ..Settings::default()
    };
    let rec = record("2025-03-03", "12:00", "18:00", DayType::Normal);
    approx(compute_net_hours(&rec, &settings), 0.0);
}

#[test]
fn test_net_hours_bounds_over_a_day_of_spans() {
    let settings = Settings::default();
    let times: Vec<String> = (0..24)
        .flat_map(|h| [0, 30].map(move |m| format!("{h:02}:{m:02}")))
        .collect();

    for start in &times {
        for end in &times {
            let normal = record("2025-03-03", start, end, DayType::Normal);
            let n = compute_net_hours(&normal, &settings);
            assert!(n >= 0.0 && n.is_finite(), "{start}-{end} normal = {n}");

            let overtime = record("2025-03-01", start, end, DayType::Overtime);
            let o = compute_net_hours(&overtime, &settings);
            assert!(o >= 0.0 && o <= OVERTIME_CAP_HOURS, "{start}-{end} overtime = {o}");
        }
    }
}
