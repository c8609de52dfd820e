//! Net worked hours for a single record.
//!
//! The calculator is lenient: malformed times, inverted intervals and
//! inverted break windows all resolve to a zero contribution instead of an
//! error, so the dashboard always has a number to show.

use crate::models::day_type::DayType;
use crate::models::settings::{BreakWindow, Settings};
use crate::models::work_record::WorkRecord;
use crate::utils::time::to_minutes;

/// Credit ceiling for a single overtime day.
pub const OVERTIME_CAP_HOURS: f64 = 8.0;

/// Length in minutes of the intersection of `[s1, e1)` and `[s2, e2)`.
///
/// Touching intervals (`e1 == s2`) do not overlap.
pub fn overlap(s1: i64, e1: i64, s2: i64, e2: i64) -> i64 {
    (e1.min(e2) - s1.max(s2)).max(0)
}

/// Overlap between the work interval and a configured window.
/// An unreadable window bound counts as no window at all.
fn window_overlap(start: i64, end: i64, window: &BreakWindow) -> i64 {
    match (to_minutes(&window.start), to_minutes(&window.end)) {
        (Some(ws), Some(we)) => overlap(start, end, ws, we),
        _ => 0,
    }
}

/// Break minutes deducted from `[start, end)` for the given day type.
pub fn break_minutes(start: i64, end: i64, day_type: DayType, settings: &Settings) -> i64 {
    match day_type {
        DayType::Normal => {
            window_overlap(start, end, &settings.lunch)
                + window_overlap(start, end, &settings.dinner)
        }
        DayType::Overtime => window_overlap(start, end, &settings.overtime_lunch),
    }
}

/// Net worked hours for `record`: span minus overlapping breaks,
/// capped at 8 hours for overtime days.
pub fn compute_net_hours(record: &WorkRecord, settings: &Settings) -> f64 {
    let (Some(start), Some(end)) = (to_minutes(&record.start), to_minutes(&record.end)) else {
        return 0.0;
    };

    if end <= start {
        return 0.0;
    }

    let total = end - start;
    let breaks = break_minutes(start, end, record.day_type, settings);

    // breaks ⊆ [start, end) except when lunch and dinner windows overlap each other
    let net_minutes = (total - breaks).max(0);
    let hours = net_minutes as f64 / 60.0;

    if record.day_type.is_overtime() {
        hours.min(OVERTIME_CAP_HOURS)
    } else {
        hours
    }
}
