use crate::models::clock_status::{ClockStatus, ShiftPhase};
use crate::utils::time::to_minutes;

/// Classify `now_minutes` against the attendance window `[required_start, required_end)`.
///
/// An unreadable bound never matches, so a broken window reads as "after shift".
pub fn compute_status(now_minutes: i64, required_start: &str, required_end: &str) -> ClockStatus {
    let start = to_minutes(required_start);
    let end = to_minutes(required_end);

    if let Some(s) = start
        && now_minutes < s
    {
        return ClockStatus {
            phase: ShiftPhase::BeforeShift,
            remaining_minutes: s - now_minutes,
        };
    }

    if let (Some(s), Some(e)) = (start, end)
        && s <= now_minutes
        && now_minutes < e
    {
        return ClockStatus {
            phase: ShiftPhase::DuringShift,
            remaining_minutes: e - now_minutes,
        };
    }

    ClockStatus {
        phase: ShiftPhase::AfterShift,
        remaining_minutes: 0,
    }
}
