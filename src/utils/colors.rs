/// ANSI color helper utilities for terminal output.
use crate::models::clock_status::ShiftPhase;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Deficit color:
/// \>0 → red
/// 0 → green
pub fn color_for_deficit(hours: f64) -> &'static str {
    if hours > 0.0 { RED } else { GREEN }
}

/// Zero-hour records are greyed out in listings.
pub fn color_for_hours(hours: f64) -> &'static str {
    if hours > 0.0 { RESET } else { GREY }
}

pub fn color_for_phase(phase: ShiftPhase) -> &'static str {
    match phase {
        ShiftPhase::BeforeShift => YELLOW,
        ShiftPhase::DuringShift => GREEN,
        ShiftPhase::AfterShift => CYAN,
    }
}

