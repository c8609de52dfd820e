use crate::core::logic::Core;
use crate::models::clock_status::{ClockStatus, ShiftPhase};
use crate::models::settings::Settings;
use crate::utils::colors::{RESET, color_for_phase};
use crate::utils::mins2readable;
use chrono::NaiveTime;

pub struct StatusLogic;

impl StatusLogic {
    pub fn print(now: NaiveTime, settings: &Settings) {
        let status = Core::status_at(now, settings);

        println!("🕒 {}", now.format("%H:%M:%S"));
        println!(
            "   Attendance window: {} - {}",
            settings.required_start, settings.required_end
        );
        println!(
            "{}{}{}",
            color_for_phase(status.phase),
            countdown_message(&status),
            RESET
        );
    }
}

pub fn countdown_message(status: &ClockStatus) -> String {
    match status.phase {
        ShiftPhase::BeforeShift => format!(
            "Shift starts in {}",
            mins2readable(status.remaining_minutes, false, false)
        ),
        ShiftPhase::DuringShift => format!(
            "Shift ends in {}",
            mins2readable(status.remaining_minutes, false, false)
        ),
        ShiftPhase::AfterShift => "Shift is over".to_string(),
    }
}
