//! Monthly rollup of work records into dashboard statistics.

use super::interval::compute_net_hours;
use crate::models::dashboard::DashboardStats;
use crate::models::day_type::DayType;
use crate::models::settings::Settings;
use crate::models::work_record::WorkRecord;
use chrono::NaiveDate;

/// Fold the records dated in `reference`'s calendar month into dashboard stats.
///
/// Records from any other month are ignored entirely. Weekend detection
/// uses each record's own date.
pub fn compute_dashboard(
    records: &[WorkRecord],
    settings: &Settings,
    reference: NaiveDate,
) -> DashboardStats {
    let (normal_days, overtime_days): (Vec<&WorkRecord>, Vec<&WorkRecord>) = records
        .iter()
        .filter(|r| r.in_month_of(reference))
        .partition(|r| r.day_type == DayType::Normal);

    let total_worked_days = normal_days.len();

    let total_normal_hours: f64 = normal_days
        .iter()
        .map(|r| compute_net_hours(r, settings))
        .sum();

    let avg_daily_hours = if total_worked_days == 0 {
        0.0
    } else {
        total_normal_hours / total_worked_days as f64
    };

    let required_total_hours = total_worked_days as f64 * settings.required_daily_hours;
    let deficit_hours = (required_total_hours - total_normal_hours).max(0.0);

    let mut total_overtime_hours = 0.0;
    let mut weekend_overtime_hours = 0.0;
    for r in &overtime_days {
        let hours = compute_net_hours(r, settings);
        total_overtime_hours += hours;
        if r.is_weekend() {
            weekend_overtime_hours += hours;
        }
    }

    DashboardStats {
        total_worked_days,
        avg_daily_hours,
        total_overtime_hours,
        weekend_overtime_hours,
        deficit_hours,
    }
}
