use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_records_in_range;
use crate::errors::AppResult;
use crate::models::settings::Settings;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, RESET, color_for_deficit};
use crate::utils::date::month_bounds;
use crate::utils::time::format_hours;
use chrono::NaiveDate;

pub struct StatsLogic;

impl StatsLogic {
    /// Print the dashboard for the month containing `reference`.
    pub fn print(pool: &mut DbPool, settings: &Settings, reference: NaiveDate) -> AppResult<()> {
        let (from, to) = month_bounds(reference);
        let records = load_records_in_range(&pool.conn, &from, &to)?;
        let stats = Core::dashboard(&records, settings, reference);

        header(format!("Dashboard {}", reference.format("%Y-%m")));

        println!("{CYAN}• Worked days:{RESET}          {}", stats.total_worked_days);
        println!(
            "{CYAN}• Average daily hours:{RESET}  {} (target {})",
            format_hours(stats.avg_daily_hours),
            format_hours(settings.required_daily_hours)
        );
        println!(
            "{CYAN}• Overtime hours:{RESET}       {}",
            format_hours(stats.total_overtime_hours)
        );
        println!(
            "{CYAN}• Weekend overtime:{RESET}     {}",
            format_hours(stats.weekend_overtime_hours)
        );
        println!(
            "{CYAN}• Deficit hours:{RESET}        {}{}{RESET}",
            color_for_deficit(stats.deficit_hours),
            format_hours(stats.deficit_hours)
        );

        Ok(())
    }
}
