use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::day_type::DayType;
use crate::models::work_record::WorkRecord;
use crate::utils::date;
use crate::utils::time::validate_time;

/// Add or replace the record for a date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        day_type,
        note,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        //
        // 2. Parse times (HH:MM)
        //
        let start = validate_time(start)?;
        let end = validate_time(end)?;

        //
        // 3. Parse day type
        //
        let kind = DayType::from_code(day_type).ok_or_else(|| {
            AppError::InvalidDayType(format!(
                "'{}'. Use 'normal' (n) or 'overtime' (o)",
                day_type
            ))
        })?;

        let record =
            WorkRecord::new(d, &start, &end, kind).with_note(note.as_deref().unwrap_or(""));

        //
        // 4. Open DB and store
        //
        let mut pool = DbPool::open_initialized(&cfg.database)?;
        AddLogic::apply(&mut pool, &record)?;
    }

    Ok(())
}
