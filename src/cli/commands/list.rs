use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date::resolve_period;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let bounds = resolve_period(period.as_deref()).map_err(AppError::InvalidDate)?;

        let mut pool = DbPool::open_initialized(&cfg.database)?;
        ListLogic::print(&mut pool, &cfg.settings, bounds)?;
    }
    Ok(())
}
