use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status::StatusLogic;
use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_time;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { at } = cmd {
        let now = match at {
            Some(t) => parse_time(t).ok_or_else(|| AppError::InvalidTime(t.clone()))?,
            None => Local::now().time(),
        };

        StatusLogic::print(now, &cfg.settings);
    }
    Ok(())
}
