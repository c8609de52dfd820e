use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
        set,
    } = &cli.command
    {
        let mut cfg = cfg.clone();

        // ---- SET ----
        if let Some(assignment) = set {
            ConfigLogic::set(&mut cfg, assignment, !cli.test)?;
            if cli.test {
                info("Test mode: configuration file not written.");
            }
        }

        // ---- PRINT ----
        if *print_config {
            ConfigLogic::print(&cfg)?;
        }

        // ---- EDIT ----
        if *edit_config {
            ConfigLogic::edit(&Config::config_file(), editor)?;
        }
    }

    Ok(())
}
