use crate::config::Config;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", cfg.to_yaml()?);
        Ok(())
    }

    /// Open the config file in `editor`, falling back to $EDITOR/$VISUAL or the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                ));
                return Ok(());
            }
            Ok(_) | Err(_) => warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            )),
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using fallback '{}'",
                    default_editor
                ));
                Ok(())
            }
            Ok(_) | Err(_) => {
                error(format!(
                    "Failed to edit configuration file using fallback '{}'",
                    default_editor
                ));
                Err(AppError::Config(format!(
                    "no usable editor ('{}', '{}')",
                    editor_to_use, default_editor
                )))
            }
        }
    }

    /// Apply `key=value` to the settings. The file is written only when `persist` is set.
    pub fn set(cfg: &mut Config, assignment: &str, persist: bool) -> AppResult<()> {
        let (key, value) = assignment.split_once('=').ok_or_else(|| {
            AppError::Config(format!("expected key=value, got '{}'", assignment))
        })?;
        let (key, value) = (key.trim(), value.trim());

        cfg.set_setting(key, value)?;

        // re-read the file so a --db override is not written back
        if persist {
            let mut on_disk = Config::load()?;
            on_disk.set_setting(key, value)?;
            on_disk.save()?;
        }

        // audit in the configured database when it is reachable
        if persist
            && Path::new(&cfg.database).exists()
            && let Ok(pool) = DbPool::open_initialized(&cfg.database)
        {
            ttlog_or_warn(&pool.conn, "config", key, &format!("{key} set to {value}"));
        }

        success(format!("Setting '{}' updated to {}.", key, value));
        Ok(())
    }
}
