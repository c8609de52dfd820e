use crate::errors::{AppError, AppResult};
use crate::models::settings::Settings;
use crate::utils::path::home_dir;
use crate::utils::time::validate_time;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub settings: Settings,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            settings: Settings::default(),
        }
    }
}

/// Keys accepted by `config --set`.
pub const SETTING_KEYS: &[&str] = &[
    "lunch_start",
    "lunch_end",
    "dinner_start",
    "dinner_end",
    "overtime_lunch_start",
    "overtime_lunch_end",
    "required_start",
    "required_end",
    "required_daily_hours",
];

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        home_dir().join(".rworktime")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworktime.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rworktime.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("cannot parse configuration: {}", e)))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        fs::write(Self::config_file(), self.to_yaml()?)?;
        Ok(())
    }

    /// Update one setting. Times are validated as HH:MM; hours must be a
    /// finite non-negative number.
    pub fn set_setting(&mut self, key: &str, value: &str) -> AppResult<()> {
        let s = &mut self.settings;
        match key {
            "lunch_start" => s.lunch.start = validate_time(value)?,
            "lunch_end" => s.lunch.end = validate_time(value)?,
            "dinner_start" => s.dinner.start = validate_time(value)?,
            "dinner_end" => s.dinner.end = validate_time(value)?,
            "overtime_lunch_start" => s.overtime_lunch.start = validate_time(value)?,
            "overtime_lunch_end" => s.overtime_lunch.end = validate_time(value)?,
            "required_start" => s.required_start = validate_time(value)?,
            "required_end" => s.required_end = validate_time(value)?,
            "required_daily_hours" => {
                let hours: f64 = value.trim().parse().map_err(|_| {
                    AppError::Config(format!("invalid number of hours: {}", value))
                })?;
                if !hours.is_finite() || hours < 0.0 {
                    return Err(AppError::Config(format!(
                        "required_daily_hours must be a non-negative number, got {}",
                        value
                    )));
                }
                s.required_daily_hours = hours;
            }
            other => {
                return Err(AppError::Config(format!(
                    "unknown setting '{}'. Valid keys: {}",
                    other,
                    SETTING_KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }

    /// Resolve a `--db` value: relative paths live under the config directory.
    pub fn resolve_db_path(custom_db: &str) -> String {
        let p = PathBuf::from(custom_db);
        let p = if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        };
        p.to_string_lossy().to_string()
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        // DB path: user provided or default
        let db_path = match custom_db {
            Some(name) => PathBuf::from(Self::resolve_db_path(&name)),
            None => Self::database_file(),
        };

        let mut config = if is_test {
            Config::default()
        } else {
            Self::load()?
        };
        config.database = db_path.to_string_lossy().to_string();

        // Write config file
        if !is_test {
            config.save()?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config)
    }
}
