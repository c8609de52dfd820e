use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a work record.
///
/// `Normal` days deduct both the lunch and the dinner window; `Overtime`
/// days (holidays, weekends, extra shifts) deduct only the overtime lunch
/// window and are credited at most 8 hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    #[default]
    Normal,
    Overtime,
}

impl DayType {
    pub fn code(&self) -> &'static str {
        match self {
            DayType::Normal => "normal",
            DayType::Overtime => "overtime",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.code()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "normal" => Some(DayType::Normal),
            "overtime" => Some(DayType::Overtime),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (`normal`/`n`, `overtime`/`o`/`ot`, any case)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "normal" | "n" => Some(DayType::Normal),
            "overtime" | "o" | "ot" => Some(DayType::Overtime),
            _ => None,
        }
    }

    pub fn is_overtime(&self) -> bool {
        matches!(self, DayType::Overtime)
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
