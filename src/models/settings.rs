use serde::{Deserialize, Serialize};

/// A wall-clock window on a single day, stored as "HH:MM" strings.
///
/// The values are kept as text so that a hand-edited config with a bad
/// value still loads; the calculator treats an unreadable bound as an
/// empty window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakWindow {
    pub start: String,
    pub end: String,
}

impl BreakWindow {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

/// Break policy and attendance targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_lunch")]
    pub lunch: BreakWindow,
    #[serde(default = "default_dinner")]
    pub dinner: BreakWindow,
    #[serde(default = "default_lunch")]
    pub overtime_lunch: BreakWindow,
    #[serde(default = "default_required_start")]
    pub required_start: String,
    #[serde(default = "default_required_end")]
    pub required_end: String,
    #[serde(default = "default_required_daily_hours")]
    pub required_daily_hours: f64,
}

fn default_lunch() -> BreakWindow {
    BreakWindow::new("12:00", "13:30")
}
fn default_dinner() -> BreakWindow {
    BreakWindow::new("17:30", "18:00")
}
fn default_required_start() -> String {
    "09:00".to_string()
}
fn default_required_end() -> String {
    "17:30".to_string()
}
fn default_required_daily_hours() -> f64 {
    8.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lunch: default_lunch(),
            dinner: default_dinner(),
            overtime_lunch: default_lunch(),
            required_start: default_required_start(),
            required_end: default_required_end(),
            required_daily_hours: default_required_daily_hours(),
        }
    }
}
