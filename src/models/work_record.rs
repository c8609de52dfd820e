use super::day_type::DayType;
use chrono::{Datelike, Local, NaiveDate, Weekday};
use serde::Serialize;

/// One clock-in/clock-out record. At most one exists per date; the
/// persistence layer replaces a record in place when the same date is
/// submitted again, so `id` stays stable across edits.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WorkRecord {
    pub id: i64,
    pub date: NaiveDate,    // ⇔ work_records.date (TEXT "YYYY-MM-DD")
    pub start: String,      // ⇔ work_records.start_time (TEXT "HH:MM")
    pub end: String,        // ⇔ work_records.end_time (TEXT "HH:MM")
    pub day_type: DayType,  // ⇔ work_records.day_type ('normal' | 'overtime')
    pub note: String,       // ⇔ work_records.note (TEXT, default '')
    pub created_at: String, // ⇔ work_records.created_at (TEXT, ISO8601)
    pub updated_at: String, // ⇔ work_records.updated_at (TEXT, ISO8601)
}

impl WorkRecord {
    /// Build a record that has not been stored yet (`id = 0`).
    pub fn new(date: NaiveDate, start: &str, end: &str, day_type: DayType) -> Self {
        let now = Local::now().to_rfc3339();
        Self {
            id: 0,
            date,
            start: start.to_string(),
            end: end.to_string(),
            day_type,
            note: String::new(),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = note.to_string();
        self
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Saturday or Sunday, taken from the stored date (never the live clock).
    pub fn is_weekend(&self) -> bool {
        matches!(self.date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    pub fn in_month_of(&self, reference: NaiveDate) -> bool {
        self.date.year() == reference.year() && self.date.month() == reference.month()
    }
}
