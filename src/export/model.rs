// src/export/model.rs

use crate::core::logic::RecordSummary;
use serde::Serialize;

/// Flat export row: a stored record plus its computed net hours.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RecordExport {
    pub id: i64,
    pub date: String,
    pub start: String,
    pub end: String,
    pub day_type: String,
    pub net_hours: f64,
    pub note: String,
}

impl From<&RecordSummary> for RecordExport {
    fn from(s: &RecordSummary) -> Self {
        Self {
            id: s.record.id,
            date: s.record.date_str(),
            start: s.record.start.clone(),
            end: s.record.end.clone(),
            day_type: s.record.day_type.code().to_string(),
            // two decimals, as displayed
            net_hours: (s.net_hours * 100.0).round() / 100.0,
            note: s.record.note.clone(),
        }
    }
}

/// CSV header, in field order.
pub(crate) fn get_headers() -> [&'static str; 7] {
    ["id", "date", "start", "end", "day_type", "net_hours", "note"]
}

pub(crate) fn record_to_row(e: &RecordExport) -> [String; 7] {
    [
        e.id.to_string(),
        e.date.clone(),
        e.start.clone(),
        e.end.clone(),
        e.day_type.clone(),
        format!("{:.2}", e.net_hours),
        e.note.clone(),
    ]
}
