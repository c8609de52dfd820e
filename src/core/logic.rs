use crate::core::calculator::{compute_dashboard, compute_net_hours, compute_status};
use crate::models::clock_status::ClockStatus;
use crate::models::dashboard::DashboardStats;
use crate::models::settings::Settings;
use crate::models::work_record::WorkRecord;
use crate::utils::time::minutes_of;
use chrono::{NaiveDate, NaiveTime};

/// A record paired with its computed net hours.
#[derive(Debug, Clone)]
pub struct RecordSummary {
    pub record: WorkRecord,
    pub net_hours: f64,
}

pub struct Core;

impl Core {
    pub fn summarize(records: &[WorkRecord], settings: &Settings) -> Vec<RecordSummary> {
        records
            .iter()
            .map(|r| RecordSummary {
                record: r.clone(),
                net_hours: compute_net_hours(r, settings),
            })
            .collect()
    }

    pub fn dashboard(
        records: &[WorkRecord],
        settings: &Settings,
        reference: NaiveDate,
    ) -> DashboardStats {
        compute_dashboard(records, settings, reference)
    }

    pub fn status_at(now: NaiveTime, settings: &Settings) -> ClockStatus {
        compute_status(
            minutes_of(now),
            &settings.required_start,
            &settings.required_end,
        )
    }
}
