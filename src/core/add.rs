use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{UpsertOutcome, upsert_record};
use crate::errors::AppResult;
use crate::models::work_record::WorkRecord;
use crate::ui::messages::{success, warning};
use crate::utils::time::to_minutes;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Store `record`, replacing any record already present for its date.
    pub fn apply(pool: &mut DbPool, record: &WorkRecord) -> AppResult<UpsertOutcome> {
        let date_str = record.date_str();

        // Inverted times are stored as-is; they count as zero hours.
        if let (Some(s), Some(e)) = (to_minutes(&record.start), to_minutes(&record.end))
            && e <= s
        {
            warning(format!(
                "End {} is not after start {}: {} will count as 0 hours.",
                record.end, record.start, date_str
            ));
        }

        let outcome = upsert_record(&pool.conn, record)?;

        let summary = format!(
            "{} {}-{} ({})",
            date_str, record.start, record.end, record.day_type
        );

        match outcome {
            UpsertOutcome::Inserted(id) => {
                ttlog_or_warn(
                    &pool.conn,
                    "add",
                    &date_str,
                    &format!("Added record #{id}: {summary}"),
                );
                success(format!("Added record for {}.", summary));
            }
            UpsertOutcome::Replaced(id) => {
                ttlog_or_warn(
                    &pool.conn,
                    "edit",
                    &date_str,
                    &format!("Replaced record #{id}: {summary}"),
                );
                success(format!("Replaced record for {}.", summary));
            }
        }

        Ok(outcome)
    }
}
