use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_record_by_date, get_record_by_date};
use crate::errors::{AppError, AppResult};
use crate::models::work_record::WorkRecord;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove the record for `date`, returning what was deleted.
    pub fn apply(pool: &mut DbPool, date: NaiveDate) -> AppResult<WorkRecord> {
        let date_str = date.format("%Y-%m-%d").to_string();

        let record = get_record_by_date(&pool.conn, &date)?
            .ok_or_else(|| AppError::RecordNotFound(date_str.clone()))?;

        delete_record_by_date(&pool.conn, &date)?;

        ttlog_or_warn(
            &pool.conn,
            "del",
            &date_str,
            &format!(
                "Deleted record #{}: {}-{} ({})",
                record.id, record.start, record.end, record.day_type
            ),
        );

        Ok(record)
    }
}
