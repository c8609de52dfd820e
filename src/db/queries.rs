use crate::errors::{AppError, AppResult};
use crate::models::day_type::DayType;
use crate::models::work_record::WorkRecord;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_RECORDS: &str = "SELECT id, date, start_time, end_time, day_type, note, created_at, updated_at
     FROM work_records";

/// Outcome of an upsert: a fresh row or an in-place replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted(i64),
    Replaced(i64),
}

impl UpsertOutcome {
    pub fn id(&self) -> i64 {
        match self {
            UpsertOutcome::Inserted(id) | UpsertOutcome::Replaced(id) => *id,
        }
    }
}

pub fn map_row(row: &Row) -> Result<WorkRecord> {
    let date_str: String = row.get("date")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let kind_str: String = row.get("day_type")?;
    let day_type = DayType::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDayType(kind_str.clone())),
        )
    })?;

    // start/end stay as stored text: the calculator degrades bad values to zero
    Ok(WorkRecord {
        id: row.get("id")?,
        date,
        start: row.get::<_, Option<String>>("start_time")?.unwrap_or_default(),
        end: row.get::<_, Option<String>>("end_time")?.unwrap_or_default(),
        day_type,
        note: row.get::<_, Option<String>>("note")?.unwrap_or_default(),
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

/// Insert a record, or replace the one already stored for the same date.
///
/// A replacement keeps the original `id` and `created_at`.
pub fn upsert_record(conn: &Connection, rec: &WorkRecord) -> AppResult<UpsertOutcome> {
    let date_str = rec.date_str();
    let now = Local::now().to_rfc3339();

    let existing: Option<i64> = conn
        .query_row(
            "SELECT id FROM work_records WHERE date = ?1",
            [&date_str],
            |row| row.get(0),
        )
        .optional()?;

    if let Some(id) = existing {
        conn.execute(
            "UPDATE work_records
             SET start_time = ?1, end_time = ?2, day_type = ?3, note = ?4, updated_at = ?5
             WHERE id = ?6",
            params![
                rec.start,
                rec.end,
                rec.day_type.to_db_str(),
                rec.note,
                now,
                id
            ],
        )?;
        return Ok(UpsertOutcome::Replaced(id));
    }

    conn.execute(
        "INSERT INTO work_records (date, start_time, end_time, day_type, note, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            date_str,
            rec.start,
            rec.end,
            rec.day_type.to_db_str(),
            rec.note,
            rec.created_at,
            now,
        ],
    )?;
    Ok(UpsertOutcome::Inserted(conn.last_insert_rowid()))
}

pub fn load_all_records(conn: &Connection) -> AppResult<Vec<WorkRecord>> {
    let sql = format!("{SELECT_RECORDS} ORDER BY date ASC");
    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Records with `from <= date <= to`, ordered by date.
pub fn load_records_in_range(
    conn: &Connection,
    from: &NaiveDate,
    to: &NaiveDate,
) -> AppResult<Vec<WorkRecord>> {
    let sql = format!("{SELECT_RECORDS} WHERE date >= ?1 AND date <= ?2 ORDER BY date ASC");
    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt.query_map(
        params![
            from.format("%Y-%m-%d").to_string(),
            to.format("%Y-%m-%d").to_string()
        ],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// `None` bounds load the whole archive.
pub fn load_records(
    conn: &Connection,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<WorkRecord>> {
    match bounds {
        Some((from, to)) => load_records_in_range(conn, &from, &to),
        None => load_all_records(conn),
    }
}

pub fn get_record_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<Option<WorkRecord>> {
    let sql = format!("{SELECT_RECORDS} WHERE date = ?1");
    let mut stmt = conn.prepare_cached(&sql)?;
    let rec = stmt
        .query_row([date.format("%Y-%m-%d").to_string()], map_row)
        .optional()?;
    Ok(rec)
}

/// Delete the record for a date. Returns number of rows deleted.
pub fn delete_record_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM work_records WHERE date = ?1",
        params![date.format("%Y-%m-%d").to_string()],
    )?;
    Ok(n)
}
