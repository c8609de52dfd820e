use super::model::{RecordExport, get_headers, record_to_row};
use crate::errors::AppResult;
use csv::Writer;
use std::path::Path;

/// Write records as CSV to `path`.
pub fn write_csv(path: &Path, rows: &[RecordExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;

    for r in rows {
        wtr.write_record(record_to_row(r))?;
    }

    wtr.flush()?;
    Ok(())
}
