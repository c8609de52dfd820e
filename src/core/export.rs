use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_records;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::{ExportFormat, RecordExport, notify_export_success};
use crate::models::settings::Settings;
use crate::ui::messages::warning;
use crate::utils::date::resolve_period;
use crate::utils::path::expand_tilde;

pub struct ExportLogic;

impl ExportLogic {
    /// Export records with their net hours.
    ///
    /// - `file`: output path (`~/` is expanded)
    /// - `range`: `None` or `"all"` exports everything; otherwise the same
    ///   period syntax as `list --period`.
    pub fn export(
        pool: &mut DbPool,
        settings: &Settings,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        if path.is_dir() {
            return Err(AppError::Export(format!(
                "'{}' is a directory",
                path.display()
            )));
        }

        let bounds = match range {
            None => None,
            Some(r) => resolve_period(Some(r)).map_err(AppError::InvalidDate)?,
        };

        let records = load_records(&pool.conn, bounds)?;
        if records.is_empty() {
            warning("No records to export for the selected range.");
        }

        let rows: Vec<RecordExport> = Core::summarize(&records, settings)
            .iter()
            .map(RecordExport::from)
            .collect();

        ensure_writable(&path, force)?;
        format.write(&path, &rows)?;

        notify_export_success(&format.as_str().to_uppercase(), &path);
        Ok(rows.len())
    }
}
