// src/export/mod.rs

mod csv_writer;
pub(crate) mod fs_utils;
mod json_writer;
mod model;

pub use model::RecordExport;

use crate::errors::AppResult;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn write(&self, path: &Path, rows: &[RecordExport]) -> AppResult<()> {
        match self {
            ExportFormat::Csv => csv_writer::write_csv(path, rows),
            ExportFormat::Json => json_writer::write_json(path, rows),
        }
    }
}
