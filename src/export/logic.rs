// src/export/logic.rs

use crate::core::logic::StreakBoard;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::StreakExport;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the ranked board to `file` (absolute path) as CSV or JSON.
    /// Returns the number of rows written.
    pub fn export(
        board: &StreakBoard,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        if board.is_empty() {
            warning("No habits to export.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        let rows = StreakExport::from_ranked(&board.ranked);

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }
}
