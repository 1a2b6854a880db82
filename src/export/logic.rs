// src/export/logic.rs

use crate::core::filter::{Period, filter_records};
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::model::RecordExport;
use crate::export::{ExportFormat, notify_export_success};
use crate::store::RecordStore;
use crate::ui::messages::{info, warning};
use crate::utils::date;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// High-level export logic: raw data rows and composed report/dump texts.
pub struct ExportLogic;

impl ExportLogic {
    /// Export episode rows as CSV or JSON.
    ///
    /// - `file`: absolute path of the output file
    /// - `period`: optional period key, unrecognized values export everything
    pub fn export(
        store: &RecordStore,
        format: ExportFormat,
        file: &str,
        period: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let records = store.load()?;
        let period = Period::from_key(period.as_deref().unwrap_or("all"));
        let filtered = filter_records(&records, period, date::today());

        if filtered.is_empty() {
            warning("⚠️  No episodes found for the selected period.");
            return Ok(());
        }

        let rows: Vec<RecordExport> = filtered.iter().map(RecordExport::from_record).collect();

        info(format!(
            "Exporting {} episodes as {}",
            rows.len(),
            format.as_str()
        ));

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(())
    }

    /// Write an already composed text (report or month dump) to a file.
    /// A directory target gets the suggested report filename appended.
    pub fn write_text(text: &str, file: &str, force: bool) -> AppResult<()> {
        let path = Path::new(file);
        let target = if path.is_dir() {
            path.join(Self::report_filename())
        } else {
            path.to_path_buf()
        };

        ensure_writable(&target, force)?;

        let mut out = File::create(&target)?;
        out.write_all(text.as_bytes())?;

        notify_export_success("Text", &target);
        Ok(())
    }

    /// Suggested filename for a shared report.
    pub fn report_filename() -> String {
        format!(
            "migraine_report_{}.txt",
            chrono::Local::now().timestamp_millis()
        )
    }
}

fn export_json(rows: &[RecordExport], path: &Path) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

fn export_csv(rows: &[RecordExport], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for row in rows {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}
