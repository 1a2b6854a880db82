// src/export/model.rs

use crate::models::attack::AttackRecord;
use serde::Serialize;

/// Flat row used by the CSV/JSON data exports.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub id: i64,
    pub date: String,
    pub time_bucket: String,
    pub severity: u8,
    pub triggers: String,
    pub note: String,
    pub is_work_day: bool,
    pub pain_location: String,
}

impl RecordExport {
    pub fn from_record(record: &AttackRecord) -> Self {
        Self {
            id: record.id,
            date: record.date_str(),
            time_bucket: record.time_bucket.label().to_string(),
            severity: record.severity,
            triggers: record
                .triggers
                .iter()
                .map(|t| t.label())
                .collect::<Vec<_>>()
                .join("; "),
            note: record.note.clone(),
            is_work_day: record.is_work_day,
            pain_location: record
                .pain_location
                .map(|l| l.label().to_string())
                .unwrap_or_default(),
        }
    }
}
