//! High-level business logic for the `add` command:
//! validate the episode, prepend it to the log, persist the whole list.

use crate::errors::{AppError, AppResult};
use crate::models::attack::AttackRecord;
use crate::models::location::Location;
use crate::models::time_bucket::TimeBucket;
use crate::models::trigger::Trigger;
use crate::store::RecordStore;
use crate::ui::messages::success;
use chrono::NaiveDate;

pub struct AddLogic;

pub const MIN_SEVERITY: u8 = 1;
pub const MAX_SEVERITY: u8 = 5;

impl AddLogic {
    /// Validate and persist a new episode. Nothing is written unless every
    /// required field is present, so a failed add never partially commits.
    #[allow(clippy::too_many_arguments)]
    pub fn apply(
        store: &RecordStore,
        date: NaiveDate,
        time_bucket: Option<TimeBucket>,
        severity: u8,
        triggers: Vec<Trigger>,
        other: Option<String>,
        note: Option<String>,
        is_work_day: Option<bool>,
        pain_location: Option<Location>,
    ) -> AppResult<AttackRecord> {
        if triggers.is_empty() && other.is_none() {
            return Err(AppError::Validation(
                "please select at least one trigger (--trigger) or describe one (--other)".into(),
            ));
        }

        let time_bucket = time_bucket.ok_or_else(|| {
            AppError::Validation("please select the time of onset (--time)".into())
        })?;

        let triggers = resolve_triggers(triggers, other)?;

        if !(MIN_SEVERITY..=MAX_SEVERITY).contains(&severity) {
            return Err(AppError::InvalidSeverity(severity));
        }

        let is_work_day = is_work_day.ok_or_else(|| {
            AppError::Validation(
                "please state whether it was a work day (--workday / --rest-day)".into(),
            )
        })?;

        let pain_location = pain_location.ok_or_else(|| {
            AppError::Validation("please select the pain location (--location)".into())
        })?;

        let mut records = store.load()?;

        let record = AttackRecord {
            id: next_id(&records),
            date,
            time_bucket,
            severity,
            triggers,
            note: note.unwrap_or_default().trim().to_string(),
            is_work_day,
            pain_location: Some(pain_location),
        };

        // the log is kept in reverse chronological insertion order
        records.insert(0, record.clone());
        store.save(&records)?;

        success(format!(
            "Recorded episode {} on {}",
            record.id,
            record.date_str()
        ));
        Ok(record)
    }
}

/// A free-text trigger replaces any tag selection; tags pass through as given.
fn resolve_triggers(tags: Vec<Trigger>, other: Option<String>) -> AppResult<Vec<Trigger>> {
    if let Some(text) = other {
        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(AppError::Validation(
                "please describe the \"other\" trigger".into(),
            ));
        }
        return Ok(vec![Trigger::Other(text)]);
    }

    Ok(tags)
}

/// Millisecond timestamp, bumped past the current maximum so ids stay
/// unique and monotonic even for back-to-back inserts.
fn next_id(records: &[AttackRecord]) -> i64 {
    let now = chrono::Local::now().timestamp_millis();
    let max_existing = records.iter().map(|r| r.id).max().unwrap_or(0);
    now.max(max_existing + 1)
}
