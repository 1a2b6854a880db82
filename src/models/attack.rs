use super::{location::Location, time_bucket::TimeBucket, trigger::Trigger};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single recorded pain episode. Immutable once created: episodes are
/// only ever added (prepended, newest first) or deleted by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackRecord {
    pub id: i64,                // creation timestamp in ms, unique
    pub date: NaiveDate,        // "YYYY-MM-DD", user-selected
    pub time_bucket: TimeBucket,
    pub severity: u8,           // 1..=5
    pub triggers: Vec<Trigger>, // at least one entry
    #[serde(default)]
    pub note: String,
    pub is_work_day: bool,
    // required at save time; legacy store content may lack it
    #[serde(default)]
    pub pain_location: Option<Location>,
}

impl AttackRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Month key used by the monthly grouping ("YYYY-MM").
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    /// Trigger labels joined for display ("Stress, Heat").
    pub fn trigger_line(&self) -> String {
        self.triggers
            .iter()
            .map(|t| t.label())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn location_label(&self) -> &str {
        self.pain_location.map(|l| l.label()).unwrap_or("-")
    }
}
