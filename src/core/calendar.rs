//! Calendar index: date → one marker per distinct severity seen that day.

use crate::models::attack::AttackRecord;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Marker colors, one per severity step.
const SEVERITY_COLORS: [(u8, &str); 5] = [
    (1, "#A8E063"),
    (2, "#D4E157"),
    (3, "#FFEB3B"),
    (4, "#FFB300"),
    (5, "#EF5350"),
];

/// Neutral fallback for severities outside the table.
const FALLBACK_COLOR: &str = "#FFFFFF";

pub fn severity_color(severity: u8) -> &'static str {
    SEVERITY_COLORS
        .iter()
        .find(|(s, _)| *s == severity)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}

/// One calendar dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayMarker {
    pub severity: u8,
    pub color: &'static str,
}

/// Build the date → markers index over the FULL record list (the calendar
/// ignores period filters). Duplicate severities on the same date collapse
/// to a single marker; marker order is first-seen scan order.
///
/// Always a full rebuild; the in-memory log is small.
pub fn build_calendar(records: &[AttackRecord]) -> BTreeMap<NaiveDate, Vec<DayMarker>> {
    let mut index: BTreeMap<NaiveDate, Vec<DayMarker>> = BTreeMap::new();

    for record in records {
        let markers = index.entry(record.date).or_default();
        if !markers.iter().any(|m| m.severity == record.severity) {
            markers.push(DayMarker {
                severity: record.severity,
                color: severity_color(record.severity),
            });
        }
    }

    index
}
