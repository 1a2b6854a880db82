//! Pure derivations over a record snapshot.
//!
//! Every function takes the snapshot by shared reference, never mutates it,
//! and returns an explicit empty result for empty input. Group ordering is
//! always first-seen scan order.

use crate::models::attack::AttackRecord;

/// Substitute label for records that predate the pain-location field.
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// Two-category workday split used by the distribution chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkdaySplit {
    pub workdays: usize,
    pub holidays: usize,
}

/// Round to one decimal place, half away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Average severity over the whole set, one decimal. `None` for an empty set.
pub fn average_severity(records: &[AttackRecord]) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    let total: u32 = records.iter().map(|r| u32::from(r.severity)).sum();
    Some(round1(f64::from(total) / records.len() as f64))
}

/// Mean severity per trigger label. A record with N triggers contributes
/// to N groups.
pub fn trigger_severity(records: &[AttackRecord]) -> Vec<(String, f64)> {
    let mut groups: Vec<(String, u32, u32)> = Vec::new(); // label, sum, count

    for record in records {
        for trigger in &record.triggers {
            let label = trigger.label();
            match groups.iter_mut().find(|(l, _, _)| l.as_str() == label) {
                Some((_, sum, count)) => {
                    *sum += u32::from(record.severity);
                    *count += 1;
                }
                None => groups.push((label.to_string(), u32::from(record.severity), 1)),
            }
        }
    }

    groups
        .into_iter()
        .map(|(label, sum, count)| (label, round1(f64::from(sum) / f64::from(count))))
        .collect()
}

/// Mean severity per pain location label, absent locations grouped under
/// [`UNKNOWN_LOCATION`].
pub fn location_severity(records: &[AttackRecord]) -> Vec<(String, f64)> {
    let mut groups: Vec<(String, u32, u32)> = Vec::new();

    for record in records {
        let label = record
            .pain_location
            .map(|loc| loc.label())
            .unwrap_or(UNKNOWN_LOCATION);
        match groups.iter_mut().find(|(l, _, _)| l.as_str() == label) {
            Some((_, sum, count)) => {
                *sum += u32::from(record.severity);
                *count += 1;
            }
            None => groups.push((label.to_string(), u32::from(record.severity), 1)),
        }
    }

    groups
        .into_iter()
        .map(|(label, sum, count)| (label, round1(f64::from(sum) / f64::from(count))))
        .collect()
}

/// Workday vs non-workday counts; `None` when there is nothing to chart.
pub fn workday_distribution(records: &[AttackRecord]) -> Option<WorkdaySplit> {
    if records.is_empty() {
        return None;
    }
    let workdays = records.iter().filter(|r| r.is_work_day).count();
    Some(WorkdaySplit {
        workdays,
        holidays: records.len() - workdays,
    })
}

/// How often each trigger label occurs, first-seen order.
pub fn trigger_counts(records: &[AttackRecord]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for record in records {
        for trigger in &record.triggers {
            let label = trigger.label();
            match counts.iter_mut().find(|(l, _)| l.as_str() == label) {
                Some((_, n)) => *n += 1,
                None => counts.push((label.to_string(), 1)),
            }
        }
    }

    counts
}

/// The single most frequent pain location label. Ties break toward the
/// label seen first; absent locations count as [`UNKNOWN_LOCATION`].
pub fn top_location(records: &[AttackRecord]) -> String {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for record in records {
        let label = record
            .pain_location
            .map(|loc| loc.label())
            .unwrap_or(UNKNOWN_LOCATION);
        match counts.iter_mut().find(|(l, _)| l.as_str() == label) {
            Some((_, n)) => *n += 1,
            None => counts.push((label.to_string(), 1)),
        }
    }

    // stable sort: equal counts keep first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .next()
        .map(|(label, _)| label)
        .unwrap_or_else(|| UNKNOWN_LOCATION.to_string())
}
