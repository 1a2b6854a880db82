//! Month grouping for the summary screen and the report breakdown.

use crate::models::attack::AttackRecord;
use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeMap, BTreeSet};

/// Everything the summary view needs for one month.
#[derive(Debug, Clone, Default)]
pub struct MonthSummary {
    pub count: usize,
    pub days: BTreeSet<NaiveDate>,
    pub records: Vec<AttackRecord>,
}

/// Group records by "YYYY-MM", newest month first. Zero-padded keys sort
/// lexicographically the same as chronologically.
pub fn summarize_by_month(records: &[AttackRecord]) -> Vec<(String, MonthSummary)> {
    let mut months: BTreeMap<String, MonthSummary> = BTreeMap::new();

    for record in records {
        let entry = months.entry(record.month_key()).or_default();
        entry.count += 1;
        entry.days.insert(record.date);
        entry.records.push(record.clone());
    }

    months.into_iter().rev().collect()
}

/// Day-of-month values for a month's distinct dates, ascending.
/// Days are compared as numbers, so 10 sorts after 2.
pub fn day_numbers(summary: &MonthSummary) -> Vec<u32> {
    summary.days.iter().map(|d| d.day()).collect()
}
