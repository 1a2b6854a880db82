//! Deterministic text report for a reporting period.
//!
//! The layout is fixed: previously shared reports must stay compatible,
//! so the literal section text below is never reworded.

use crate::core::aggregate::{average_severity, top_location, trigger_counts};
use crate::core::filter::{Period, filter_records};
use crate::core::monthly::summarize_by_month;
use crate::models::attack::AttackRecord;
use chrono::NaiveDate;

/// Body used when the period contains no records at all.
pub const EMPTY_REPORT: &str = "No migraine records found in the selected date range.";

/// How many entries the "Most Frequent Triggers" line keeps.
const TOP_TRIGGERS: usize = 3;

/// Compose the report for `period`, with `now` as both the window end and
/// the generation date shown in the header.
pub fn compose(records: &[AttackRecord], period: Period, now: NaiveDate) -> String {
    let filtered = filter_records(records, period, now);

    if filtered.is_empty() {
        return EMPTY_REPORT.to_string();
    }

    let total = filtered.len();
    let average = average_severity(&filtered).unwrap_or(0.0);

    let mut counts = trigger_counts(&filtered);
    counts.sort_by(|a, b| b.1.cmp(&a.1)); // stable: equal counts keep first-seen order
    let top_triggers = counts
        .iter()
        .take(TOP_TRIGGERS)
        .map(|(label, n)| format!("{} ({})", label, times(*n)))
        .collect::<Vec<_>>()
        .join(", ");

    let location = top_location(&filtered);

    let breakdown = summarize_by_month(&filtered)
        .iter()
        .map(|(month, summary)| format!("{}: {} episodes", month, summary.count))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "--- Report ({}) ---\n\
         \n\
         Generated: {}\n\
         \n\
         Total Episodes: {}\n\
         Average Severity: {:.1}\n\
         Most Frequent Triggers: {}\n\
         Most Frequent Pain Location: {}\n\
         \n\
         Monthly Breakdown:\n\
         {}\n\
         --- End of Report ---\n",
        period.label(),
        now.format("%Y-%m-%d"),
        total,
        average,
        top_triggers,
        location,
        breakdown,
    )
}

fn times(n: usize) -> String {
    if n == 1 {
        "1 time".to_string()
    } else {
        format!("{} times", n)
    }
}
