//! Time-window filtering over the record snapshot.

use crate::models::attack::AttackRecord;
use chrono::{Months, NaiveDate};
use std::borrow::Cow;

/// Named reporting periods. Unrecognized keys fall back to `All`, so a
/// stale saved key can never break filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Last7Days,
    Last30Days,
    Last3Months,
    Last6Months,
    Last1Year,
    All,
}

impl Period {
    pub fn from_key(key: &str) -> Self {
        match key {
            "last7days" => Period::Last7Days,
            "last30days" => Period::Last30Days,
            "last3months" => Period::Last3Months,
            "last6months" => Period::Last6Months,
            "last1year" => Period::Last1Year,
            _ => Period::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Last7Days => "Last 7 Days",
            Period::Last30Days => "Last 30 Days",
            Period::Last3Months => "Last 3 Months",
            Period::Last6Months => "Last 6 Months",
            Period::Last1Year => "Last 1 Year",
            Period::All => "All Time",
        }
    }

    /// Inclusive window start relative to `now`; `None` means unbounded.
    pub fn window_start(&self, now: NaiveDate) -> Option<NaiveDate> {
        match self {
            Period::Last7Days => Some(now - chrono::Duration::days(7)),
            Period::Last30Days => Some(now - chrono::Duration::days(30)),
            Period::Last3Months => now.checked_sub_months(Months::new(3)),
            Period::Last6Months => now.checked_sub_months(Months::new(6)),
            Period::Last1Year => now.checked_sub_months(Months::new(12)),
            Period::All => None,
        }
    }
}

/// Keep the records whose date falls inside the period window ending at
/// `now`. The comparison is date-only. `All` borrows the input unchanged,
/// order preserved.
pub fn filter_records<'a>(
    records: &'a [AttackRecord],
    period: Period,
    now: NaiveDate,
) -> Cow<'a, [AttackRecord]> {
    match period.window_start(now) {
        None => Cow::Borrowed(records),
        Some(start) => Cow::Owned(
            records
                .iter()
                .filter(|r| r.date >= start)
                .cloned()
                .collect(),
        ),
    }
}
