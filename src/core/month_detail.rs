//! Plain-text dump of a single month, one block per episode.

use crate::models::attack::AttackRecord;
use crate::utils::formatting::yes_no;

/// Format every record whose date starts with `month` ("YYYY-MM") as a
/// fixed multi-line block, blocks separated by a blank line.
pub fn export_month(records: &[AttackRecord], month: &str) -> String {
    let mut lines = vec![format!("{} Pain Details:\n", month)];

    let mut index = 0;
    for record in records.iter().filter(|r| r.date_str().starts_with(month)) {
        index += 1;
        lines.push(format!("--- Episode {} ---", index));
        lines.push(format!("Date: {}", record.date_str()));
        lines.push(format!("Time: {}", record.time_bucket.label()));
        lines.push(format!("Severity: {}", record.severity));
        lines.push(format!("Triggers: {}", record.trigger_line()));
        lines.push(format!(
            "Note: {}",
            if record.note.is_empty() {
                "-"
            } else {
                record.note.as_str()
            }
        ));
        lines.push(format!("Work Day: {}", yes_no(record.is_work_day)));
        lines.push(format!("Pain Location: {}", record.location_label()));
        lines.push(String::new());
    }

    lines.join("\n")
}
