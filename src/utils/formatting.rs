//! Formatting utilities used for CLI and export outputs.

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Text bar for severity averages (0.0..=5.0), one block per point.
pub fn bar(value: f64) -> String {
    let blocks = value.round().clamp(0.0, 5.0) as usize;
    "█".repeat(blocks)
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}
