//! ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Severity accent used by list and stats views:
/// 1-2 → green, 3 → yellow, 4-5 → red.
pub fn color_for_severity(severity: u8) -> &'static str {
    match severity {
        1 | 2 => GREEN,
        3 => YELLOW,
        _ => RED,
    }
}
