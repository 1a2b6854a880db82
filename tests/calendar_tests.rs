use migralog::core::calendar::{build_calendar, severity_color};
use migralog::models::trigger::Trigger;

mod common;
use common::{date, episode};

#[test]
fn test_duplicate_severities_collapse_to_one_marker() {
    let records = vec![
        episode(1, "2024-06-01", 2, &[Trigger::Stress], true, None),
        episode(2, "2024-06-01", 2, &[Trigger::Heat], false, None),
    ];

    let index = build_calendar(&records);
    let markers = &index[&date("2024-06-01")];
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].severity, 2);
}

#[test]
fn test_distinct_severities_get_one_marker_each() {
    let records = vec![
        episode(1, "2024-06-01", 2, &[Trigger::Stress], true, None),
        episode(2, "2024-06-01", 3, &[Trigger::Heat], false, None),
    ];

    let index = build_calendar(&records);
    let markers = &index[&date("2024-06-01")];
    assert_eq!(markers.len(), 2);

    let severities: Vec<u8> = markers.iter().map(|m| m.severity).collect();
    assert_eq!(severities, vec![2, 3]);
}

#[test]
fn test_marker_colors_follow_severity_table() {
    assert_eq!(severity_color(1), "#A8E063");
    assert_eq!(severity_color(2), "#D4E157");
    assert_eq!(severity_color(3), "#FFEB3B");
    assert_eq!(severity_color(4), "#FFB300");
    assert_eq!(severity_color(5), "#EF5350");
    // out-of-range severities map to the neutral fallback
    assert_eq!(severity_color(0), "#FFFFFF");
    assert_eq!(severity_color(9), "#FFFFFF");

    let records = vec![episode(1, "2024-06-02", 4, &[Trigger::Stress], true, None)];
    let index = build_calendar(&records);
    assert_eq!(index[&date("2024-06-02")][0].color, "#FFB300");
}

#[test]
fn test_calendar_covers_full_history() {
    // the calendar never applies a period filter
    let records = vec![
        episode(1, "1999-01-01", 1, &[Trigger::Unknown], true, None),
        episode(2, "2030-12-31", 5, &[Trigger::Unknown], true, None),
    ];

    let index = build_calendar(&records);
    assert_eq!(index.len(), 2);
}

#[test]
fn test_empty_input_builds_empty_index() {
    assert!(build_calendar(&[]).is_empty());
}
