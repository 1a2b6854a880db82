use migralog::core::aggregate::{
    average_severity, location_severity, round1, top_location, trigger_counts, trigger_severity,
    workday_distribution,
};
use migralog::models::location::Location;
use migralog::models::trigger::Trigger;

mod common;
use common::episode;

#[test]
fn test_round1_half_away_from_zero() {
    assert_eq!(round1(1.25), 1.3);
    assert_eq!(round1(2.333), 2.3);
    assert_eq!(round1(4.0), 4.0);
    assert_eq!(round1(1.449), 1.4);
}

#[test]
fn test_average_severity_matches_sum_over_count() {
    let records = vec![
        episode(1, "2024-01-05", 3, &[Trigger::Stress], true, None),
        episode(2, "2024-01-20", 5, &[Trigger::Stress], false, None),
    ];

    assert_eq!(average_severity(&records), Some(4.0));
    assert_eq!(average_severity(&[]), None);

    // always within the severity scale
    let avg = average_severity(&records).unwrap();
    assert!((1.0..=5.0).contains(&avg));
}

#[test]
fn test_trigger_severity_groups_per_trigger() {
    // a record with two triggers contributes to both groups
    let records = vec![
        episode(1, "2024-01-05", 3, &[Trigger::Stress], true, None),
        episode(
            2,
            "2024-01-20",
            5,
            &[Trigger::Stress, Trigger::Heat],
            false,
            None,
        ),
    ];

    let series = trigger_severity(&records);
    assert_eq!(
        series,
        vec![("Stress".to_string(), 4.0), ("Heat".to_string(), 5.0)]
    );
}

#[test]
fn test_trigger_severity_first_seen_order_and_free_text() {
    let records = vec![
        episode(
            1,
            "2024-02-01",
            2,
            &[Trigger::Other("Red wine".to_string())],
            true,
            None,
        ),
        episode(2, "2024-02-02", 4, &[Trigger::Hunger], true, None),
        episode(
            3,
            "2024-02-03",
            4,
            &[Trigger::Other("Red wine".to_string())],
            true,
            None,
        ),
    ];

    let series = trigger_severity(&records);
    assert_eq!(
        series,
        vec![("Red wine".to_string(), 3.0), ("Hunger".to_string(), 4.0)]
    );
}

#[test]
fn test_trigger_severity_empty_input() {
    assert!(trigger_severity(&[]).is_empty());
}

#[test]
fn test_location_severity_unknown_fallback() {
    let records = vec![
        episode(1, "2024-01-05", 3, &[Trigger::Stress], true, None),
        episode(
            2,
            "2024-01-20",
            5,
            &[Trigger::Stress],
            false,
            Some(Location::Right),
        ),
    ];

    let series = location_severity(&records);
    assert_eq!(
        series,
        vec![("Unknown".to_string(), 3.0), ("Right".to_string(), 5.0)]
    );
}

#[test]
fn test_workday_distribution_counts() {
    let records = vec![
        episode(1, "2024-01-05", 3, &[Trigger::Stress], true, None),
        episode(2, "2024-01-06", 3, &[Trigger::Stress], false, None),
        episode(3, "2024-01-07", 3, &[Trigger::Stress], true, None),
    ];

    let split = workday_distribution(&records).unwrap();
    assert_eq!(split.workdays, 2);
    assert_eq!(split.holidays, 1);

    // empty input means "no chart", not a zeroed result
    assert!(workday_distribution(&[]).is_none());
}

#[test]
fn test_trigger_counts_multi_trigger_records() {
    let records = vec![
        episode(1, "2024-01-05", 3, &[Trigger::Stress], true, None),
        episode(
            2,
            "2024-01-20",
            5,
            &[Trigger::Stress, Trigger::Heat],
            false,
            None,
        ),
    ];

    assert_eq!(
        trigger_counts(&records),
        vec![("Stress".to_string(), 2), ("Heat".to_string(), 1)]
    );
}

#[test]
fn test_top_location_ties_break_first_seen() {
    let records = vec![
        episode(1, "2024-01-05", 3, &[Trigger::Stress], true, Some(Location::Eye)),
        episode(2, "2024-01-06", 3, &[Trigger::Stress], true, Some(Location::Left)),
        episode(3, "2024-01-07", 3, &[Trigger::Stress], true, Some(Location::Left)),
        episode(4, "2024-01-08", 3, &[Trigger::Stress], true, Some(Location::Eye)),
    ];

    // Eye and Left are tied at 2; Eye was seen first
    assert_eq!(top_location(&records), "Eye");
    assert_eq!(top_location(&[]), "Unknown");
}
