use migralog::core::monthly::{day_numbers, summarize_by_month};
use migralog::models::trigger::Trigger;

mod common;
use common::episode;

#[test]
fn test_months_sorted_descending() {
    let records = vec![
        episode(1, "2024-01-10", 2, &[Trigger::Stress], true, None),
        episode(2, "2024-03-05", 3, &[Trigger::Stress], true, None),
        episode(3, "2023-12-24", 4, &[Trigger::Stress], true, None),
    ];

    let months = summarize_by_month(&records);
    let keys: Vec<&str> = months.iter().map(|(m, _)| m.as_str()).collect();
    assert_eq!(keys, vec!["2024-03", "2024-01", "2023-12"]);
}

#[test]
fn test_counts_and_distinct_days() {
    let records = vec![
        episode(1, "2024-06-02", 2, &[Trigger::Stress], true, None),
        episode(2, "2024-06-02", 4, &[Trigger::Heat], true, None),
        episode(3, "2024-06-10", 3, &[Trigger::Stress], true, None),
    ];

    let months = summarize_by_month(&records);
    assert_eq!(months.len(), 1);

    let (month, summary) = &months[0];
    assert_eq!(month, "2024-06");
    assert_eq!(summary.count, 3);
    assert_eq!(summary.days.len(), 2); // two distinct dates
    assert_eq!(summary.records.len(), 3);
}

#[test]
fn test_day_numbers_sort_numerically() {
    // 1, 2, 10 and never the lexicographic 1, 10, 2
    let records = vec![
        episode(1, "2024-06-02", 2, &[Trigger::Stress], true, None),
        episode(2, "2024-06-10", 3, &[Trigger::Stress], true, None),
        episode(3, "2024-06-01", 4, &[Trigger::Stress], true, None),
    ];

    let months = summarize_by_month(&records);
    let (_, summary) = &months[0];
    assert_eq!(day_numbers(summary), vec![1, 2, 10]);
}

#[test]
fn test_empty_input_summarizes_to_nothing() {
    assert!(summarize_by_month(&[]).is_empty());
}
