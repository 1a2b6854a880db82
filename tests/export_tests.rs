use predicates::str::contains;

mod common;
use common::{mig, setup_test_store, temp_out};

fn add_sample(store_path: &str, day: &str, severity: &str) {
    mig()
        .args([
            "--store",
            store_path,
            "add",
            day,
            "--time",
            "m",
            "--severity",
            severity,
            "--trigger",
            "stress",
            "--workday",
            "--location",
            "R",
        ])
        .assert()
        .success();
}

#[test]
fn test_export_csv() {
    let store_path = setup_test_store("export_csv");
    add_sample(&store_path, "2025-06-01", "3");
    add_sample(&store_path, "2025-06-02", "5");

    let out = temp_out("export_csv", "csv");

    mig()
        .args([
            "--store",
            &store_path,
            "export",
            "--format",
            "csv",
            "--file",
            &out,
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = std::fs::read_to_string(&out).expect("csv output");
    assert!(content.contains("id,date,time_bucket,severity,triggers"));
    assert!(content.contains("2025-06-01"));
    assert!(content.contains("Stress"));
}

#[test]
fn test_export_json() {
    let store_path = setup_test_store("export_json");
    add_sample(&store_path, "2025-06-03", "2");

    let out = temp_out("export_json", "json");

    mig()
        .args([
            "--store",
            &store_path,
            "export",
            "--format",
            "json",
            "--file",
            &out,
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = std::fs::read_to_string(&out).expect("json output");
    assert!(content.contains("\"date\": \"2025-06-03\""));
    assert!(content.contains("\"pain_location\": \"Right\""));
}

#[test]
fn test_export_requires_absolute_path() {
    let store_path = setup_test_store("export_relative");
    add_sample(&store_path, "2025-06-04", "2");

    mig()
        .args([
            "--store",
            &store_path,
            "export",
            "--format",
            "csv",
            "--file",
            "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_empty_period_warns_and_writes_nothing() {
    let store_path = setup_test_store("export_empty");
    add_sample(&store_path, "2020-01-01", "2");

    let out = temp_out("export_empty", "csv");

    mig()
        .args([
            "--store",
            &store_path,
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "--period",
            "last7days",
        ])
        .assert()
        .success()
        .stdout(contains("No episodes found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let store_path = setup_test_store("export_force");
    add_sample(&store_path, "2025-06-05", "4");

    let out = temp_out("export_force", "csv");
    std::fs::write(&out, "stale").unwrap();

    mig()
        .args([
            "--store",
            &store_path,
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "--force",
        ])
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).expect("csv output");
    assert!(content.contains("2025-06-05"));
}

#[test]
fn test_report_written_to_file() {
    let store_path = setup_test_store("report_file");
    add_sample(&store_path, "2025-06-06", "3");

    let out = temp_out("report_file", "txt");

    mig()
        .args([
            "--store",
            &store_path,
            "report",
            "--period",
            "all",
            "--file",
            &out,
            "--force",
        ])
        .assert()
        .success()
        .stdout(contains("Text export completed"));

    let content = std::fs::read_to_string(&out).expect("report output");
    assert!(content.starts_with("--- Report (All Time) ---"));
    assert!(content.ends_with("--- End of Report ---\n"));
}

#[test]
fn test_month_dump_written_to_file() {
    let store_path = setup_test_store("month_file");
    add_sample(&store_path, "2025-06-07", "3");

    let out = temp_out("month_file", "txt");

    mig()
        .args([
            "--store",
            &store_path,
            "month",
            "2025-06",
            "--file",
            &out,
            "--force",
        ])
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).expect("month output");
    assert!(content.starts_with("2025-06 Pain Details:"));
    assert!(content.contains("--- Episode 1 ---"));
}
