#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use migralog::models::attack::AttackRecord;
use migralog::models::location::Location;
use migralog::models::time_bucket::TimeBucket;
use migralog::models::trigger::Trigger;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn mig() -> Command {
    cargo_bin_cmd!("migralog")
}

/// Create a unique test store path inside the system temp dir and remove any
/// existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_migralog.json", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Build an in-memory episode for direct-call tests.
pub fn episode(
    id: i64,
    day: &str,
    severity: u8,
    triggers: &[Trigger],
    is_work_day: bool,
    pain_location: Option<Location>,
) -> AttackRecord {
    AttackRecord {
        id,
        date: date(day),
        time_bucket: TimeBucket::Morning,
        severity,
        triggers: triggers.to_vec(),
        note: String::new(),
        is_work_day,
        pain_location,
    }
}
