#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rworktime::models::day_type::DayType;
use rworktime::models::work_record::WorkRecord;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwt() -> Command {
    cargo_bin_cmd!("rworktime")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworktime.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworktime_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Run `init` in test mode against `db_path`
pub fn init_db(db_path: &str) {
    rwt()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add a record through the CLI
pub fn add(db_path: &str, date: &str, start: &str, end: &str, day_type: &str) {
    rwt()
        .args([
            "--db", db_path, "--test", "add", date, start, end, "--type", day_type,
        ])
        .assert()
        .success();
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn record(d: &str, start: &str, end: &str, day_type: DayType) -> WorkRecord {
    WorkRecord::new(date(d), start, end, day_type)
}

pub fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
