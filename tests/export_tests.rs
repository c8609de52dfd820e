use predicates::str::contains;
use std::fs;

mod common;
use common::{add, init_db, rwt, setup_test_db, temp_out};

fn seeded_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    init_db(&db_path);
    add(&db_path, "2025-03-03", "09:00", "17:30", "normal");
    add(&db_path, "2025-03-01", "08:00", "20:00", "overtime");
    add(&db_path, "2025-04-02", "09:00", "13:00", "normal");
    db_path
}

#[test]
fn test_export_csv_with_net_hours() {
    let db_path = seeded_db("export_csv");
    let out = temp_out("export_csv", "csv");

    rwt()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("id,date,start,end,day_type,net_hours,note")
    );
    assert!(content.contains("2025-03-03,09:00,17:30,normal,7.00,"));
    assert!(content.contains("2025-03-01,08:00,20:00,overtime,8.00,"));
    assert!(content.contains("2025-04-02,09:00,13:00,normal,3.00,"));
}

#[test]
fn test_export_json_with_range() {
    let db_path = seeded_db("export_json");
    let out = temp_out("export_json", "json");

    rwt()
        .args([
            "--db", &db_path, "--test", "export", "--format", "json", "--file", &out, "--range",
            "2025-03",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read json");
    let rows: Vec<serde_json::Value> = serde_json::from_str(&content).expect("valid json");

    assert_eq!(rows.len(), 2);
    let dates: Vec<&str> = rows.iter().filter_map(|r| r["date"].as_str()).collect();
    assert_eq!(dates, vec!["2025-03-01", "2025-03-03"]);
    assert_eq!(rows[0]["net_hours"].as_f64(), Some(8.0));
    assert_eq!(rows[0]["day_type"].as_str(), Some("overtime"));
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let db_path = seeded_db("export_force");
    let out = temp_out("export_force", "csv");
    fs::write(&out, "stale").expect("seed file");

    rwt()
        .args([
            "--db", &db_path, "--test", "export", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.starts_with("id,date,start,end"));
}

#[test]
fn test_export_rejects_unknown_format() {
    let db_path = seeded_db("export_bad_format");
    let out = temp_out("export_bad_format", "xml");

    rwt()
        .args([
            "--db", &db_path, "--test", "export", "--format", "xml", "--file", &out,
        ])
        .assert()
        .failure();
}
