use rworktime::config::Config;
use rworktime::models::settings::{BreakWindow, Settings};

#[test]
fn test_default_settings() {
    let s = Settings::default();
    assert_eq!(s.lunch, BreakWindow::new("12:00", "13:30"));
    assert_eq!(s.dinner, BreakWindow::new("17:30", "18:00"));
    assert_eq!(s.overtime_lunch, BreakWindow::new("12:00", "13:30"));
    assert_eq!(s.required_start, "09:00");
    assert_eq!(s.required_end, "17:30");
    assert_eq!(s.required_daily_hours, 8.0);
}

#[test]
fn test_partial_yaml_falls_back_to_defaults() {
    let cfg = Config::from_yaml(
        r#"
database: /tmp/custom.sqlite
settings:
  dinner:
    start: "19:00"
    end: "19:45"
  required_daily_hours: 7.5
"#,
    )
    .expect("parse");

    assert_eq!(cfg.database, "/tmp/custom.sqlite");
    assert_eq!(cfg.settings.dinner, BreakWindow::new("19:00", "19:45"));
    assert_eq!(cfg.settings.lunch, BreakWindow::new("12:00", "13:30"));
    assert_eq!(cfg.settings.required_end, "17:30");
    assert_eq!(cfg.settings.required_daily_hours, 7.5);
}

#[test]
fn test_invalid_yaml_is_a_config_error() {
    let err = Config::from_yaml("settings: 42").expect_err("must fail");
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
fn test_saved_yaml_loads_back() {
    let mut cfg = Config::default();
    cfg.set_setting("overtime_lunch_end", "13:00").expect("set");

    let loaded = Config::from_yaml(&cfg.to_yaml().expect("yaml")).expect("parse");
    assert_eq!(loaded.settings, cfg.settings);
}

#[test]
fn test_set_setting_updates_each_key() {
    let mut cfg = Config::default();

    cfg.set_setting("lunch_start", "12:30").expect("lunch_start");
    cfg.set_setting("lunch_end", "13:15").expect("lunch_end");
    cfg.set_setting("dinner_start", "19:00").expect("dinner_start");
    cfg.set_setting("dinner_end", "19:30").expect("dinner_end");
    cfg.set_setting("overtime_lunch_start", "11:45").expect("ot start");
    cfg.set_setting("overtime_lunch_end", "12:15").expect("ot end");
    cfg.set_setting("required_start", "8:30").expect("required_start");
    cfg.set_setting("required_end", "17:00").expect("required_end");
    cfg.set_setting("required_daily_hours", "7.5").expect("hours");

    let s = &cfg.settings;
    assert_eq!(s.lunch, BreakWindow::new("12:30", "13:15"));
    assert_eq!(s.dinner, BreakWindow::new("19:00", "19:30"));
    assert_eq!(s.overtime_lunch, BreakWindow::new("11:45", "12:15"));
    // normalized to HH:MM
    assert_eq!(s.required_start, "08:30");
    assert_eq!(s.required_end, "17:00");
    assert_eq!(s.required_daily_hours, 7.5);
}

#[test]
fn test_set_setting_rejects_bad_values() {
    let mut cfg = Config::default();

    assert!(cfg.set_setting("lunch_start", "25:00").is_err());
    assert!(cfg.set_setting("required_daily_hours", "-1").is_err());
    assert!(cfg.set_setting("required_daily_hours", "NaN").is_err());
    assert!(cfg.set_setting("nap", "13:00").is_err());

    assert_eq!(cfg.settings, Settings::default());
}

#[test]
fn test_resolve_db_path_keeps_absolute_and_anchors_relative() {
    let abs = std::env::temp_dir().join("abs_rworktime.sqlite");
    let abs = abs.to_string_lossy().to_string();
    assert_eq!(Config::resolve_db_path(&abs), abs);

    let rel = Config::resolve_db_path("rel.sqlite");
    assert_eq!(
        rel,
        Config::config_dir()
            .join("rel.sqlite")
            .to_string_lossy()
            .to_string()
    );
}
