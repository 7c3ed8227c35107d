use callstats::config::Config;
use predicates::str::contains;
use std::fs;

mod common;
use common::{cs, no_config, sample_file};

#[test]
fn test_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.service_level_target_secs, 90.0);
    assert_eq!(cfg.callback_window_hours, 24);
    assert_eq!(cfg.pickup_boundaries, vec![5.0, 10.0, 20.0, 30.0, 60.0]);
    assert_eq!(cfg.abandon_boundaries, vec![35.0, 60.0, 120.0, 300.0]);
    assert!(cfg.internal_extensions.iter().any(|e| e == "Nurse 1"));
    assert_eq!(cfg.site_patterns("LYNEHAM"), Some(vec!["lyneham".to_string()]));
    assert_eq!(cfg.site_patterns("Canberra"), None);
}

#[test]
fn test_missing_file_loads_defaults() {
    let path = no_config("cfg_defaults");
    let cfg = Config::load_from(path.as_ref()).expect("defaults");
    assert_eq!(cfg, Config::default());
}

#[test]
fn test_save_and_load_round_trip_with_partial_file() {
    let path = no_config("cfg_partial");
    fs::write(&path, "service_level_target_secs: 60\nqueues:\n  - Appointments\n").expect("write");

    let cfg = Config::load_from(path.as_ref()).expect("partial config");

    assert_eq!(cfg.service_level_target_secs, 60.0);
    assert_eq!(cfg.queues, vec!["Appointments".to_string()]);
    // everything else keeps its default
    assert_eq!(cfg.callback_window_hours, 24);
}

#[test]
fn test_invalid_yaml_is_a_config_error() {
    let path = no_config("cfg_invalid");
    fs::write(&path, "pickup_boundaries: [five").expect("write");

    let err = Config::load_from(path.as_ref()).expect_err("invalid yaml");
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
fn test_invalid_opening_hours() {
    let mut cfg = Config::default();
    if let Some(h) = cfg.opening_hours.weekday.as_mut() {
        h.open = "7.30".to_string();
    }
    assert!(cfg.opening_hours().is_err());
}

#[test]
fn test_config_init_then_print() {
    let path = no_config("cfg_init");

    cs().args(["config", "--init", "--config", &path])
        .assert()
        .success()
        .stdout(contains("Configuration file written"));

    let written = Config::load_from(path.as_ref()).expect("written config");
    assert_eq!(written, Config::default());

    cs().args(["config", "--init", "--config", &path])
        .assert()
        .success()
        .stdout(contains("already exists"));

    cs().args(["config", "--print", "--config", &path])
        .assert()
        .success()
        .stdout(contains("service_level_target_secs: 90"));
}

#[test]
fn test_config_file_changes_the_analysis() {
    let path = no_config("cfg_analysis");
    let file = sample_file("cfg_analysis");
    fs::write(&path, "internal_extensions: []\n").expect("write");

    // Nurse 1 (g9) is no longer excluded
    cs().args(["summary", "--file", &file, "--config", &path])
        .assert()
        .success()
        .stdout(predicates::str::is_match(r"Total calls\s+6\s").expect("regex"));
}

#[test]
fn test_config_data_file_used_without_flag() {
    let path = no_config("cfg_data_file");
    let file = sample_file("cfg_data_file");
    fs::write(&path, format!("data_file: \"{}\"\n", file.replace('\\', "/"))).expect("write");

    cs().args(["hangups", "--config", &path])
        .assert()
        .success()
        .stdout(contains("Hangup reasons"));
}

#[test]
fn test_callback_window_out_of_range_is_a_config_error() {
    for (name, hours) in [("cfg_window_neg", "-1"), ("cfg_window_huge", "9999999999")] {
        let path = no_config(name);
        fs::write(&path, format!("callback_window_hours: {hours}\n")).expect("write");

        let err = Config::load_from(path.as_ref()).expect_err("window out of range");
        let msg = err.to_string();
        assert!(msg.starts_with("Configuration error"), "{msg}");
        assert!(msg.contains("callback_window_hours"), "{msg}");
    }

    let mut cfg = Config::default();
    cfg.callback_window_hours = 0;
    assert!(cfg.validate().is_err());
    cfg.callback_window_hours = 168;
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_negative_service_level_target_rejected() {
    let mut cfg = Config::default();
    cfg.service_level_target_secs = -5.0;
    assert!(cfg.validate().is_err());
}

#[test]
fn test_bad_window_stops_the_run() {
    let path = no_config("cfg_window_cli");
    let file = sample_file("cfg_window_cli");
    fs::write(&path, "callback_window_hours: -24\n").expect("write");

    cs().args(["summary", "--file", &file, "--config", &path])
        .assert()
        .failure()
        .stderr(contains("callback_window_hours"));
}
