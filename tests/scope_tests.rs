use callstats::config::Config;
use callstats::core::analysis::{Analysis, ScopeOptions};
use callstats::loader::{QueueMap, parse_records};
use callstats::models::{CallRecord, Direction};
use callstats::query::{QueueFilter, Scope};
use chrono::NaiveDate;

mod common;
use common::{at, call, inbound, sample_csv};

fn sample() -> Vec<CallRecord> {
    parse_records(sample_csv().as_bytes(), &QueueMap::new()).expect("sample")
}

fn guids(records: &[&CallRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.call_guid.clone().unwrap_or_default())
        .collect()
}

fn default_scope() -> Scope {
    ScopeOptions::default().scope(&Config::default()).expect("scope")
}

#[test]
fn test_opening_hours_boundaries_inclusive() {
    let hours = Config::default().opening_hours().expect("hours");

    // Monday 2026-01-12
    assert!(hours.is_open(at("2026-01-12 07:30")));
    assert!(!hours.is_open(at("2026-01-12 07:29")));
    assert!(hours.is_open(at("2026-01-12 17:30")));
    assert!(!hours.is_open(at("2026-01-12 17:31")));

    // Saturday and Sunday
    assert!(hours.is_open(at("2026-01-17 12:30")));
    assert!(!hours.is_open(at("2026-01-17 12:31")));
    assert!(!hours.is_open(at("2026-01-18 10:00")));
}

#[test]
fn test_seconds_are_ignored_at_closing_time() {
    let hours = Config::default().opening_hours().expect("hours");
    let late = NaiveDate::from_ymd_opt(2026, 1, 12)
        .and_then(|d| d.and_hms_opt(17, 30, 59))
        .expect("timestamp");

    assert!(hours.is_open(late));
}

#[test]
fn test_public_holidays_are_closed() {
    let cfg = Config::default();
    let hours = cfg.opening_hours().expect("hours");

    // Australia Day 2026 is a Monday
    assert!(!hours.is_open(at("2026-01-26 10:00")));

    let mut keep_holidays = cfg.clone();
    keep_holidays.exclude_public_holidays = false;
    let hours = keep_holidays.opening_hours().expect("hours");
    assert!(hours.is_open(at("2026-01-26 10:00")));
}

#[test]
fn test_default_scope_on_sample() {
    let records = sample();
    let scope = default_scope();

    let scoped = scope.apply(&records);

    assert_eq!(guids(&scoped), vec!["g1", "g2", "g3", "g4", "g6", "g10"]);
    assert_eq!(scope.out_of_hours(&records), 2);
}

#[test]
fn test_unrestricted_scope_keeps_everything() {
    let records = sample();

    let scope = Scope::unrestricted();

    assert_eq!(scope.apply(&records).len(), records.len());
    assert_eq!(scope.out_of_hours(&records), 0);
}

#[test]
fn test_all_hours_and_include_internal() {
    let records = sample();
    let cfg = Config::default();

    let opts = ScopeOptions {
        all_hours: true,
        ..Default::default()
    };
    let scoped = opts.scope(&cfg).expect("scope").apply(&records).len();
    assert_eq!(scoped, 8);

    let opts = ScopeOptions {
        all_hours: true,
        include_internal: true,
        ..Default::default()
    };
    let scoped = opts.scope(&cfg).expect("scope").apply(&records).len();
    assert_eq!(scoped, 9);
}

#[test]
fn test_internal_extension_match_is_case_insensitive() {
    let mut r = inbound("2026-01-12 10:00", Some(3.0));
    r.user_name = Some("nurse 1".to_string());
    let records = vec![r, inbound("2026-01-12 10:05", Some(3.0))];

    let scoped = default_scope().apply(&records);

    assert_eq!(scoped.len(), 1);
    assert_eq!(scoped[0].user_name, None);
}

#[test]
fn test_period_filter() {
    let records = sample();
    let cfg = Config::default();

    let opts = ScopeOptions {
        period: Some("2026-01-13:2026-01-15".to_string()),
        ..Default::default()
    };
    let scope = opts.scope(&cfg).expect("scope");

    assert_eq!(guids(&scope.apply(&records)), vec!["g3", "g4", "g10"]);
    // g8 (18:00 on the 14th) is the only out-of-hours call in the period
    assert_eq!(scope.out_of_hours(&records), 1);
}

#[test]
fn test_location_by_site_name_or_pattern() {
    let records = sample();
    let cfg = Config::default();

    let by_site = ScopeOptions {
        location: Some("denman".to_string()),
        ..Default::default()
    };
    assert_eq!(guids(&by_site.scope(&cfg).expect("scope").apply(&records)), vec!["g6", "g10"]);

    let by_pattern = ScopeOptions {
        location: Some("Lyneham - Main".to_string()),
        ..Default::default()
    };
    assert_eq!(guids(&by_pattern.scope(&cfg).expect("scope").apply(&records)), vec!["g3", "g4"]);
}

#[test]
fn test_queue_filter() {
    let mut queued = inbound("2026-01-12 10:00", Some(3.0));
    queued.queue_name = Some("Appointments".to_string());
    let unqueued = inbound("2026-01-12 10:05", Some(3.0));
    let outbound = call(Direction::Outbound, "2026-01-12 10:10", None, 30.0);
    let records = vec![queued, unqueued, outbound];

    let named = Scope {
        queue: Some(QueueFilter::parse("Appointments")),
        ..Scope::unrestricted()
    };
    let none = Scope {
        queue: Some(QueueFilter::parse("none")),
        ..Scope::unrestricted()
    };

    assert_eq!(named.apply(&records).len(), 1);
    let no_queue = none.apply(&records);
    assert_eq!(no_queue.len(), 1);
    assert!(no_queue[0].direction.is_inbound());
}

#[test]
fn test_invalid_period_is_rejected() {
    let opts = ScopeOptions {
        period: Some("2026-02:2026-01".to_string()),
        ..Default::default()
    };
    assert!(opts.scope(&Config::default()).is_err());
}

#[test]
fn test_analysis_from_records() {
    let analysis = Analysis::from_records(sample(), default_scope(), Config::default());

    assert_eq!(analysis.records.len(), 9);
    assert_eq!(analysis.scoped().len(), 6);
    assert_eq!(analysis.out_of_hours(), 2);
}
