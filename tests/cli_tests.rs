use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, is_match};

mod common;
use common::{cs, no_config, queue_file, sample_file};

fn row(pattern: &str) -> predicates::str::RegexPredicate {
    is_match(pattern).expect("valid regex")
}

#[test]
fn test_summary_default_scope() {
    let file = sample_file("cli_summary");
    let cfg = no_config("cli_summary");

    cs().args(["summary", "--file", &file, "--config", &cfg])
        .assert()
        .success()
        .stdout(contains("=== Summary ==="))
        .stdout(row(r"Total calls\s+5\s"))
        .stdout(row(r"Answered\s+4\s"))
        .stdout(row(r"Out of hours \(inbound\)\s+2\s"))
        .stdout(row(r"Callback rate\s+33\.3%"));
}

#[test]
fn test_summary_all_hours_include_internal() {
    let file = sample_file("cli_summary_all");
    let cfg = no_config("cli_summary_all");

    cs().args([
        "summary",
        "--file",
        &file,
        "--config",
        &cfg,
        "--all-hours",
        "--include-internal",
    ])
    .assert()
    .success()
    .stdout(row(r"Total calls\s+8\s"))
    .stdout(row(r"Out of hours \(inbound\)\s+0\s"));
}

#[test]
fn test_summary_with_period() {
    let file = sample_file("cli_summary_period");
    let cfg = no_config("cli_summary_period");

    cs().args(["summary", "--file", &file, "--config", &cfg, "--period", "2026-01-13"])
        .assert()
        .success()
        .stdout(row(r"Total calls\s+1\s"));
}

#[test]
fn test_pickup_distribution() {
    let file = sample_file("cli_pickup");
    let cfg = no_config("cli_pickup");

    cs().args(["pickup", "--file", &file, "--config", &cfg])
        .assert()
        .success()
        .stdout(row(r"Answered calls\s+4\s"))
        .stdout(row(r"Fastest pickup\s+3s"))
        .stdout(contains("=== Fastest pickups ==="))
        .stdout(row(r"(?m)^<5\s+1\s"))
        .stdout(row(r"(?m)^20-30\s+1\s"))
        .stdout(row(r"(?m)^>=60\s+0\s"));
}

#[test]
fn test_pickup_custom_boundaries() {
    let file = sample_file("cli_pickup_custom");
    let cfg = no_config("cli_pickup_custom");

    cs().args(["pickup", "--file", &file, "--config", &cfg, "--boundaries", "10"])
        .assert()
        .success()
        .stdout(row(r"(?m)^<10\s+2\s"))
        .stdout(row(r"(?m)^>=10\s+2\s"));
}

#[test]
fn test_pickup_rejects_decreasing_boundaries() {
    let file = sample_file("cli_pickup_bad");
    let cfg = no_config("cli_pickup_bad");

    cs().args(["pickup", "--file", &file, "--config", &cfg, "--boundaries", "10,5"])
        .assert()
        .failure()
        .stderr(contains("Invalid histogram boundaries"));
}

#[test]
fn test_repeats() {
    let file = sample_file("cli_repeats");
    let cfg = no_config("cli_repeats");

    cs().args(["repeats", "--file", &file, "--config", &cfg])
        .assert()
        .success()
        .stdout(row(r"Unique callers\s+3\s"))
        .stdout(row(r"0412000001\s+2\s"))
        .stdout(contains("0412000002").not());
}

#[test]
fn test_hangups() {
    let file = sample_file("cli_hangups");
    let cfg = no_config("cli_hangups");

    cs().args(["hangups", "--file", &file, "--config", &cfg])
        .assert()
        .success()
        .stdout(row(r"Caller\s+4\s"))
        .stdout(row(r"Agent\s+2\s"));
}

#[test]
fn test_abandoned() {
    let file = sample_file("cli_abandoned");
    let cfg = no_config("cli_abandoned");

    cs().args(["abandoned", "--file", &file, "--config", &cfg])
        .assert()
        .success()
        .stdout(row(r"Abandoned\s+1\s"))
        .stdout(row(r"Abandon rate\s+20\.0%"))
        .stdout(row(r"(?m)^35-60\s+1\s"));
}

#[test]
fn test_queues_with_queue_export() {
    let file = sample_file("cli_queues");
    let cfg = no_config("cli_queues");
    let queue = queue_file("cli_queues");

    cs().args(["queues", "--file", &file, "--config", &cfg, "--queue-file", &queue])
        .assert()
        .success()
        .stdout(row(r"General Enquiries\s+2\s+1\s+1\s+50\.0%"))
        .stdout(row(r"No Queue\s+3\s"))
        .stdout(contains("Highest miss rate"));
}

#[test]
fn test_queue_scope_none() {
    let file = sample_file("cli_queue_none");
    let cfg = no_config("cli_queue_none");
    let queue = queue_file("cli_queue_none");

    cs().args([
        "summary",
        "--file",
        &file,
        "--config",
        &cfg,
        "--queue-file",
        &queue,
        "--queue",
        "none",
    ])
    .assert()
    .success()
    .stdout(row(r"Total calls\s+3\s"));
}

#[test]
fn test_sites_daily_staff_followup() {
    let file = sample_file("cli_misc");
    let cfg = no_config("cli_misc");

    cs().args(["sites", "--file", &file, "--config", &cfg])
        .assert()
        .success()
        .stdout(row(r"Crace\s+2\s"))
        .stdout(row(r"All sites\s+5\s"));

    cs().args(["daily", "--file", &file, "--config", &cfg])
        .assert()
        .success()
        .stdout(contains("Inbound calls by weekday"))
        .stdout(row(r"Total Calls\s+2\s+1\s+0\s+1\s+0\s+1\s+0\s+5"));

    cs().args(["daily", "--direction", "out", "--file", &file, "--config", &cfg])
        .assert()
        .success()
        .stdout(contains("Outbound calls by weekday"));

    cs().args(["staff", "--file", &file, "--config", &cfg])
        .assert()
        .success()
        .stdout(row(r"Alice\s+2\s+0\s+2\s"))
        .stdout(contains("Nurse 1").not());

    cs().args(["followup", "--file", &file, "--config", &cfg])
        .assert()
        .success()
        .stdout(row(r"Lost opportunities\s+1\s"));
}

#[test]
fn test_hourly_in_and_out() {
    let file = sample_file("cli_hourly");
    let cfg = no_config("cli_hourly");

    cs().args(["hourly", "--file", &file, "--config", &cfg])
        .assert()
        .success()
        .stdout(contains("Calls by hour"))
        .stdout(row(r"7-8am\s+0\s+0\s+0"))
        .stdout(row(r"10-11am\s+2\s+0\s+2"))
        .stdout(row(r"3-4pm\s+0\s+1\s+1"))
        .stdout(row(r"6-7pm\s+0\s+0\s+0"))
        .stdout(row(r"Total\s+5\s+1\s+6"));
}

#[test]
fn test_heatmap_metrics() {
    let file = sample_file("cli_heatmap");
    let cfg = no_config("cli_heatmap");

    cs().args(["heatmap", "--file", &file, "--config", &cfg])
        .assert()
        .success()
        .stdout(contains("Inbound calls by half hour"))
        .stdout(row(r"Time\s+Mon\s+Tue\s+Wed\s+Thu\s+Fri\s+Sat"))
        .stdout(row(r"09:00\s+1\s+0\s+0\s+0\s+0\s+0"))
        .stdout(row(r"10:00\s+0\s+0\s+0\s+0\s+0\s+1"))
        .stdout(row(r"14:00\s+0\s+1\s+0\s+0\s+0\s+0"))
        .stdout(contains("18:00").not());

    cs().args(["heatmap", "--metric", "missed-rate", "--file", &file, "--config", &cfg])
        .assert()
        .success()
        .stdout(contains("Missed rate by half hour"))
        .stdout(row(r"10:30\s+100%\s+-\s+-\s+-\s+-\s+-"))
        .stdout(row(r"09:00\s+0%\s+-"));

    cs().args(["heatmap", "--metric", "max-wait", "--file", &file, "--config", &cfg])
        .assert()
        .success()
        .stdout(row(r"14:00\s+-\s+0:12\s+-"));

    cs().args(["heatmap", "--metric", "busiest", "--file", &file, "--config", &cfg])
        .assert()
        .failure();
}

#[test]
fn test_weekly_single_week() {
    let file = sample_file("cli_weekly");
    let cfg = no_config("cli_weekly");

    cs().args(["weekly", "--file", &file, "--config", &cfg])
        .assert()
        .success()
        .stdout(contains("Weekly trend"))
        .stdout(row(r"12 Jan 2026\s+5\s+4\s+0\s+0\.0%"))
        .stdout(contains("Fewer than two weeks"))
        .stdout(contains("Average (").not());
}

#[test]
fn test_inspect_raw_file() {
    let file = sample_file("cli_inspect");
    let cfg = no_config("cli_inspect");

    cs().args(["inspect", "--file", &file, "--config", &cfg, "--column", "Direction"])
        .assert()
        .success()
        .stdout(row(r"Rows\s+10\s"))
        .stdout(contains("CallDateTime"))
        .stdout(row(r"(?m)^In\s+8\s"))
        .stdout(row(r"(?m)^Int\s+1\s"));
}

#[test]
fn test_inspect_unknown_column_fails() {
    let file = sample_file("cli_inspect_bad");
    let cfg = no_config("cli_inspect_bad");

    cs().args(["inspect", "--file", &file, "--config", &cfg, "--column", "Nope"])
        .assert()
        .failure()
        .stderr(contains("missing required column 'Nope'"));
}

#[test]
fn test_missing_data_file() {
    let cfg = no_config("cli_missing_file");

    cs().args(["summary", "--file", "/nonexistent/callstats.csv", "--config", &cfg])
        .assert()
        .failure()
        .stderr(contains("Error:").and(contains("cannot read")));
}

#[test]
fn test_no_data_file_configured() {
    let cfg = no_config("cli_no_data_file");

    cs().args(["summary", "--config", &cfg])
        .assert()
        .failure()
        .stderr(contains("no data file"));
}

#[test]
fn test_invalid_period() {
    let file = sample_file("cli_bad_period");
    let cfg = no_config("cli_bad_period");

    cs().args(["summary", "--file", &file, "--config", &cfg, "--period", "2026-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}
