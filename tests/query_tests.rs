use callstats::models::{CallRecord, Direction, DurationField};
use callstats::query::predicates::{self, Predicate};
use callstats::query::{
    filter, filter_answered, filter_by_direction, filter_by_time_window, filter_unanswered,
    group_by,
};

mod common;
use common::{call, from_number, inbound};

fn mixed() -> Vec<CallRecord> {
    vec![
        call(Direction::Inbound, "2026-01-12 09:00", Some(3.0), 60.0),
        call(Direction::Inbound, "2026-01-12 09:05", Some(3.0), 90.0),
        call(Direction::Inbound, "2026-01-12 09:10", Some(0.0), 15.0),
        call(Direction::Outbound, "2026-01-12 09:15", Some(5.0), 200.0),
    ]
}

#[test]
fn test_filter_by_direction_keeps_only_that_direction() {
    let records = mixed();

    let inbound = filter_by_direction(&records, Direction::Inbound);
    let outbound = filter_by_direction(&records, Direction::Outbound);

    assert_eq!(inbound.len(), 3);
    assert_eq!(outbound.len(), 1);
    assert!(inbound.iter().all(|r| r.direction == Direction::Inbound));
    assert!(outbound.iter().all(|r| r.direction == Direction::Outbound));
}

#[test]
fn test_filter_answered_excludes_zero_and_outbound() {
    let records = mixed();

    let answered = filter_answered(&records);

    assert_eq!(answered.len(), 2);
    assert!(answered.iter().all(|r| r.time_to_answer == Some(3.0)));
}

#[test]
fn test_filter_answered_excludes_missing_time_to_answer() {
    let records = vec![inbound("2026-01-12 09:00", None), inbound("2026-01-12 09:01", Some(4.0))];

    let answered = filter_answered(&records);
    let unanswered = filter_unanswered(&records);

    assert_eq!(answered.len(), 1);
    assert_eq!(unanswered.len(), 1);
    assert_eq!(unanswered[0].time_to_answer, None);
}

#[test]
fn test_subsets_preserve_original_order() {
    let records = mixed();

    let inbound = filter_by_direction(&records, Direction::Inbound);

    let times: Vec<_> = inbound.iter().map(|r| r.call_datetime).collect();
    let mut sorted = times.clone();
    sorted.sort();
    assert_eq!(times, sorted);
    assert!(std::ptr::eq(inbound[0], &records[0]));
}

#[test]
fn test_time_window_is_half_open() {
    let records: Vec<CallRecord> = [2.0, 5.0, 9.9, 10.0, 15.0]
        .iter()
        .map(|t| inbound("2026-01-12 09:00", Some(*t)))
        .collect();

    let low = filter_by_time_window(&records, DurationField::TimeToAnswer, 5.0, 10.0);
    let high = filter_by_time_window(&records, DurationField::TimeToAnswer, 10.0, f64::INFINITY);

    let low_values: Vec<_> = low.iter().filter_map(|r| r.time_to_answer).collect();
    let high_values: Vec<_> = high.iter().filter_map(|r| r.time_to_answer).collect();
    assert_eq!(low_values, vec![5.0, 9.9]);
    assert_eq!(high_values, vec![10.0, 15.0]);
}

#[test]
fn test_time_window_skips_records_without_the_field() {
    let records = vec![inbound("2026-01-12 09:00", None), inbound("2026-01-12 09:01", Some(1.0))];

    let out = filter_by_time_window(&records, DurationField::TimeToAnswer, 0.0, f64::INFINITY);

    assert_eq!(out.len(), 1);
}

#[test]
fn test_talk_time_window_uses_answered_calls_only() {
    let records = vec![
        call(Direction::Inbound, "2026-01-12 09:00", Some(10.0), 70.0),
        call(Direction::Inbound, "2026-01-12 09:01", Some(0.0), 70.0),
    ];

    let out = filter_by_time_window(&records, DurationField::TalkTime, 60.0, 61.0);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].time_to_answer, Some(10.0));
}

#[test]
fn test_predicates_compose() {
    let records = vec![
        from_number(inbound("2026-01-12 09:00", Some(3.0)), "0412000001"),
        from_number(inbound("2026-01-12 09:01", Some(0.0)), "0412000001"),
        from_number(inbound("2026-01-12 09:02", Some(3.0)), "0"),
        inbound("2026-01-12 09:03", Some(3.0)),
    ];

    let with_id = filter(&records, predicates::has_caller_id());
    let answered_or_anon = filter(
        &records,
        predicates::answered().and(predicates::has_caller_id().not()),
    );
    let number_or_missing = filter(
        &records,
        predicates::origin_is("0412000001").or(|r: &CallRecord| r.origin_number.is_none()),
    );

    assert_eq!(with_id.len(), 2);
    assert_eq!(answered_or_anon.len(), 2);
    assert_eq!(number_or_missing.len(), 3);
}

#[test]
fn test_filter_on_empty_input_is_empty() {
    let records: Vec<CallRecord> = Vec::new();
    assert!(filter_answered(&records).is_empty());
    assert!(filter(&records, predicates::unanswered()).is_empty());
}

#[test]
fn test_group_by_keeps_first_seen_key_order() {
    let records = vec![
        from_number(inbound("2026-01-12 09:00", Some(1.0)), "B"),
        from_number(inbound("2026-01-12 09:01", Some(2.0)), "A"),
        from_number(inbound("2026-01-12 09:02", Some(3.0)), "B"),
        from_number(inbound("2026-01-12 09:03", Some(4.0)), "C"),
    ];

    let groups = group_by(&records, |r| r.origin_number.clone().unwrap_or_default());

    let keys: Vec<&String> = groups.keys().collect();
    assert_eq!(keys, vec!["B", "A", "C"]);
    assert_eq!(groups.len(), 3);

    let b = groups.get(&"B".to_string()).expect("group B");
    let tta: Vec<_> = b.iter().filter_map(|r| r.time_to_answer).collect();
    assert_eq!(tta, vec![1.0, 3.0]);
}

#[test]
fn test_group_by_sizes_sum_to_input() {
    let records = mixed();

    let groups = group_by(&records, |r| r.direction);
    let total: usize = groups.iter().map(|(_, g)| g.len()).sum();

    assert_eq!(total, records.len());
    assert!(group_by(&Vec::<CallRecord>::new(), |r| r.direction).is_empty());
}
