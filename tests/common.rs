#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use callstats::models::{CallRecord, Direction};
use chrono::NaiveDateTime;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn cs() -> Command {
    cargo_bin_cmd!("callstats")
}

pub const HEADER: &str = "CallGUID,Direction,OriginNumber,TargetNumber,CallDateTime,TimeToAnswer,CallDuration,HangupReason,UserName,OfficeName,CallAlertName";

/// One week of calls, Monday 2026-01-12 to Sunday 2026-01-18.
///
/// With the default scope (opening hours, internal extensions excluded):
/// g7 (Sunday) and g8 (18:00) are out of hours, g9 is a nurse desk,
/// g5 is an internal leg dropped at load.
pub const SAMPLE_ROWS: &[&str] = &[
    "g1,In,0412000001,0262000000,12/01/2026 9:00 AM,3,120,Caller,Alice,Crace - Main,Main",
    "g2,In,0412000001,0262000000,12/01/2026 10:30 AM,0,40,Caller,,Crace - Main,Main",
    "g3,In,0412000002,0262000000,13/01/2026 2:15 PM,12,300,Agent,Bob,Lyneham - Main,Main",
    "g4,Out,0262000000,0499000000,13/01/2026 3:00 PM,,200,Agent,Bob,Lyneham - Main,",
    "g5,Int,201,202,14/01/2026 11:00 AM,2,30,Agent,Alice,Crace - Main,",
    "g6,In,0412000003,0262000000,17/01/2026 10:00 AM,7,60,Caller,Alice,Denman - Main,",
    "g7,In,0412000004,0262000000,18/01/2026 10:00 AM,5,60,Caller,Bob,Denman - Main,",
    "g8,In,0412000005,0262000000,14/01/2026 6:00 PM,0,20,Caller,,Crace - Main,",
    "g9,In,0412000006,0262000000,15/01/2026 11:00 AM,3,90,Agent,Nurse 1,Crace - Main,",
    "g10,In,0,0262000000,15/01/2026 12:00 PM,20,100,Caller,Carol,Denman - Main,",
];

pub fn sample_csv() -> String {
    let mut s = String::from(HEADER);
    for row in SAMPLE_ROWS {
        s.push('\n');
        s.push_str(row);
    }
    s.push('\n');
    s
}

/// Write `contents` to a unique file inside the system temp dir.
pub fn write_temp(name: &str, contents: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("callstats_{name}"));
    fs::write(&path, contents).expect("write fixture");
    path.to_string_lossy().to_string()
}

pub fn sample_file(name: &str) -> String {
    write_temp(&format!("{name}.csv"), &sample_csv())
}

/// Queue export naming g1 and g2 as General Enquiries (name taken from the file).
pub fn queue_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_queue"));
    fs::create_dir_all(&path).expect("create queue dir");
    path.push("CallQueue_20260112_20260118_General_Enquiries.csv");
    fs::write(&path, "CallGUID,Other\ng1,x\ng2,y\n").expect("write queue export");
    path.to_string_lossy().to_string()
}

/// Config path that does not exist, so every run uses the defaults.
pub fn no_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("callstats_{name}_missing.conf"));
    fs::remove_file(&path).ok();
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("callstats_{name}_out.{ext}"));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("test timestamp")
}

/// Record with the fields most tests care about.
pub fn call(direction: Direction, when: &str, tta: Option<f64>, duration: f64) -> CallRecord {
    let mut r = CallRecord::new(direction, at(when));
    r.time_to_answer = tta;
    r.call_duration = duration;
    r
}

pub fn inbound(when: &str, tta: Option<f64>) -> CallRecord {
    call(Direction::Inbound, when, tta, 60.0)
}

pub fn from_number(mut r: CallRecord, number: &str) -> CallRecord {
    r.origin_number = Some(number.to_string());
    r
}
