//! Integration test: read events from CSV files on disk.

use std::fs;

use summercal_calendar::Date;
use summercal_io::{IoError, ReaderConfig, read_events};

const SUMMER_CSV: &str = "\
start_date,end_date,title
2025-06-16,2025-06-27,Camp
2025-06-29,2025-07-02,Trip
2025-07-04,2025-07-04,Holiday
2025-07-28,2025-08-08,Beach
";

#[test]
fn reads_events_in_file_order() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("events.csv");
    fs::write(&path, SUMMER_CSV).expect("write csv");

    let events = read_events(&path, &ReaderConfig::default()).expect("read succeeds");
    let labels: Vec<&str> = events.iter().map(|e| e.label()).collect();
    assert_eq!(labels, ["Camp", "Trip", "Holiday", "Beach"]);

    let trip = &events[1];
    assert_eq!(trip.start(), Date::new(2025, 6, 29).unwrap());
    assert_eq!(trip.end(), Date::new(2025, 7, 2).unwrap());
    assert_eq!(trip.n_days(), 4);
}

#[test]
fn utf8_labels_survive() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("events.csv");
    fs::write(
        &path,
        "start_date,end_date,title\n2025-06-01,2025-06-03,Дача\n",
    )
    .expect("write csv");

    let events = read_events(&path, &ReaderConfig::default()).expect("read succeeds");
    assert_eq!(events[0].label(), "Дача");
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("nope.csv");
    let err = read_events(&path, &ReaderConfig::default()).unwrap_err();
    match err {
        IoError::FileNotFound { path: p } => assert_eq!(p, path),
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

#[test]
fn reversed_range_fails_whole_read() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("events.csv");
    fs::write(
        &path,
        "start_date,end_date,title\n2025-06-01,2025-06-03,Ok\n2025-07-10,2025-07-01,Backwards\n",
    )
    .expect("write csv");

    let err = read_events(&path, &ReaderConfig::default()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("1 validation error(s)"), "{msg}");
    assert!(msg.contains("line 3"), "{msg}");
    assert!(msg.contains("Backwards"), "{msg}");
}
