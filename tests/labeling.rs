use approx::assert_relative_eq;
use chrono::{DateTime, TimeZone, Utc};

use tslabel_lib::codec::{parse_samples, serialize_labeled};
use tslabel_lib::error::LabelError;
use tslabel_lib::models::{Sample, TimeRange};
use tslabel_lib::segmentation::{ColorAllocator, LabelResolver, SegmentStore};
use tslabel_lib::series::SeriesStore;
use tslabel_lib::stats::summarize;
use tslabel_lib::LabelingSession;

fn at(secs: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap() + chrono::Duration::seconds(secs)
}

#[test]
fn loaded_series_is_sorted_with_stable_ties() {
    let mut store = SeriesStore::new();
    store.load(vec![
        Sample::new(at(5), 50.0),
        Sample::new(at(1), 10.0),
        Sample::new(at(5), 51.0),
        Sample::new(at(3), 30.0),
        Sample::new(at(1), 11.0),
    ]);

    let values: Vec<f64> = store.current().iter().map(|s| s.value).collect();
    assert_eq!(values, vec![10.0, 11.0, 30.0, 50.0, 51.0]);
}

#[test]
fn later_segment_wins_overlap() {
    let mut segments = SegmentStore::new();
    let mut colors = ColorAllocator::default();
    segments.add(TimeRange::new(at(0), at(20)), "X", &mut colors);
    segments.add(TimeRange::new(at(10), at(30)), "Y", &mut colors);

    let resolver = LabelResolver::new(segments.all(), "Normal");
    assert_eq!(resolver.resolve(&Sample::new(at(15), 0.0)), "Y");
    assert_eq!(resolver.resolve(&Sample::new(at(5), 0.0)), "X");
    assert_eq!(resolver.resolve(&Sample::new(at(40), 0.0)), "Normal");
}

#[test]
fn empty_label_is_stored_as_n() {
    let mut session = LabelingSession::default();
    let segment = session.apply_label(TimeRange::new(at(10), at(0)), "");
    assert_eq!(segment.label, "N");
    assert_eq!(segment.start, at(0));
    assert!(!segment.color.is_empty());
}

#[test]
fn stats_of_one_to_four() {
    let samples: Vec<Sample> = [1.0, 2.0, 3.0, 4.0]
        .iter()
        .enumerate()
        .map(|(i, v)| Sample::new(at(i as i64), *v))
        .collect();
    let summary = summarize(&samples).unwrap();
    assert_eq!(summary.min, 1.0);
    assert_eq!(summary.max, 4.0);
    assert_relative_eq!(summary.std_dev, 1.118_033_988_749_895, epsilon = 1e-12);
    assert!(matches!(
        summarize(&[]),
        Err(LabelError::InsufficientData { .. })
    ));
}

#[test]
fn unlabeled_export_round_trips() {
    let input = "Timestamp,Value\n\
                 2024-06-01T00:00:02Z,2.5\n\
                 2024-06-01T00:00:00Z,-1\n\
                 2024-06-01 00:00:01,1e3\n";
    let mut session = LabelingSession::default();
    session.load_csv(input, None);

    let exported = session.export_csv().unwrap();
    assert_eq!(parse_samples(&exported), session.series());
    assert!(exported.lines().skip(1).all(|line| line.ends_with(",Normal")));
    assert_eq!(
        exported.lines().nth(2),
        Some("2024-06-01T00:00:01.000Z,1000,Normal")
    );
}

#[test]
fn row_missing_value_is_skipped() {
    let text = "Timestamp,Value\n2024-06-01T00:00:00Z,1\n2024-06-01T00:00:01Z\n";
    assert_eq!(parse_samples(text).len(), 1);
}

#[test]
fn removal_reindexes() {
    let mut session = LabelingSession::default();
    for label in ["A", "B", "C"] {
        session.apply_label(TimeRange::new(at(0), at(1)), label);
    }
    session.remove_label(0).unwrap();

    let labels: Vec<&str> = session.segments().iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["B", "C"]);
    assert_eq!(
        session.remove_label(2),
        Err(LabelError::SegmentIndexOutOfRange { index: 2, len: 2 })
    );
}

#[test]
fn export_through_resolver_matches_session() {
    let mut session = LabelingSession::default();
    session.load_series(
        (0..5).map(|i| Sample::new(at(i * 10), i as f64)).collect(),
        Some("FT-7".into()),
    );
    session.apply_label(TimeRange::new(at(10), at(20)), "Leak");

    let direct = serialize_labeled(session.series(), &session.resolver()).unwrap();
    assert_eq!(direct, session.export_csv().unwrap());
    assert_eq!(direct.matches(",Leak").count(), 2);
}
