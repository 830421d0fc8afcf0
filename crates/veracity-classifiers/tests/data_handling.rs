//! Integration tests for record preprocessing and the stratified split.

use veracity_classifiers::data_handling::{preprocess, stratified_split, Record, ProcessedRecord};
use veracity_classifiers::error::DetectorError;

fn make_records(real: usize, fake: usize) -> Vec<ProcessedRecord> {
    let mut records = Vec::new();
    for i in 0..real {
        records.push(Record {
            text: format!("Official statement number {}", i),
            label: "real".to_string(),
        });
    }
    for i in 0..fake {
        records.push(Record {
            text: format!("Shocking claim number {}", i),
            label: "fake".to_string(),
        });
    }
    preprocess(records)
}

// ---------------------------------------------------------------------------
// preprocess
// ---------------------------------------------------------------------------

#[test]
fn preprocess_derives_normalized_text() {
    let records = preprocess(vec![Record {
        text: "Breaking: 99 Problems!".to_string(),
        label: "fake".to_string(),
    }]);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text, "Breaking: 99 Problems!");
    assert_eq!(records[0].normalized, "breaking  problems");
}

// ---------------------------------------------------------------------------
// stratified_split
// ---------------------------------------------------------------------------

#[test]
fn split_is_exhaustive_and_disjoint() {
    let records = make_records(20, 20);
    let split = stratified_split(&records, 0.2, 42).unwrap();

    assert_eq!(split.train.len() + split.test.len(), records.len());

    let mut all: Vec<usize> = split.train.iter().chain(&split.test).copied().collect();
    all.sort_unstable();
    let expected: Vec<usize> = (0..records.len()).collect();
    assert_eq!(all, expected, "every row appears exactly once");
}

#[test]
fn split_preserves_label_proportions() {
    // 60 real / 40 fake; test proportions should stay within 5% of that.
    let records = make_records(60, 40);
    let split = stratified_split(&records, 0.2, 42).unwrap();

    let test_real = split
        .test
        .iter()
        .filter(|&&i| records[i].label == "real")
        .count();
    let test_fraction_real = test_real as f64 / split.test.len() as f64;
    assert!(
        (test_fraction_real - 0.6).abs() < 0.05,
        "test real fraction = {}",
        test_fraction_real
    );
}

#[test]
fn split_is_deterministic_for_a_seed() {
    let records = make_records(15, 15);
    let first = stratified_split(&records, 0.2, 7).unwrap();
    let second = stratified_split(&records, 0.2, 7).unwrap();
    assert_eq!(first.train, second.train);
    assert_eq!(first.test, second.test);
}

#[test]
fn split_fails_on_rare_class() {
    // One fake row: round(1 * 0.2) == 0, so 'fake' cannot reach the test side.
    let records = make_records(10, 1);
    let err = stratified_split(&records, 0.2, 42).unwrap_err();
    assert!(
        matches!(err, DetectorError::Stratification { ref label, count: 1 } if label == "fake"),
        "unexpected error: {}",
        err
    );
}

#[test]
fn split_fails_when_class_would_be_test_only() {
    // Two fake rows at 0.8: round(1.6) == 2 sends the whole class to test.
    let records = make_records(10, 2);
    let err = stratified_split(&records, 0.8, 42).unwrap_err();
    assert!(matches!(err, DetectorError::Stratification { .. }));
}
