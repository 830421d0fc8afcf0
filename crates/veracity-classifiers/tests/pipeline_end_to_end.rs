//! End-to-end pipeline tests over a small on-disk dataset.

use std::path::PathBuf;

use veracity_classifiers::config::PipelineConfig;
use veracity_classifiers::error::DetectorError;
use veracity_classifiers::pipeline::run;

const DATASET: &str = "\
text,label
Official report confirms steady economic growth,real
Government releases official statement on policy,real
Official data shows unemployment rate declining,real
Minister presents official budget figures today,real
Official sources verify the trade agreement,real
Shocking secret cure discovered by doctors,fake
Shocking truth about celebrity revealed today,fake
Unbelievable shocking discovery stuns experts,fake
Shocking evidence hidden from the public,fake
Insider leaks shocking conspiracy details,fake
";

fn write_dataset(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("fake-news-dataset.csv");
    std::fs::write(&path, DATASET).unwrap();
    path
}

fn config_for(dir: &tempfile::TempDir) -> PipelineConfig {
    PipelineConfig {
        output_path: dir.path().join("fake_news_predictions.csv"),
        ..PipelineConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Happy path
// ---------------------------------------------------------------------------

#[test]
fn full_run_scores_and_persists_every_row() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = write_dataset(&dir);
    let config = config_for(&dir);

    let outcome = run(&dataset, &config).unwrap();

    // The keyword-separable classes must be learnable from the 0.8 split.
    assert!(
        outcome.report.accuracy >= 0.8,
        "held-out accuracy = {}",
        outcome.report.accuracy
    );

    // One prediction per input row, in input order.
    assert_eq!(outcome.predictions.len(), 10);
    assert!(outcome.predictions[0].text.starts_with("Official report"));
    assert!(outcome.predictions[9].text.starts_with("Insider leaks"));

    for prediction in &outcome.predictions {
        assert!(
            prediction.confidence >= 50.0 && prediction.confidence <= 100.0,
            "confidence = {}",
            prediction.confidence
        );
        let formatted = prediction.formatted_confidence();
        assert!(formatted.ends_with('%'), "formatted = {}", formatted);
    }
}

#[test]
fn output_artifact_has_header_and_ten_rows() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = write_dataset(&dir);
    let config = config_for(&dir);

    run(&dataset, &config).unwrap();

    let mut reader = csv::Reader::from_path(&config.output_path).unwrap();
    assert_eq!(
        reader.headers().unwrap(),
        &csv::StringRecord::from(vec!["text", "actual_label", "predicted_label", "confidence"])
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 10);
    for row in &rows {
        let confidence = row.get(3).unwrap();
        let value: f64 = confidence.trim_end_matches('%').parse().unwrap();
        assert!(
            (50.0..=100.0).contains(&value),
            "confidence column = {}",
            confidence
        );
    }
}

#[test]
fn rerun_overwrites_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = write_dataset(&dir);
    let config = config_for(&dir);
    std::fs::write(&config.output_path, "stale contents").unwrap();

    run(&dataset, &config).unwrap();

    let contents = std::fs::read_to_string(&config.output_path).unwrap();
    assert!(contents.starts_with("text,actual_label,predicted_label,confidence"));
}

// ---------------------------------------------------------------------------
// Failure taxonomy
// ---------------------------------------------------------------------------

#[test]
fn missing_file_is_typed() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir);

    let err = run(dir.path().join("no-such-file.csv"), &config).unwrap_err();
    assert!(
        matches!(
            err.downcast_ref::<DetectorError>(),
            Some(DetectorError::MissingFile(_))
        ),
        "unexpected error: {:#}",
        err
    );
}

#[test]
fn missing_label_column_is_a_schema_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-label.csv");
    std::fs::write(&path, "text,category\nsome text,real\n").unwrap();
    let config = config_for(&dir);

    let err = run(&path, &config).unwrap_err();
    match err.downcast_ref::<DetectorError>() {
        Some(DetectorError::Schema(message)) => {
            assert!(message.contains("'text' and 'label'"), "message = {}", message);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn rare_class_aborts_with_stratification_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rare.csv");
    std::fs::write(
        &path,
        "text,label\none official story,real\nanother official story,real\n\
         third official story,real\nfourth official story,real\n\
         fifth official story,real\nlone shocking story,fake\n",
    )
    .unwrap();
    let config = config_for(&dir);

    let err = run(&path, &config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DetectorError>(),
        Some(DetectorError::Stratification { .. })
    ));
}
