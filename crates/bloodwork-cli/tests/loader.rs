//! Tests for report discovery and loading.

use std::fs;

use bloodwork_cli::loader::{collect_report_paths, load_report, load_reports, source_label};
use bloodwork_core::{NormalizeOptions, parse_all_bloodwork_files};
use bloodwork_model::BloodworkError;

const REPORT: &str = r#"{
    "collection_date": "2024-09-24",
    "panels": [{
        "panel_name": "Lipid Panel",
        "tests": [
            {"name": "LDL Chol Calc (NIH)", "result": 131, "unit": "mg/dL",
             "reference_range": "0-99", "flag": "High"}
        ]
    }]
}"#;

#[test]
fn directory_scan_is_sorted_and_filtered() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("09-24-24.json"), REPORT).unwrap();
    fs::write(dir.path().join("01-03-24.JSON"), REPORT).unwrap();
    fs::write(dir.path().join("notes.txt"), "not a report").unwrap();
    fs::create_dir(dir.path().join("nested.json")).unwrap();

    let paths = collect_report_paths(&[dir.path().to_path_buf()]).unwrap();
    let labels: Vec<_> = paths.iter().map(|p| source_label(p)).collect();
    assert_eq!(labels, ["01-03-24.JSON", "09-24-24.json"]);
}

#[test]
fn explicit_files_are_kept_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let second = dir.path().join("b.json");
    let first = dir.path().join("a.txt");
    let paths = collect_report_paths(&[second.clone(), first.clone()]).unwrap();
    assert_eq!(paths, vec![second, first]);
}

#[test]
fn load_errors_are_typed() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    assert!(matches!(load_report(&missing), Err(BloodworkError::Io(_))));

    let invalid = dir.path().join("invalid.json");
    fs::write(&invalid, "{ not json").unwrap();
    assert!(matches!(load_report(&invalid), Err(BloodworkError::Json(_))));

    let empty = dir.path().join("empty.json");
    fs::write(&empty, "  \n").unwrap();
    assert!(matches!(load_report(&empty), Err(BloodworkError::Message(_))));
}

#[test]
fn failures_do_not_block_other_reports() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("good.json"), REPORT).unwrap();
    fs::write(dir.path().join("bad.json"), "[1, 2").unwrap();

    let paths = collect_report_paths(&[dir.path().to_path_buf()]).unwrap();
    let loaded = load_reports(&paths);
    assert_eq!(loaded.inputs.len(), 1);
    assert_eq!(loaded.failures.len(), 1);
    assert_eq!(loaded.failures[0].source_file, "bad.json");

    let mut result = parse_all_bloodwork_files(&loaded.inputs, &NormalizeOptions::new());
    for failure in &loaded.failures {
        result.record_failure(&failure.source_file, failure.error.to_string());
    }
    assert_eq!(result.readings.len(), 1);
    assert_eq!(result.readings[0].metric_name, "LDL-C");
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].starts_with("bad.json: json error:"));
}
