//! Tests for report shape validation.

use bloodwork_model::{AuthorFlag, IssueSeverity, ResultValue};
use bloodwork_validate::{MatchingMode, ValidationOptions, validate_report};
use serde_json::{Value, json};

fn valid_report() -> Value {
    json!({
        "collection_date": "2024-01-03",
        "report_date": "2024-01-05",
        "panels": [{
            "panel_name": "TSH and Free T4",
            "tests": [
                {"name": "TSH", "result": 1.72, "unit": "uIU/mL",
                 "reference_range": "0.450-4.500", "flag": null},
                {"name": "Free T4 (Direct)", "result": "1.14", "unit": "ng/dL",
                 "reference_range": "0.82-1.77", "comments": "fasting"}
            ]
        }]
    })
}

fn messages(value: &Value, options: ValidationOptions) -> Vec<String> {
    validate_report(value, options)
        .expect_err("expected rejection")
        .issues
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn valid_report_decodes() {
    let validated = validate_report(&valid_report(), ValidationOptions::new()).expect("valid");
    assert!(validated.report.issues.is_empty());
    let file = validated.file;
    assert_eq!(file.collection_date, "2024-01-03");
    assert_eq!(file.report_date.as_deref(), Some("2024-01-05"));
    assert_eq!(file.test_count(), 2);
    let tests = &file.panels[0].tests;
    assert_eq!(tests[0].result, ResultValue::Numeric(1.72));
    assert_eq!(tests[1].result, ResultValue::Textual("1.14".to_string()));
    assert_eq!(tests[1].comments.as_deref(), Some("fasting"));
}

#[test]
fn missing_panels_is_single_error() {
    let value = json!({"collection_date": "2024-01-03"});
    assert_eq!(
        messages(&value, ValidationOptions::new()),
        vec!["panels: required field is missing"]
    );
}

#[test]
fn non_object_root_is_rejected() {
    let value = json!([1, 2, 3]);
    assert_eq!(
        messages(&value, ValidationOptions::new()),
        vec!["(root): expected object, found list"]
    );
}

#[test]
fn all_failures_are_collected_with_paths() {
    let value = json!({
        "collection_date": 20240103,
        "panels": [{
            "panel_name": "CBC",
            "tests": [
                {"name": "WBC", "result": true, "unit": "x10E3/uL", "reference_range": "3.4-10.8"},
                {"name": "RBC", "result": 4.9, "reference_range": null}
            ]
        }]
    });
    assert_eq!(
        messages(&value, ValidationOptions::new()),
        vec![
            "collection_date: expected string, found number",
            "panels[0].tests[0].result: expected number or string, found boolean",
            "panels[0].tests[1].unit: required field is missing",
        ]
    );
}

#[test]
fn nullable_fields_accept_null_but_require_key() {
    let mut value = valid_report();
    value["panels"][0]["tests"][0]["unit"] = Value::Null;
    value["panels"][0]["tests"][0]["reference_range"] = Value::Null;
    assert!(validate_report(&value, ValidationOptions::new()).is_ok());

    let tests = value["panels"][0]["tests"][0].as_object_mut().unwrap();
    tests.remove("reference_range");
    assert_eq!(
        messages(&value, ValidationOptions::new()),
        vec!["panels[0].tests[0].reference_range: required field is missing"]
    );
}

#[test]
fn optional_fields_accept_null() {
    let mut value = valid_report();
    value["report_date"] = Value::Null;
    value["panels"][0]["tests"][1]["comments"] = Value::Null;
    let validated = validate_report(&value, ValidationOptions::new()).expect("valid");
    assert_eq!(validated.file.report_date, None);
}

#[test]
fn unknown_keys_are_ignored() {
    let mut value = valid_report();
    value["lab"] = json!("Labcorp");
    value["panels"][0]["tests"][0]["loinc"] = json!("3016-3");
    assert!(validate_report(&value, ValidationOptions::new()).is_ok());
}

#[test]
fn strict_flag_matching_rejects_unknown_spelling() {
    let mut value = valid_report();
    value["panels"][0]["tests"][0]["flag"] = json!("high");
    assert_eq!(
        messages(&value, ValidationOptions::new()),
        vec!["panels[0].tests[0].flag: expected one of High, Low, H, L, found \"high\""]
    );
}

#[test]
fn lenient_flag_matching_repairs_case() {
    let mut value = valid_report();
    value["panels"][0]["tests"][0]["flag"] = json!("high");
    value["panels"][0]["tests"][1]["flag"] = json!("l");
    let options = ValidationOptions::new().with_flag_matching(MatchingMode::Lenient);
    let validated = validate_report(&value, options).expect("lenient accepts");
    assert!(validated.report.issues.is_empty());
    let tests = &validated.file.panels[0].tests;
    assert_eq!(tests[0].flag, Some(AuthorFlag::High));
    assert_eq!(tests[1].flag, Some(AuthorFlag::L));
}

#[test]
fn lenient_flag_matching_drops_unknown_with_warning() {
    let mut value = valid_report();
    value["panels"][0]["tests"][0]["flag"] = json!("A");
    let options = ValidationOptions::new().with_flag_matching(MatchingMode::Lenient);
    let validated = validate_report(&value, options).expect("lenient accepts");
    assert_eq!(validated.file.panels[0].tests[0].flag, None);
    assert_eq!(validated.report.warning_count(), 1);
    let warning = &validated.report.issues[0];
    assert_eq!(warning.severity, IssueSeverity::Warning);
    assert_eq!(warning.path, "panels[0].tests[0].flag");
}

#[test]
fn input_value_is_not_modified() {
    let mut value = valid_report();
    value["panels"][0]["tests"][0]["flag"] = json!("h");
    let before = value.clone();
    let options = ValidationOptions::new().with_flag_matching(MatchingMode::Lenient);
    validate_report(&value, options).expect("lenient accepts");
    assert_eq!(value, before);
}
