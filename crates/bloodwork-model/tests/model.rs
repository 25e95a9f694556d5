//! Tests for bloodwork-model types.

use bloodwork_model::{AuthorFlag, Comparator, Flag, RawFile, ResultValue};
use serde_json::json;

#[test]
fn raw_file_deserializes_mixed_results() {
    let value = json!({
        "collection_date": "2024-09-24",
        "panels": [{
            "panel_name": "Hormones / Other",
            "tests": [
                {"name": "Estradiol", "result": "<5.0", "unit": "pg/mL",
                 "reference_range": "7.6-42.6", "flag": "Low"},
                {"name": "Testosterone", "result": 612, "unit": "ng/dL",
                 "reference_range": "264-916"}
            ]
        }]
    });
    let file: RawFile = serde_json::from_value(value).expect("deserialize raw file");
    assert_eq!(file.test_count(), 2);
    assert_eq!(file.report_date, None);

    let tests = &file.panels[0].tests;
    assert_eq!(tests[0].result, ResultValue::Textual("<5.0".to_string()));
    assert_eq!(tests[0].flag, Some(AuthorFlag::Low));
    assert_eq!(tests[1].result, ResultValue::Numeric(612.0));
    assert_eq!(tests[1].flag, None);
}

#[test]
fn author_flag_spellings() {
    assert!(AuthorFlag::H.is_high());
    assert!(AuthorFlag::High.is_high());
    assert!(AuthorFlag::L.is_low());
    assert!(!AuthorFlag::Low.is_high());
    let names: Vec<&str> = AuthorFlag::ALL.iter().map(|flag| flag.as_str()).collect();
    assert_eq!(names, vec!["High", "Low", "H", "L"]);
}

#[test]
fn comparator_symbols() {
    for symbol in ["<", ">", "<=", ">=", "="] {
        let comparator = Comparator::from_symbol(symbol).expect("known symbol");
        assert_eq!(comparator.as_str(), symbol);
    }
    assert_eq!(Comparator::from_symbol("=<"), None);
    assert!(Comparator::Lt.is_censoring());
    assert!(!Comparator::Eq.is_censoring());
    assert_eq!(serde_json::to_string(&Comparator::Ge).unwrap(), "\">=\"");
}

#[test]
fn flag_display() {
    assert_eq!(Flag::High.to_string(), "High");
    assert!(Flag::Low.is_abnormal());
    assert!(!Flag::Normal.is_abnormal());
}
