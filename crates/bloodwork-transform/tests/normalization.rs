//! Tests for result, range and flag normalization.

use bloodwork_model::{AuthorFlag, Comparator, Flag, ResultValue};
use bloodwork_transform::{RangeNotation, parse_range, parse_result, resolve_flag};

#[test]
fn numeric_result() {
    let parsed = parse_result(&ResultValue::Numeric(5.4));
    assert_eq!(parsed.value, Some(5.4));
    assert_eq!(parsed.value_text, "5.4");
    assert_eq!(parsed.comparator, None);
}

#[test]
fn censored_result() {
    let parsed = parse_result(&ResultValue::Textual("<5.0".to_string()));
    assert_eq!(parsed.value, Some(5.0));
    assert_eq!(parsed.value_text, "<5.0");
    assert_eq!(parsed.comparator, Some(Comparator::Lt));
}

#[test]
fn range_notations() {
    let bounded = parse_range(Some("50-100"));
    assert_eq!((bounded.ref_low, bounded.ref_high), (Some(50.0), Some(100.0)));

    let floor = parse_range(Some(">59"));
    assert_eq!((floor.ref_low, floor.ref_high), (Some(59.0), None));

    let ceiling = parse_range(Some("<100"));
    assert_eq!((ceiling.ref_low, ceiling.ref_high), (None, Some(100.0)));
    assert_eq!(ceiling.notation, RangeNotation::Ceiling);
}

#[test]
fn flag_precedence() {
    let range = parse_range(Some("50-100"));
    let flag = |author: Option<AuthorFlag>, value: f64| {
        resolve_flag(author, &parse_result(&ResultValue::Numeric(value)), &range)
    };
    assert_eq!(flag(None, 150.0), Some(Flag::High));
    assert_eq!(flag(None, 30.0), Some(Flag::Low));
    assert_eq!(flag(None, 75.0), Some(Flag::Normal));
    for value in [30.0, 75.0, 150.0] {
        assert_eq!(flag(Some(AuthorFlag::H), value), Some(Flag::High));
    }
}

#[test]
fn qualitative_result_with_text_range() {
    let result = parse_result(&ResultValue::Textual("Negative".to_string()));
    let range = parse_range(Some("Negative"));
    assert_eq!(result.value, None);
    assert_eq!(range.ref_text.as_deref(), Some("Negative"));
    assert_eq!(resolve_flag(None, &result, &range), None);
}
