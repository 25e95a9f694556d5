//! Result parsing.
//!
//! Labs mix exact values, assay floor/ceiling censored values (`<5.0`,
//! `>90`) and qualitative text (`Negative`). Parsing never fails and always
//! keeps the original text for display.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use bloodwork_model::{Comparator, ResultValue};

use super::numeric::{format_decimal, parse_decimal};

/// `<5.0`, `> 59`, `<=10`, `>=5`
static CENSORED_RESULT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([<>]=?)\s*(\d+\.?\d*)$").expect("Invalid censored result regex")
});

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResult {
    /// Numeric magnitude; `None` when none could be extracted.
    pub value: Option<f64>,
    pub value_text: String,
    pub comparator: Option<Comparator>,
}

impl ParsedResult {
    /// True when the result is only bounded (`<x`, `>=x`, ...).
    pub fn is_censored(&self) -> bool {
        self.comparator.is_some_and(|c| c.is_censoring())
    }
}

/// Parse a raw result into value, text and comparator.
pub fn parse_result(result: &ResultValue) -> ParsedResult {
    match result {
        ResultValue::Numeric(value) => ParsedResult {
            value: Some(*value),
            value_text: format_decimal(*value),
            comparator: None,
        },
        ResultValue::Textual(text) => parse_result_text(text),
    }
}

fn parse_result_text(text: &str) -> ParsedResult {
    let trimmed = text.trim();

    if let Some(captures) = CENSORED_RESULT.captures(trimmed)
        && let Some(comparator) = Comparator::from_symbol(&captures[1])
        && let Some(value) = parse_decimal(&captures[2])
    {
        return ParsedResult {
            value: Some(value),
            value_text: text.to_string(),
            comparator: Some(comparator),
        };
    }

    let value = parse_decimal(trimmed);
    if value.is_none() {
        trace!("qualitative result kept as text");
    }
    ParsedResult {
        value,
        value_text: text.to_string(),
        comparator: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> ParsedResult {
        parse_result(&ResultValue::Textual(value.to_string()))
    }

    #[test]
    fn numeric_input() {
        let parsed = parse_result(&ResultValue::Numeric(5.4));
        assert_eq!(parsed.value, Some(5.4));
        assert_eq!(parsed.value_text, "5.4");
        assert_eq!(parsed.comparator, None);
    }

    #[test]
    fn censored_text() {
        let parsed = text("<5.0");
        assert_eq!(parsed.value, Some(5.0));
        assert_eq!(parsed.value_text, "<5.0");
        assert_eq!(parsed.comparator, Some(Comparator::Lt));
        assert!(parsed.is_censored());

        assert_eq!(text("> 59").comparator, Some(Comparator::Gt));
        assert_eq!(text("<=10").comparator, Some(Comparator::Le));
        assert_eq!(text(">=5").value, Some(5.0));
    }

    #[test]
    fn bare_decimal_text() {
        let parsed = text(" 1.14 ");
        assert_eq!(parsed.value, Some(1.14));
        assert_eq!(parsed.value_text, " 1.14 ");
        assert_eq!(parsed.comparator, None);
    }

    #[test]
    fn qualitative_text() {
        let parsed = text("Negative");
        assert_eq!(parsed.value, None);
        assert_eq!(parsed.value_text, "Negative");
        assert_eq!(parsed.comparator, None);
        assert!(!parsed.is_censored());
    }

    #[test]
    fn trailing_text_keeps_no_value() {
        let parsed = text("12 mg");
        assert_eq!(parsed.value, None);
        assert_eq!(parsed.value_text, "12 mg");
        assert_eq!(parsed.comparator, None);
        assert_eq!(text("5.4 H").value, None);
    }

    #[test]
    fn malformed_comparators_fall_back_to_text() {
        assert_eq!(text("=<5").value, None);
        assert_eq!(text("<<5").value, None);
        assert_eq!(text("<").value, None);
        assert_eq!(text("<-5").comparator, None);
    }
}
