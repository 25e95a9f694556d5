//! Numeric parsing shared by the result and range parsers.

/// Parse a bare decimal, returning `None` for empty, non-numeric, or
/// non-finite text (`NaN`, `inf`).
pub fn parse_decimal(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Shortest decimal text for a number, e.g. `5.4`, `612`, `0.45`.
pub fn format_decimal(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal() {
        assert_eq!(parse_decimal("123.45"), Some(123.45));
        assert_eq!(parse_decimal("-0.5"), Some(-0.5));
        assert_eq!(parse_decimal("  7  "), Some(7.0));
        assert_eq!(parse_decimal(".5"), Some(0.5));
    }

    #[test]
    fn test_rejects_non_numbers() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("Negative"), None);
        assert_eq!(parse_decimal("12 mg"), None);
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal("inf"), None);
    }

    #[test]
    fn test_format() {
        assert_eq!(format_decimal(5.4), "5.4");
        assert_eq!(format_decimal(612.0), "612");
        assert_eq!(format_decimal(0.45), "0.45");
        assert_eq!(format_decimal(100.0), "100");
    }
}
