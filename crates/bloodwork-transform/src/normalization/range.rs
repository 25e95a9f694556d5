//! Reference range parsing.
//!
//! Vendors write ranges as `50-100`, `>59`, `40<`, `<200`, or a bare
//! ceiling such as `5.6`. The first matching
//! notation wins; anything unrecognized keeps its display text and has no
//! bounds.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::numeric::parse_decimal;

static BOUNDED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+\.?\d*)\s*-\s*(\d+\.?\d*)$").expect("Invalid bounded range regex")
});

static FLOOR_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^>=?\s*(\d+\.?\d*)$").expect("Invalid floor range regex"));

static FLOOR_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+\.?\d*)\s*<=?$").expect("Invalid floor range regex"));

static CEILING_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<=?\s*(\d+\.?\d*)$").expect("Invalid ceiling range regex"));

static BARE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+\.?\d*)$").expect("Invalid bare range regex"));

/// Which notation a range was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeNotation {
    /// `low - high`
    Bounded,
    /// `>x`, `>=x`, `x<`, `x<=`
    Floor,
    /// `<x`, `<=x`
    Ceiling,
    /// A bare number, read as an upper limit.
    ImplicitCeiling,
    /// Text that carries no bounds.
    Unrecognized,
    /// Null or blank.
    Absent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRange {
    pub ref_low: Option<f64>,
    pub ref_high: Option<f64>,
    /// Original text, verbatim; `None` when the range was null or blank.
    pub ref_text: Option<String>,
    pub notation: RangeNotation,
}

impl ParsedRange {
    fn absent() -> Self {
        Self {
            ref_low: None,
            ref_high: None,
            ref_text: None,
            notation: RangeNotation::Absent,
        }
    }

    fn with_text(text: &str, notation: RangeNotation) -> Self {
        Self {
            ref_low: None,
            ref_high: None,
            ref_text: Some(text.to_string()),
            notation,
        }
    }

    pub fn has_bounds(&self) -> bool {
        self.ref_low.is_some() || self.ref_high.is_some()
    }
}

/// Parse a raw reference range. Never fails.
pub fn parse_range(range: Option<&str>) -> ParsedRange {
    let Some(text) = range else {
        return ParsedRange::absent();
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return ParsedRange::absent();
    }

    let capture = |re: &Regex, group: usize| {
        re.captures(trimmed)
            .and_then(|captures| parse_decimal(&captures[group]))
    };

    if let Some(captures) = BOUNDED.captures(trimmed)
        && let Some(low) = parse_decimal(&captures[1])
        && let Some(high) = parse_decimal(&captures[2])
    {
        let mut parsed = ParsedRange::with_text(text, RangeNotation::Bounded);
        parsed.ref_low = Some(low);
        parsed.ref_high = Some(high);
        return parsed;
    }

    if let Some(low) = capture(&FLOOR_PREFIX, 1).or_else(|| capture(&FLOOR_SUFFIX, 1)) {
        let mut parsed = ParsedRange::with_text(text, RangeNotation::Floor);
        parsed.ref_low = Some(low);
        return parsed;
    }

    if let Some(high) = capture(&CEILING_PREFIX, 1) {
        let mut parsed = ParsedRange::with_text(text, RangeNotation::Ceiling);
        parsed.ref_high = Some(high);
        return parsed;
    }

    if let Some(high) = capture(&BARE_NUMBER, 1) {
        let mut parsed = ParsedRange::with_text(text, RangeNotation::ImplicitCeiling);
        parsed.ref_high = Some(high);
        return parsed;
    }

    trace!(chars = trimmed.len(), "reference range has no recognized notation");
    ParsedRange::with_text(text, RangeNotation::Unrecognized)
}
