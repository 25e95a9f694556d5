//! High/Low/Normal classification of a reading.

use bloodwork_model::{AuthorFlag, Flag};

use crate::normalization::{ParsedRange, ParsedResult};

/// Resolve the final flag for a reading. The first matching rule wins:
///
/// 1. author flag `High`/`H` gives [`Flag::High`]
/// 2. author flag `Low`/`L` gives [`Flag::Low`]
/// 3. a censored result (`<x`, `>x`) is never classified
/// 4. a value below the low bound is [`Flag::Low`]
/// 5. a value above the high bound is [`Flag::High`]
/// 6. a value with any bound is [`Flag::Normal`]
/// 7. otherwise no flag
///
/// Comparisons are strict, so a value equal to a bound is normal.
pub fn resolve_flag(
    author: Option<AuthorFlag>,
    result: &ParsedResult,
    range: &ParsedRange,
) -> Option<Flag> {
    if let Some(author) = author {
        if author.is_high() {
            return Some(Flag::High);
        }
        if author.is_low() {
            return Some(Flag::Low);
        }
    }

    if result.is_censored() {
        return None;
    }

    let value = result.value?;
    if let Some(low) = range.ref_low
        && value < low
    {
        return Some(Flag::Low);
    }
    if let Some(high) = range.ref_high
        && value > high
    {
        return Some(Flag::High);
    }
    range.has_bounds().then_some(Flag::Normal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalization::{parse_range, parse_result};
    use bloodwork_model::{Comparator, ResultValue};

    fn flag_for(author: Option<AuthorFlag>, result: ResultValue, range: Option<&str>) -> Option<Flag> {
        resolve_flag(author, &parse_result(&result), &parse_range(range))
    }

    #[test]
    fn computed_against_bounds() {
        let range = Some("50-100");
        assert_eq!(flag_for(None, ResultValue::Numeric(150.0), range), Some(Flag::High));
        assert_eq!(flag_for(None, ResultValue::Numeric(30.0), range), Some(Flag::Low));
        assert_eq!(flag_for(None, ResultValue::Numeric(75.0), range), Some(Flag::Normal));
        assert_eq!(flag_for(None, ResultValue::Numeric(100.0), range), Some(Flag::Normal));
        assert_eq!(flag_for(None, ResultValue::Numeric(50.0), range), Some(Flag::Normal));
    }

    #[test]
    fn author_flag_wins() {
        let range = Some("50-100");
        assert_eq!(flag_for(Some(AuthorFlag::H), ResultValue::Numeric(75.0), range), Some(Flag::High));
        assert_eq!(flag_for(Some(AuthorFlag::High), "<5".into(), None), Some(Flag::High));
        assert_eq!(flag_for(Some(AuthorFlag::L), ResultValue::Numeric(150.0), range), Some(Flag::Low));
        assert_eq!(flag_for(Some(AuthorFlag::Low), "Negative".into(), None), Some(Flag::Low));
    }

    #[test]
    fn censored_results_are_unflagged() {
        assert_eq!(flag_for(None, "<5.0".into(), Some("50-100")), None);
        assert_eq!(flag_for(None, ">90".into(), Some("<60")), None);
    }

    #[test]
    fn one_sided_bounds() {
        assert_eq!(flag_for(None, ResultValue::Numeric(45.0), Some(">59")), Some(Flag::Low));
        assert_eq!(flag_for(None, ResultValue::Numeric(70.0), Some(">59")), Some(Flag::Normal));
        assert_eq!(flag_for(None, ResultValue::Numeric(210.0), Some("<200")), Some(Flag::High));
    }

    #[test]
    fn exact_comparator_is_classified() {
        let result = ParsedResult {
            value: Some(150.0),
            value_text: "=150".to_string(),
            comparator: Some(Comparator::Eq),
        };
        assert_eq!(
            resolve_flag(None, &result, &parse_range(Some("50-100"))),
            Some(Flag::High)
        );
    }

    #[test]
    fn nothing_to_compare() {
        assert_eq!(flag_for(None, "Negative".into(), Some("50-100")), None);
        assert_eq!(flag_for(None, ResultValue::Numeric(75.0), None), None);
        assert_eq!(flag_for(None, ResultValue::Numeric(75.0), Some("see note")), None);
    }
}
