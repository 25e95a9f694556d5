//! Normalized readings and the groupings built from them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Censoring operator in front of a numeric result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparator {
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "=")]
    Eq,
}

impl Comparator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::Lt => "<",
            Comparator::Gt => ">",
            Comparator::Le => "<=",
            Comparator::Ge => ">=",
            Comparator::Eq => "=",
        }
    }

    /// Parse a comparator symbol. Surrounding whitespace is not accepted.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "<" => Some(Comparator::Lt),
            ">" => Some(Comparator::Gt),
            "<=" => Some(Comparator::Le),
            ">=" => Some(Comparator::Ge),
            "=" => Some(Comparator::Eq),
            _ => None,
        }
    }

    /// True when the true value is only bounded, not known.
    ///
    /// `=` states an exact value and is the only non-censoring comparator.
    pub fn is_censoring(&self) -> bool {
        !matches!(self, Comparator::Eq)
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final classification of a reading against its reference range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flag {
    Low,
    Normal,
    High,
}

impl Flag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::Low => "Low",
            Flag::Normal => "Normal",
            Flag::High => "High",
        }
    }

    /// True for `Low` and `High`.
    pub fn is_abnormal(&self) -> bool {
        !matches!(self, Flag::Normal)
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One normalized lab value.
///
/// Produced once per raw test line; holds no reference back to the report it
/// came from other than the `source_file` label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricReading {
    /// Stable slug derived from `metric_name`.
    pub metric_id: String,
    /// Canonical display name.
    pub metric_name: String,
    pub category: String,
    /// Collection date of the source report.
    pub date: String,
    /// Numeric magnitude, `None` when no number could be extracted.
    pub value: Option<f64>,
    /// Original textual form of the result.
    pub value_text: String,
    pub comparator: Option<Comparator>,
    pub unit: Option<String>,
    pub ref_low: Option<f64>,
    pub ref_high: Option<f64>,
    pub ref_text: Option<String>,
    pub flag: Option<Flag>,
    /// Provenance label of the file the reading came from.
    pub source_file: String,
}

/// All readings of one canonical metric, ordered by date ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricGroup {
    pub metric_id: String,
    pub metric_name: String,
    pub category: String,
    pub unit: Option<String>,
    pub readings: Vec<MetricReading>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MetricGroup {
    /// Most recent reading, if any.
    pub fn latest(&self) -> Option<&MetricReading> {
        self.readings.last()
    }
}
