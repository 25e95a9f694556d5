//! Raw lab report shape, as authored by a lab export or an extraction step.
//!
//! These types are only ever produced from a value that has already passed
//! the shape contract in `bloodwork-validate`. A report is accepted as a
//! whole or not at all.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One lab report file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFile {
    /// Collection date as written by the lab (usually `YYYY-MM-DD`).
    pub collection_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_date: Option<String>,
    pub panels: Vec<RawPanel>,
}

impl RawFile {
    /// Total number of tests across all panels.
    pub fn test_count(&self) -> usize {
        self.panels.iter().map(|panel| panel.tests.len()).sum()
    }
}

/// A named group of tests reported together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPanel {
    pub panel_name: String,
    pub tests: Vec<RawTest>,
}

/// A single test line inside a panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTest {
    pub name: String,
    pub result: ResultValue,
    pub unit: Option<String>,
    pub reference_range: Option<String>,
    #[serde(default)]
    pub flag: Option<AuthorFlag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

/// A result as reported: either a JSON number or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultValue {
    Numeric(f64),
    Textual(String),
}

impl From<f64> for ResultValue {
    fn from(value: f64) -> Self {
        ResultValue::Numeric(value)
    }
}

impl From<&str> for ResultValue {
    fn from(value: &str) -> Self {
        ResultValue::Textual(value.to_string())
    }
}

/// Abnormal flag printed by the lab next to a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthorFlag {
    High,
    Low,
    H,
    L,
}

impl AuthorFlag {
    /// Every accepted spelling, in contract order.
    pub const ALL: [AuthorFlag; 4] = [
        AuthorFlag::High,
        AuthorFlag::Low,
        AuthorFlag::H,
        AuthorFlag::L,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthorFlag::High => "High",
            AuthorFlag::Low => "Low",
            AuthorFlag::H => "H",
            AuthorFlag::L => "L",
        }
    }

    /// True for `High` and `H`.
    pub fn is_high(&self) -> bool {
        matches!(self, AuthorFlag::High | AuthorFlag::H)
    }

    /// True for `Low` and `L`.
    pub fn is_low(&self) -> bool {
        matches!(self, AuthorFlag::Low | AuthorFlag::L)
    }
}

impl fmt::Display for AuthorFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
