//! Normalization of raw lab values.
//!
//! - **result**: numeric, censored and qualitative results
//! - **range**: reference range notations
//! - **datetime**: collection dates for ordering
//! - **numeric**: decimal parsing shared by the parsers

pub mod datetime;
pub mod numeric;
pub mod range;
pub mod result;

pub use datetime::parse_collection_date;
pub use numeric::{format_decimal, parse_decimal};
pub use range::{ParsedRange, RangeNotation, parse_range};
pub use result::{ParsedResult, parse_result};
