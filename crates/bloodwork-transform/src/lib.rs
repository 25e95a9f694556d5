//! Lab value normalization.
//!
//! This crate turns the raw pieces of a lab test into typed values:
//!
//! - **normalization**: result, reference range and collection date parsing
//! - **flag**: High/Low/Normal resolution from the parsed pieces
//!
//! Every parser here is total. Unrecognized input keeps its display text and
//! simply carries no numeric information.

pub mod flag;
pub mod normalization;
pub use normalization::datetime;

pub use flag::resolve_flag;
pub use normalization::{
    ParsedRange, ParsedResult, RangeNotation, parse_collection_date, parse_range, parse_result,
};
