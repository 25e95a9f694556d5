//! Bloodwork normalization pipeline.
//!
//! Ties the shape contract, terminology and value parsers together:
//!
//! - [`parse_bloodwork_file`] validates one report and turns every test into a
//!   [`MetricReading`](bloodwork_model::MetricReading)
//! - [`parse_all_bloodwork_files`] runs that over many reports, isolating
//!   failures per file, and orders the merged readings by collection date
//! - [`grouping`] builds per-metric and per-category views, trend changes and
//!   date windows
//!
//! Everything here works on in-memory values. Reading files is left to the
//! host.

pub mod aggregate;
pub mod file;
pub mod grouping;
pub mod options;

pub use aggregate::{AggregateResult, FileSummary, ReportInput, parse_all_bloodwork_files};
pub use file::{ParsedFile, build_reading, parse_bloodwork_file};
pub use grouping::{
    DateWindow, TrendChange, calculate_change, distinct_dates, group_by_category,
    group_readings_by_metric, sort_chronologically,
};
pub use options::{MatchingMode, NormalizeOptions};
