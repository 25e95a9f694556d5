//! Normalization of a single report file.
//!
//! A file is validated against the report contract first. A structural
//! failure rejects the whole file: the result carries every failure and no
//! readings. A valid file yields exactly one reading per test, in panel and
//! test order.

use serde_json::Value;
use tracing::{debug, trace, warn};

use bloodwork_model::{MetricReading, RawFile, RawTest, SchemaReport};
use bloodwork_standards::Terminology;
use bloodwork_transform::{parse_range, parse_result, resolve_flag};
use bloodwork_validate::validate_report;

use crate::options::NormalizeOptions;

/// Outcome of normalizing one file.
#[derive(Debug, Clone, Default)]
pub struct ParsedFile {
    pub source_file: String,
    /// Collection date, when the file was valid.
    pub collection_date: Option<String>,
    pub readings: Vec<MetricReading>,
    /// Structural errors (file rejected) and lenient-mode warnings.
    pub report: SchemaReport,
}

impl ParsedFile {
    pub fn is_rejected(&self) -> bool {
        self.report.has_errors()
    }

    /// Error messages, each `"<path>: <message>"`.
    pub fn errors(&self) -> Vec<String> {
        self.report.errors().map(ToString::to_string).collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.report.warnings().map(ToString::to_string).collect()
    }
}

/// Validate and normalize one report value.
pub fn parse_bloodwork_file(
    data: &Value,
    source_file: &str,
    options: &NormalizeOptions<'_>,
) -> ParsedFile {
    let span = tracing::debug_span!("parse_file", file = %source_file);
    let _guard = span.enter();

    let validated = match validate_report(data, options.validation()) {
        Ok(validated) => validated,
        Err(report) => {
            warn!(errors = report.error_count(), "report rejected");
            return ParsedFile {
                source_file: source_file.to_string(),
                collection_date: None,
                readings: Vec::new(),
                report,
            };
        }
    };

    let readings = build_readings(&validated.file, source_file, options.terminology);
    debug!(
        date = %validated.file.collection_date,
        panels = validated.file.panels.len(),
        readings = readings.len(),
        "report normalized"
    );
    ParsedFile {
        source_file: source_file.to_string(),
        collection_date: Some(validated.file.collection_date),
        readings,
        report: validated.report,
    }
}

fn build_readings(
    file: &RawFile,
    source_file: &str,
    terminology: &Terminology,
) -> Vec<MetricReading> {
    let mut readings = Vec::with_capacity(file.test_count());
    for panel in &file.panels {
        let category = terminology.category(&panel.panel_name);
        for test in &panel.tests {
            let reading = build_reading(
                test,
                category,
                &file.collection_date,
                source_file,
                terminology,
            );
            trace!(metric = %reading.metric_id, flag = ?reading.flag, "reading normalized");
            readings.push(reading);
        }
    }
    readings
}

/// Build one reading from a validated test line.
pub fn build_reading(
    test: &RawTest,
    category: &str,
    date: &str,
    source_file: &str,
    terminology: &Terminology,
) -> MetricReading {
    let metric = terminology.resolve(&test.name);
    let result = parse_result(&test.result);
    let range = parse_range(test.reference_range.as_deref());
    let flag = resolve_flag(test.flag, &result, &range);

    MetricReading {
        metric_id: metric.id,
        metric_name: metric.name,
        category: category.to_string(),
        date: date.to_string(),
        value: result.value,
        value_text: result.value_text,
        comparator: result.comparator,
        unit: test
            .unit
            .as_deref()
            .map(str::trim)
            .filter(|unit| !unit.is_empty())
            .map(str::to_string),
        ref_low: range.ref_low,
        ref_high: range.ref_high,
        ref_text: range.ref_text,
        flag,
        source_file: source_file.to_string(),
    }
}
