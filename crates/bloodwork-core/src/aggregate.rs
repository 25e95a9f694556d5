//! Multi-file aggregation.
//!
//! Files are normalized independently; a rejected file contributes its
//! errors and nothing else. The merged readings are put in chronological
//! order with a stable sort, so input order only breaks ties between
//! readings collected on the same date.

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use bloodwork_model::MetricReading;

use crate::file::parse_bloodwork_file;
use crate::grouping::sort_chronologically;
use crate::options::NormalizeOptions;

/// One report value with the label used to namespace its errors.
#[derive(Debug, Clone)]
pub struct ReportInput {
    pub source_file: String,
    pub data: Value,
}

impl ReportInput {
    pub fn new(source_file: impl Into<String>, data: Value) -> Self {
        Self {
            source_file: source_file.into(),
            data,
        }
    }
}

/// Per-file counts for host reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSummary {
    pub source_file: String,
    pub date: Option<String>,
    pub readings: usize,
    pub errors: usize,
    pub warnings: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AggregateResult {
    pub readings: Vec<MetricReading>,
    /// `"<filename>: <message>"`
    pub errors: Vec<String>,
    /// `"<filename>: <message>"`
    pub warnings: Vec<String>,
    pub files: Vec<FileSummary>,
}

impl AggregateResult {
    /// Record a file that could not be turned into a report value at all
    /// (unreadable, not JSON).
    pub fn record_failure(&mut self, source_file: &str, message: impl AsRef<str>) {
        self.errors
            .push(format!("{source_file}: {}", message.as_ref()));
        self.files.push(FileSummary {
            source_file: source_file.to_string(),
            date: None,
            readings: 0,
            errors: 1,
            warnings: 0,
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Normalize every input and merge the results.
pub fn parse_all_bloodwork_files(
    inputs: &[ReportInput],
    options: &NormalizeOptions<'_>,
) -> AggregateResult {
    let mut result = AggregateResult::default();
    for input in inputs {
        merge_file(&mut result, input, options);
    }
    sort_chronologically(&mut result.readings);
    info!(
        files = inputs.len(),
        readings = result.readings.len(),
        errors = result.errors.len(),
        "aggregation complete"
    );
    result
}

fn merge_file(result: &mut AggregateResult, input: &ReportInput, options: &NormalizeOptions<'_>) {
    let parsed = parse_bloodwork_file(&input.data, &input.source_file, options);
    let namespaced = |message: String| format!("{}: {message}", input.source_file);

    result.files.push(FileSummary {
        source_file: parsed.source_file.clone(),
        date: parsed.collection_date.clone(),
        readings: parsed.readings.len(),
        errors: parsed.report.error_count(),
        warnings: parsed.report.warning_count(),
    });
    result
        .errors
        .extend(parsed.errors().into_iter().map(namespaced));
    result
        .warnings
        .extend(parsed.warnings().into_iter().map(namespaced));
    result.readings.extend(parsed.readings);
}
