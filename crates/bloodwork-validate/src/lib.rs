//! Shape validation for raw bloodwork reports.
//!
//! A report either satisfies the [`contract::BLOODWORK_FILE`] contract and
//! decodes into a typed [`RawFile`], or it is rejected with every failing
//! field path. There is no partial acceptance: without a trustworthy shape,
//! test/panel associations cannot be trusted either.

pub mod contract;
mod util;
pub mod validator;

pub use validator::{Evaluator, FieldPath, MatchingMode, ValidationOptions, json_type_name};

use serde_json::Value;

use bloodwork_model::{RawFile, SchemaIssue, SchemaReport};

/// A report that passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedReport {
    pub file: RawFile,
    /// Warnings only (lenient repairs). Never contains errors.
    pub report: SchemaReport,
}

/// Validate an arbitrary JSON value against the report contract.
///
/// Returns the typed report on success, or the full list of issues when any
/// error was found.
pub fn validate_report(
    value: &Value,
    options: ValidationOptions,
) -> Result<ValidatedReport, SchemaReport> {
    let mut working = value.clone();
    let mut report = Evaluator::new(options).run(&contract::BLOODWORK_FILE, &mut working);
    if report.has_errors() {
        return Err(report);
    }
    match serde_json::from_value::<RawFile>(working) {
        Ok(file) => Ok(ValidatedReport { file, report }),
        Err(error) => {
            report.push(SchemaIssue::error(
                "(root)",
                format!("could not decode report: {error}"),
            ));
            Err(report)
        }
    }
}
