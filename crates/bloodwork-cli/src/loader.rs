//! Report discovery and loading from disk.
//!
//! Directories are scanned one level deep for `.json` files, sorted by file
//! name. A file that cannot be read or parsed is reported under its name and
//! never stops the others from loading.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use bloodwork_core::ReportInput;
use bloodwork_model::{BloodworkError, Result};

/// A file that could not be turned into a report value.
#[derive(Debug)]
pub struct LoadFailure {
    pub source_file: String,
    pub error: BloodworkError,
}

#[derive(Debug, Default)]
pub struct LoadedReports {
    pub inputs: Vec<ReportInput>,
    pub failures: Vec<LoadFailure>,
}

/// Expand the given paths into report files.
///
/// Explicit files are kept as given, even without a `.json` extension.
/// A directory that cannot be listed is an error.
pub fn collect_report_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut entries = Vec::new();
            for entry in fs::read_dir(path)? {
                let entry_path = entry?.path();
                if entry_path.is_file() && is_json(&entry_path) {
                    entries.push(entry_path);
                }
            }
            entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
            debug!(dir = %path.display(), files = entries.len(), "scanned directory");
            files.extend(entries);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

/// Read and parse one report file.
pub fn load_report(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(BloodworkError::Message("file is empty".to_string()));
    }
    Ok(serde_json::from_str(&content)?)
}

/// Load every file, separating parsed reports from failures.
pub fn load_reports(paths: &[PathBuf]) -> LoadedReports {
    let mut loaded = LoadedReports::default();
    for path in paths {
        let source_file = source_label(path);
        match load_report(path) {
            Ok(data) => loaded.inputs.push(ReportInput::new(source_file, data)),
            Err(error) => loaded.failures.push(LoadFailure { source_file, error }),
        }
    }
    loaded
}

/// Label used to namespace a file's readings and errors.
pub fn source_label(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
