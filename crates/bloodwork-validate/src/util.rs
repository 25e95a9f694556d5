//! Utility types for validation.

use std::collections::HashMap;

/// A set that performs case-insensitive lookups but preserves original names.
///
/// Used to match enum spellings such as `high` or `h` when lenient matching
/// is enabled.
#[derive(Debug, Clone, Default)]
pub struct CaseInsensitiveSet {
    /// Maps uppercase value -> original spelling
    inner: HashMap<String, &'static str>,
}

impl CaseInsensitiveSet {
    pub fn from_values(values: &[&'static str]) -> Self {
        let mut inner = HashMap::with_capacity(values.len());
        for value in values {
            inner.entry(value.to_uppercase()).or_insert(*value);
        }
        Self { inner }
    }

    /// Get the original spelling for a value (case-insensitive lookup).
    pub fn get(&self, value: &str) -> Option<&'static str> {
        self.inner.get(&value.trim().to_uppercase()).copied()
    }
}
