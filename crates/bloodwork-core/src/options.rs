//! Normalization options.

use bloodwork_standards::Terminology;
pub use bloodwork_validate::MatchingMode;
use bloodwork_validate::ValidationOptions;

/// Options shared by every file in a normalization run.
///
/// The terminology is borrowed: the built-in tables are a process-wide
/// static and a merged terminology is built once by the host.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeOptions<'a> {
    /// Alias, category and description tables.
    pub terminology: &'a Terminology,
    /// How author flags are matched against `High`/`Low`/`H`/`L`.
    pub flag_matching: MatchingMode,
}

impl Default for NormalizeOptions<'_> {
    fn default() -> Self {
        Self {
            terminology: Terminology::builtin(),
            flag_matching: MatchingMode::Strict,
        }
    }
}

impl<'a> NormalizeOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the terminology used for names, categories and descriptions.
    pub fn with_terminology(mut self, terminology: &'a Terminology) -> Self {
        self.terminology = terminology;
        self
    }

    /// Sets the author flag matching mode.
    pub fn with_flag_matching(mut self, mode: MatchingMode) -> Self {
        self.flag_matching = mode;
        self
    }

    pub(crate) fn validation(&self) -> ValidationOptions {
        ValidationOptions::new().with_flag_matching(self.flag_matching)
    }
}
