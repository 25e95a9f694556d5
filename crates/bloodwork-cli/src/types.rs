use bloodwork_core::{AggregateResult, DateWindow};
use bloodwork_model::MetricGroup;

#[derive(Debug)]
pub struct ParseOutcome {
    /// Aggregated readings (after the date window) and every file error.
    pub result: AggregateResult,
    pub groups: Vec<MetricGroup>,
    pub window: DateWindow,
}

impl ParseOutcome {
    pub fn has_errors(&self) -> bool {
        self.result.has_errors()
    }
}
