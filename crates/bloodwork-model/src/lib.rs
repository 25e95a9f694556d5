pub mod error;
pub mod issue;
pub mod raw;
pub mod reading;

pub use error::{BloodworkError, Result};
pub use issue::{IssueSeverity, SchemaIssue, SchemaReport};
pub use raw::{AuthorFlag, RawFile, RawPanel, RawTest, ResultValue};
pub use reading::{Comparator, Flag, MetricGroup, MetricReading};
