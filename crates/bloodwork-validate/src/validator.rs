//! Contract evaluator.
//!
//! Walks a JSON value against a [`Kind`], recording every failure with its
//! field path instead of stopping at the first one. Under lenient matching,
//! enum values are repaired in place (canonical spelling, or `null` with a
//! warning), which is why the evaluator works on an owned, mutable value.

use std::fmt;

use serde_json::Value;

use bloodwork_model::{SchemaIssue, SchemaReport};

use crate::contract::{Field, Kind, Presence};
use crate::util::CaseInsensitiveSet;

/// How closed enums (author flags) are matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchingMode {
    /// Exact spelling required; anything else rejects the file.
    #[default]
    Strict,
    /// Case-insensitive match; unrecognized values on nullable fields are
    /// dropped with a warning.
    Lenient,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    pub flag_matching: MatchingMode,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flag_matching(mut self, mode: MatchingMode) -> Self {
        self.flag_matching = mode;
        self
    }
}

#[derive(Debug, Clone)]
enum Segment {
    Key(&'static str),
    Index(usize),
}

/// Location of a value inside the document, e.g. `panels[0].tests[2].unit`.
#[derive(Debug, Clone, Default)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    fn push_key(&mut self, key: &'static str) {
        self.segments.push(Segment::Key(key));
    }

    fn push_index(&mut self, index: usize) {
        self.segments.push(Segment::Index(index));
    }

    fn pop(&mut self) {
        self.segments.pop();
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("(root)");
        }
        for (idx, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(key) if idx == 0 => f.write_str(key)?,
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// JSON type name used in failure messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

pub struct Evaluator {
    options: ValidationOptions,
    path: FieldPath,
    report: SchemaReport,
}

impl Evaluator {
    pub fn new(options: ValidationOptions) -> Self {
        Self {
            options,
            path: FieldPath::default(),
            report: SchemaReport::default(),
        }
    }

    /// Evaluate `value` against `kind`, consuming the evaluator.
    pub fn run(mut self, kind: &Kind, value: &mut Value) -> SchemaReport {
        self.check(kind, value, false);
        self.report
    }

    fn error(&mut self, message: impl Into<String>) {
        self.report
            .push(SchemaIssue::error(self.path.to_string(), message));
    }

    fn warning(&mut self, message: impl Into<String>) {
        self.report
            .push(SchemaIssue::warning(self.path.to_string(), message));
    }

    fn mismatch(&mut self, kind: &Kind, value: &Value) {
        self.error(format!(
            "expected {}, found {}",
            kind.describe(),
            json_type_name(value)
        ));
    }

    fn check(&mut self, kind: &Kind, value: &mut Value, nullable: bool) {
        match kind {
            Kind::String => {
                if !value.is_string() {
                    self.mismatch(kind, value);
                }
            }
            Kind::Number => {
                if !value.is_number() {
                    self.mismatch(kind, value);
                }
            }
            Kind::Union(kinds) => {
                if !kinds.iter().any(|candidate| accepts(candidate, value)) {
                    self.mismatch(kind, value);
                }
            }
            Kind::Nullable(inner) => {
                if value.is_null() {
                    return;
                }
                if !accepts(inner, value) {
                    self.mismatch(kind, value);
                    return;
                }
                self.check(inner, value, true);
            }
            Kind::Enum(values) => self.check_enum(kind, *values, value, nullable),
            Kind::List(item) => {
                if let Value::Array(items) = value {
                    for (index, element) in items.iter_mut().enumerate() {
                        self.path.push_index(index);
                        self.check(item, element, false);
                        self.path.pop();
                    }
                } else {
                    self.mismatch(kind, value);
                }
            }
            Kind::Object(fields) => {
                if let Value::Object(map) = value {
                    for field in fields.iter() {
                        self.path.push_key(field.name);
                        match map.get_mut(field.name) {
                            None => self.missing(field),
                            Some(Value::Null) if field.presence == Presence::Optional => {}
                            Some(child) => self.check(&field.kind, child, false),
                        }
                        self.path.pop();
                    }
                } else {
                    self.mismatch(kind, value);
                }
            }
        }
    }

    fn missing(&mut self, field: &Field) {
        if field.presence == Presence::Required {
            self.error("required field is missing");
        }
    }

    fn check_enum(
        &mut self,
        kind: &Kind,
        values: &'static [&'static str],
        value: &mut Value,
        nullable: bool,
    ) {
        let Some(text) = value.as_str().map(str::to_string) else {
            self.mismatch(kind, value);
            return;
        };
        if values.contains(&text.as_str()) {
            return;
        }
        match self.options.flag_matching {
            MatchingMode::Strict => {
                let message = format!("expected {}, found {text:?}", kind.describe());
                self.error(message);
            }
            MatchingMode::Lenient => {
                let lookup = CaseInsensitiveSet::from_values(values);
                if let Some(canonical) = lookup.get(&text) {
                    *value = Value::String(canonical.to_string());
                } else if nullable {
                    let message = format!("unrecognized value {text:?} ignored");
                    tracing::warn!(path = %self.path, "{message}");
                    self.warning(message);
                    *value = Value::Null;
                } else {
                    let message = format!("expected {}, found {text:?}", kind.describe());
                    self.error(message);
                }
            }
        }
    }
}

/// Shallow type test used for unions and nullable wrappers.
fn accepts(kind: &Kind, value: &Value) -> bool {
    match kind {
        Kind::String | Kind::Enum(_) => value.is_string(),
        Kind::Number => value.is_number(),
        Kind::Union(kinds) => kinds.iter().any(|candidate| accepts(candidate, value)),
        Kind::Nullable(inner) => value.is_null() || accepts(inner, value),
        Kind::List(_) => value.is_array(),
        Kind::Object(_) => value.is_object(),
    }
}
