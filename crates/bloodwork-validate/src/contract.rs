//! Declarative description of the raw report shape.
//!
//! A contract is plain static data: fields with a presence rule and a value
//! kind. The evaluator in [`crate::validator`] walks a JSON value against it.

/// Whether a field key must appear in its object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// The key must be present. Nullability is decided by the kind.
    Required,
    /// The key may be absent or `null`.
    Optional,
}

/// Accepted shape of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    String,
    Number,
    /// Any of the listed kinds.
    Union(&'static [Kind]),
    /// `null` or the inner kind.
    Nullable(&'static Kind),
    /// A string from a closed set.
    Enum(&'static [&'static str]),
    List(&'static Kind),
    Object(&'static [Field]),
}

impl Kind {
    /// Short description used in failure messages, e.g. `number or string`.
    pub fn describe(&self) -> String {
        match self {
            Kind::String => "string".to_string(),
            Kind::Number => "number".to_string(),
            Kind::Union(kinds) => kinds
                .iter()
                .map(Kind::describe)
                .collect::<Vec<_>>()
                .join(" or "),
            Kind::Nullable(inner) => format!("{} or null", inner.describe()),
            Kind::Enum(values) => format!("one of {}", values.join(", ")),
            Kind::List(_) => "list".to_string(),
            Kind::Object(_) => "object".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub presence: Presence,
    pub kind: Kind,
}

impl Field {
    pub const fn required(name: &'static str, kind: Kind) -> Self {
        Self {
            name,
            presence: Presence::Required,
            kind,
        }
    }

    pub const fn optional(name: &'static str, kind: Kind) -> Self {
        Self {
            name,
            presence: Presence::Optional,
            kind,
        }
    }
}

/// Accepted author flag spellings.
pub const FLAG_VALUES: &[&str] = &["High", "Low", "H", "L"];

pub const TEST_FIELDS: &[Field] = &[
    Field::required("name", Kind::String),
    Field::required("result", Kind::Union(&[Kind::Number, Kind::String])),
    Field::required("unit", Kind::Nullable(&Kind::String)),
    Field::required("reference_range", Kind::Nullable(&Kind::String)),
    Field::optional("flag", Kind::Nullable(&Kind::Enum(FLAG_VALUES))),
    Field::optional("comments", Kind::String),
];

pub const PANEL_FIELDS: &[Field] = &[
    Field::required("panel_name", Kind::String),
    Field::required("tests", Kind::List(&Kind::Object(TEST_FIELDS))),
];

pub const FILE_FIELDS: &[Field] = &[
    Field::required("collection_date", Kind::String),
    Field::optional("report_date", Kind::String),
    Field::required("panels", Kind::List(&Kind::Object(PANEL_FIELDS))),
];

/// Contract for a whole report file.
pub const BLOODWORK_FILE: Kind = Kind::Object(FILE_FIELDS);
