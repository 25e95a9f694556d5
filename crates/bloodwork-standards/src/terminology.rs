//! Canonical metric vocabulary.
//!
//! A [`Terminology`] joins three lookup tables:
//!
//! - **aliases**: lower-cased vendor test name -> canonical metric name
//!   (many-to-one)
//! - **categories**: exact panel label -> category label
//! - **descriptions**: canonical metric name -> short description
//!
//! Lookups never fail. A test name or panel label with no entry passes
//! through as its own canonical identity, so unrecognized tests are still
//! tracked under their own label.
//!
//! The built-in tables are assembled once on first use and shared by
//! reference; nothing mutates a terminology after it is built.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use serde::Serialize;

use crate::config::TerminologyConfig;
use crate::error::StandardsError;
use crate::slug::slugify;
use crate::tables::{CATEGORY_OVERRIDES, METRIC_ALIASES, METRIC_DESCRIPTIONS};

static BUILTIN: LazyLock<Terminology> = LazyLock::new(Terminology::from_builtin_tables);

/// Result of canonicalizing a raw test name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalMetric {
    /// Canonical display name.
    pub name: String,
    /// Stable id, `slugify(name)`.
    pub id: String,
    /// Whether the name was found in the alias table.
    pub aliased: bool,
}

/// One canonical metric with every alias that resolves to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VocabularyEntry {
    pub name: String,
    pub id: String,
    pub aliases: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Terminology {
    /// Key: trimmed, lower-cased vendor name.
    aliases: BTreeMap<String, String>,
    /// Key: exact panel label.
    categories: BTreeMap<String, String>,
    /// Key: canonical metric name.
    descriptions: BTreeMap<String, String>,
}

impl Terminology {
    /// The built-in vocabulary.
    pub fn builtin() -> &'static Terminology {
        &BUILTIN
    }

    fn from_builtin_tables() -> Self {
        let owned = |table: &[(&str, &str)]| {
            table
                .iter()
                .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
                .collect::<BTreeMap<_, _>>()
        };
        Self {
            aliases: owned(METRIC_ALIASES),
            categories: owned(CATEGORY_OVERRIDES),
            descriptions: owned(METRIC_DESCRIPTIONS),
        }
    }

    /// Build the built-in vocabulary with `config` entries merged over it.
    ///
    /// Config entries replace built-in entries with the same key. The merged
    /// alias table is re-checked for id collisions.
    pub fn with_config(config: &TerminologyConfig) -> Result<Self, StandardsError> {
        let mut terminology = Self::builtin().clone();
        for (raw, canonical) in &config.aliases {
            let key = alias_key(raw);
            let canonical = canonical.trim();
            if key.is_empty() || canonical.is_empty() {
                return Err(StandardsError::EmptyEntry {
                    table: "aliases",
                    key: raw.clone(),
                });
            }
            terminology.aliases.insert(key, canonical.to_string());
        }
        for (label, category) in &config.categories {
            if label.is_empty() || category.trim().is_empty() {
                return Err(StandardsError::EmptyEntry {
                    table: "categories",
                    key: label.clone(),
                });
            }
            terminology
                .categories
                .insert(label.clone(), category.trim().to_string());
        }
        for (name, description) in &config.descriptions {
            terminology
                .descriptions
                .insert(name.trim().to_string(), description.trim().to_string());
        }
        terminology.check_collisions()?;
        tracing::debug!(
            aliases = terminology.aliases.len(),
            categories = terminology.categories.len(),
            "merged terminology config"
        );
        Ok(terminology)
    }

    /// Map a raw vendor test name to its canonical name.
    ///
    /// Returns the trimmed raw name when no alias matches.
    pub fn canonical_name<'a>(&'a self, raw: &'a str) -> &'a str {
        match self.aliases.get(&alias_key(raw)) {
            Some(canonical) => canonical.as_str(),
            None => raw.trim(),
        }
    }

    /// Canonical name plus stable id for a raw test name.
    pub fn resolve(&self, raw: &str) -> CanonicalMetric {
        let key = alias_key(raw);
        let (name, aliased) = match self.aliases.get(&key) {
            Some(canonical) => (canonical.clone(), true),
            None => (raw.trim().to_string(), false),
        };
        CanonicalMetric {
            id: slugify(&name),
            name,
            aliased,
        }
    }

    /// Map a panel label to its category. Exact match only; unmapped labels
    /// are returned unchanged.
    pub fn category<'a>(&'a self, panel_label: &'a str) -> &'a str {
        self.categories
            .get(panel_label)
            .map_or(panel_label, String::as_str)
    }

    /// Description for a canonical metric name, if one is known.
    pub fn describe(&self, metric_name: &str) -> Option<&str> {
        self.descriptions.get(metric_name).map(String::as_str)
    }

    /// Every distinct canonical name reachable through the alias table.
    pub fn canonical_names(&self) -> BTreeSet<&str> {
        self.aliases.values().map(String::as_str).collect()
    }

    /// Canonical names with their ids and aliases, ordered by name.
    pub fn vocabulary(&self) -> Vec<VocabularyEntry> {
        let mut grouped: BTreeMap<&str, Vec<String>> = BTreeMap::new();
        for (alias, canonical) in &self.aliases {
            grouped
                .entry(canonical.as_str())
                .or_default()
                .push(alias.clone());
        }
        grouped
            .into_iter()
            .map(|(name, aliases)| VocabularyEntry {
                name: name.to_string(),
                id: slugify(name),
                aliases,
            })
            .collect()
    }

    /// Fail if two distinct canonical names produce the same metric id.
    pub fn check_collisions(&self) -> Result<(), StandardsError> {
        let mut seen: BTreeMap<String, &str> = BTreeMap::new();
        for name in self.canonical_names() {
            let id = slugify(name);
            if let Some(first) = seen.get(&id) {
                return Err(StandardsError::AliasCollision {
                    id,
                    first: (*first).to_string(),
                    second: name.to_string(),
                });
            }
            seen.insert(id, name);
        }
        Ok(())
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }
}

fn alias_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}
