//! User-supplied vocabulary extensions.
//!
//! ```toml
//! [aliases]
//! "hs-crp" = "Cardiac CRP"
//!
//! [categories]
//! "Iron Panel" = "Iron Studies"
//!
//! [descriptions]
//! "Apolipoprotein B" = "Atherogenic lipoprotein particle count."
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StandardsError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TerminologyConfig {
    /// Vendor test name -> canonical metric name.
    pub aliases: BTreeMap<String, String>,
    /// Exact panel label -> category.
    pub categories: BTreeMap<String, String>,
    /// Canonical metric name -> description.
    pub descriptions: BTreeMap<String, String>,
}

impl TerminologyConfig {
    /// Read a TOML config file.
    pub fn load(path: &Path) -> Result<Self, StandardsError> {
        let contents = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
        toml::from_str(&contents).map_err(|e| StandardsError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty() && self.categories.is_empty() && self.descriptions.is_empty()
    }
}
