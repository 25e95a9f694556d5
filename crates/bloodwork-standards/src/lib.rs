#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod slug;
pub mod tables;
pub mod terminology;

pub use crate::config::TerminologyConfig;
pub use crate::error::StandardsError;
pub use crate::slug::slugify;
pub use crate::terminology::{CanonicalMetric, Terminology, VocabularyEntry};
