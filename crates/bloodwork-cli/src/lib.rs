//! CLI library components for the bloodwork normalizer.

pub mod loader;
pub mod logging;
