//! Tests for the canonical metric vocabulary.

use std::io::Write;

use bloodwork_standards::{StandardsError, Terminology, TerminologyConfig, slugify};
use proptest::prelude::*;

#[test]
fn tsh_aliases_share_metric_id() {
    let terminology = Terminology::builtin();
    let short = terminology.resolve("tsh");
    let long = terminology.resolve("Thyroid Stimulating Hormone");
    assert_eq!(short.id, long.id);
    assert_eq!(short.name, "TSH");
    assert!(short.aliased && long.aliased);
}

#[test]
fn every_family_is_covered() {
    let terminology = Terminology::builtin();
    let cases = [
        ("Free T4 (Direct)", "Free T4"),
        ("LDL Chol Calc (NIH)", "LDL-C"),
        ("Lymphs (Absolute)", "Lymphocytes Abs"),
        ("AST (SGOT)", "AST"),
        ("Testosterone", "Total Testosterone"),
        ("Hemoglobin A1c", "HbA1c"),
    ];
    for (raw, canonical) in cases {
        assert_eq!(terminology.canonical_name(raw), canonical, "alias for {raw}");
    }
}

#[test]
fn categories_from_panel_labels() {
    let terminology = Terminology::builtin();
    assert_eq!(terminology.category("CBC with Diff, Platelet, NLR"), "CBC");
    assert_eq!(terminology.category("Hormones / Other"), "Hormones");
    assert_eq!(
        terminology.category("Comprehensive Metabolic Panel (14)"),
        "Metabolic Panel"
    );
    assert_eq!(terminology.category("Urinalysis"), "Urinalysis");
}

#[test]
fn descriptions_are_keyed_by_canonical_name() {
    let terminology = Terminology::builtin();
    assert!(terminology.describe("HbA1c").is_some());
    assert!(terminology.describe("hemoglobin a1c").is_none());
}

#[test]
fn config_merges_over_builtin() {
    let mut config = TerminologyConfig::default();
    config
        .aliases
        .insert("  HS-CRP ".to_string(), "Cardiac CRP".to_string());
    config
        .categories
        .insert("Iron Panel".to_string(), "Iron Studies".to_string());
    let terminology = Terminology::with_config(&config).expect("merge config");
    assert_eq!(terminology.canonical_name("hs-crp"), "Cardiac CRP");
    assert_eq!(terminology.category("Iron Panel"), "Iron Studies");
    assert_eq!(terminology.canonical_name("tsh"), "TSH");
    assert_eq!(
        terminology.alias_count(),
        Terminology::builtin().alias_count() + 1
    );
}

#[test]
fn config_collision_is_rejected() {
    let mut config = TerminologyConfig::default();
    // "Total-Cholesterol" slugs to the same id as the built-in "Total Cholesterol".
    config
        .aliases
        .insert("tc".to_string(), "Total-Cholesterol".to_string());
    let error = Terminology::with_config(&config).expect_err("collision");
    match error {
        StandardsError::AliasCollision { id, .. } => assert_eq!(id, "total_cholesterol"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn config_empty_entry_is_rejected() {
    let mut config = TerminologyConfig::default();
    config.aliases.insert("   ".to_string(), "TSH".to_string());
    assert!(matches!(
        Terminology::with_config(&config),
        Err(StandardsError::EmptyEntry { table: "aliases", .. })
    ));
}

#[test]
fn config_loads_from_toml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[aliases]\n\"apo b\" = \"Apolipoprotein B\"\n\n[categories]\n\"Lipoproteins\" = \"Lipids\""
    )
    .unwrap();
    let config = TerminologyConfig::load(file.path()).expect("load config");
    assert_eq!(
        config.aliases.get("apo b").map(String::as_str),
        Some("Apolipoprotein B")
    );
    assert!(config.descriptions.is_empty());
    assert!(!config.is_empty());
}

#[test]
fn config_rejects_unknown_tables() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[synonyms]\n\"a\" = \"b\"").unwrap();
    assert!(matches!(
        TerminologyConfig::load(file.path()),
        Err(StandardsError::Toml { .. })
    ));
}

#[test]
fn missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(matches!(
        TerminologyConfig::load(&path),
        Err(StandardsError::Io { .. })
    ));
}

proptest! {
    #[test]
    fn slugify_is_idempotent(name in "\\PC{0,40}") {
        let once = slugify(&name);
        prop_assert_eq!(slugify(&once), once.clone());
    }

    #[test]
    fn slugify_output_alphabet(name in "\\PC{0,40}") {
        let slug = slugify(&name);
        prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
        prop_assert!(!slug.starts_with('_') && !slug.ends_with('_'));
        prop_assert!(!slug.contains("__"));
    }
}
