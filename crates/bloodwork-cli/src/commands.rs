use std::path::Path;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{info_span, trace, warn};

use bloodwork_cli::loader::{collect_report_paths, load_reports};
use bloodwork_cli::logging::redact_value;
use bloodwork_core::{
    DateWindow, MatchingMode, NormalizeOptions, group_readings_by_metric,
    parse_all_bloodwork_files,
};
use bloodwork_standards::{Terminology, TerminologyConfig};

use crate::cli::ParseArgs;
use crate::summary::apply_table_style;
use crate::types::ParseOutcome;

/// Built-in terminology, with the config file merged over it when given.
pub fn load_terminology(config: Option<&Path>) -> Result<Terminology> {
    let Some(path) = config else {
        return Ok(Terminology::builtin().clone());
    };
    let config = TerminologyConfig::load(path)
        .with_context(|| format!("load terminology config {}", path.display()))?;
    Terminology::with_config(&config).context("merge terminology config")
}

pub fn run_aliases(terminology: &Terminology) -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Metric", "Id", "Aliases"]);
    apply_table_style(&mut table);
    for entry in terminology.vocabulary() {
        table.add_row(vec![entry.name, entry.id, entry.aliases.join(", ")]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_parse(args: &ParseArgs, terminology: &Terminology) -> Result<ParseOutcome> {
    let span = info_span!("parse", inputs = args.paths.len());
    let _guard = span.enter();

    let paths = collect_report_paths(&args.paths).context("collect report files")?;
    if paths.is_empty() {
        bail!("no report files found");
    }
    let loaded = load_reports(&paths);

    let flag_matching = if args.lenient_flags {
        MatchingMode::Lenient
    } else {
        MatchingMode::Strict
    };
    let options = NormalizeOptions::new()
        .with_terminology(terminology)
        .with_flag_matching(flag_matching);

    let mut result = parse_all_bloodwork_files(&loaded.inputs, &options);
    for failure in &loaded.failures {
        warn!(file = %failure.source_file, error = %failure.error, "report not loaded");
        result.record_failure(&failure.source_file, failure.error.to_string());
    }

    let window = DateWindow {
        start: args.since,
        end: args.until,
        latest_only: args.latest,
    };
    if !window.is_unbounded() {
        result.readings = window.apply(&result.readings);
    }

    for reading in &result.readings {
        trace!(
            file = %reading.source_file,
            metric = %reading.metric_id,
            value = redact_value(&reading.value_text),
            "reading"
        );
    }

    let groups = group_readings_by_metric(&result.readings, terminology);
    Ok(ParseOutcome {
        result,
        groups,
        window,
    })
}
