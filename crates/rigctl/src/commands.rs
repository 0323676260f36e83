//! Command execution.

use crate::display;
use crate::parts_file;
use anyhow::Result;
use rigcheck::{Evaluator, PartsSelection, PowerHeuristics};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Evaluation only makes sense once two categories are in play; below
/// that the bundle is trivially compatible and the engine is skipped.
const MIN_PARTS_FOR_EVALUATION: usize = 2;

/// Stand-in report for a selection too small to evaluate
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TrivialReport {
    compatible: bool,
    issues: Vec<String>,
    score: u8,
    note: &'static str,
}

fn trivial_report() -> TrivialReport {
    TrivialReport {
        compatible: true,
        issues: Vec::new(),
        score: 100,
        note: "fewer than two parts selected; evaluation skipped",
    }
}

fn build_evaluator(heuristics: Option<&Path>) -> Evaluator {
    let power = match heuristics {
        Some(path) => PowerHeuristics::load_or_default(path),
        None => PowerHeuristics::default(),
    };
    Evaluator::new(power)
}

/// `rigctl check` - evaluate a parts file and render the report.
///
/// Returns whether the bundle is compatible so main can set the exit
/// code.
pub fn check(parts_path: &Path, json: bool, heuristics: Option<&Path>) -> Result<bool> {
    let parts = parts_file::load(parts_path)?;
    debug!(selected = parts.selected_count(), "parts file loaded");

    if parts.selected_count() < MIN_PARTS_FOR_EVALUATION {
        info!("selection below evaluation threshold, skipping engine");
        if json {
            println!("{}", serde_json::to_string_pretty(&trivial_report())?);
        } else {
            println!("Fewer than two parts selected; nothing to check yet.");
        }
        return Ok(true);
    }

    let report = build_evaluator(heuristics).evaluate(&parts);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display::print_report(&parts, &report);
    }

    Ok(report.compatible)
}

/// `rigctl budget` - power figures only, no verdict rendering
pub fn budget(parts_path: &Path, heuristics: Option<&Path>) -> Result<()> {
    let parts = parts_file::load(parts_path)?;
    let report = build_evaluator(heuristics).evaluate(&parts);
    display::print_power_budget(&report);
    for warning in &report.warnings {
        println!("  note: {warning}");
    }
    Ok(())
}

/// Evaluate an already-loaded selection with default heuristics.
///
/// Shared by the integration tests; the subcommands above wrap this
/// with file loading and rendering.
pub fn evaluate_selection(parts: &PartsSelection) -> rigcheck::CompatibilityReport {
    Evaluator::default().evaluate(parts)
}
