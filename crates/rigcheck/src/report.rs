//! Report assembly.
//!
//! Runs the four leaf checks in fixed order, merges their findings and
//! scores the result. Evaluation is total: it never fails, never does
//! I/O and holds no state, so the same selection always produces the
//! same report.

use crate::checks::power::PowerBudget;
use crate::checks::{self, CheckResult, Issue};
use crate::component::PartsSelection;
use crate::config::PowerHeuristics;
use serde::{Deserialize, Serialize};

/// Number of leaf checks; each one carries equal weight in the score
const LEAF_CHECK_COUNT: usize = 4;

/// Per-check results, keyed for UI drill-down
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeafChecks {
    pub cpu_motherboard: CheckResult,
    pub ram_motherboard: CheckResult,
    pub psu_wattage: CheckResult,
    pub board_case: CheckResult,
}

/// The engine's sole output.
///
/// Invariants: `compatible` holds exactly when `issues` is empty, and
/// `score` is 100 exactly when `compatible` holds. With four equally
/// weighted checks the score is always one of 0, 25, 50, 75, 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityReport {
    pub compatible: bool,
    /// All leaf issues, concatenated in check order
    pub issues: Vec<Issue>,
    /// All leaf warnings, concatenated in check order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    pub checks: LeafChecks,
    /// Wattage figures from the power check, for display
    pub power: PowerBudget,
    /// round(100 * passing checks / total checks)
    pub score: u8,
}

/// The compatibility evaluator.
///
/// Stateless apart from the power heuristics it was built with;
/// cheap to construct and safe to share.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    power: PowerHeuristics,
}

impl Evaluator {
    pub fn new(power: PowerHeuristics) -> Self {
        Self { power }
    }

    /// Evaluate a parts selection.
    ///
    /// Check order is fixed: socket, memory type, power budget, form
    /// factor. Callers re-invoke this on every selection change; there
    /// is no cache and no notion of a previous evaluation.
    pub fn evaluate(&self, parts: &PartsSelection) -> CompatibilityReport {
        let cpu_motherboard = checks::socket::check(parts.cpu.as_ref(), parts.motherboard.as_ref());
        let ram_motherboard = checks::memory::check(parts.ram.as_ref(), parts.motherboard.as_ref());
        let (psu_wattage, power) = checks::power::check(parts, &self.power);
        let board_case = checks::form_factor::check(parts.motherboard.as_ref(), parts.case.as_ref());

        let leaves = [&cpu_motherboard, &ram_motherboard, &psu_wattage, &board_case];
        debug_assert_eq!(leaves.len(), LEAF_CHECK_COUNT);

        let passed = leaves.iter().filter(|check| check.compatible).count();
        let score = (passed * 100 / LEAF_CHECK_COUNT) as u8;

        let issues: Vec<Issue> = leaves
            .iter()
            .flat_map(|check| check.issues.iter().cloned())
            .collect();
        let warnings: Vec<String> = leaves
            .iter()
            .flat_map(|check| check.warnings.iter().cloned())
            .collect();

        tracing::debug!(
            selected = parts.selected_count(),
            passed,
            score,
            "compatibility evaluated"
        );

        CompatibilityReport {
            compatible: issues.is_empty(),
            issues,
            warnings,
            checks: LeafChecks {
                cpu_motherboard,
                ram_motherboard,
                psu_wattage,
                board_case,
            },
            power,
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::IssueCode;
    use crate::component::{Component, CpuSpecs, MotherboardSpecs, PsuSpecs};

    #[test]
    fn test_empty_selection_is_fully_compatible() {
        let report = Evaluator::default().evaluate(&PartsSelection::default());
        assert!(report.compatible);
        assert!(report.issues.is_empty());
        assert!(report.warnings.is_empty());
        assert_eq!(report.score, 100);
    }

    #[test]
    fn test_one_failing_check_costs_25_points() {
        let parts = PartsSelection {
            cpu: Some(Component::new(
                "cpu",
                CpuSpecs {
                    socket: Some("LGA1700".to_string()),
                    tdp: None,
                },
            )),
            motherboard: Some(Component::new(
                "board",
                MotherboardSpecs {
                    socket: Some("AM5".to_string()),
                    ..Default::default()
                },
            )),
            ..Default::default()
        };

        let report = Evaluator::default().evaluate(&parts);
        assert!(!report.compatible);
        assert_eq!(report.score, 75);
        assert!(!report.checks.cpu_motherboard.compatible);
        assert!(report.checks.ram_motherboard.compatible);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].code, IssueCode::SocketMismatch);
    }

    #[test]
    fn test_issues_concatenated_in_check_order() {
        // Socket mismatch plus an underpowered PSU: socket issue first
        let parts = PartsSelection {
            cpu: Some(Component::new(
                "cpu",
                CpuSpecs {
                    socket: Some("LGA1700".to_string()),
                    tdp: Some(250),
                },
            )),
            motherboard: Some(Component::new(
                "board",
                MotherboardSpecs {
                    socket: Some("AM5".to_string()),
                    ..Default::default()
                },
            )),
            psu: Some(Component::new("psu", PsuSpecs { wattage: Some(200) })),
            ..Default::default()
        };

        let report = Evaluator::default().evaluate(&parts);
        assert_eq!(report.score, 50);
        assert_eq!(report.issues.len(), 2);
        assert_eq!(report.issues[0].code, IssueCode::SocketMismatch);
        assert_eq!(report.issues[1].code, IssueCode::PsuUnderpowered);
    }

    #[test]
    fn test_report_json_field_names() {
        let report = Evaluator::default().evaluate(&PartsSelection::default());
        let json = serde_json::to_value(&report).unwrap();

        assert!(json.get("compatible").is_some());
        assert!(json["checks"].get("cpuMotherboard").is_some());
        assert!(json["checks"].get("psuWattage").is_some());
        assert!(json["checks"].get("boardCase").is_some());
        assert_eq!(json["power"]["totalWattage"], 100);
        assert_eq!(json["power"]["psuWattage"], 500);
    }
}
