//! Whole-bundle power draw vs PSU rating.

use super::{spec_value, CheckResult, Issue, IssueCode};
use crate::component::PartsSelection;
use crate::config::PowerHeuristics;
use serde::{Deserialize, Serialize};

/// Wattage figures computed by the power check, kept on the report for
/// display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerBudget {
    /// Estimated draw of everything selected, plus base load
    pub total_wattage: u32,
    /// Estimated draw with headroom applied, rounded up
    pub recommended_wattage: u32,
    /// PSU rating used for the comparison (default if unreported)
    pub psu_wattage: u32,
}

/// Estimate the bundle's draw and compare it against the PSU.
///
/// Unlike the pairwise checks this one always runs: a draw estimate is
/// meaningful even for a single selected part, evaluated against the
/// default PSU rating. Below the estimate is an issue; between the
/// estimate and the headroom target is only a warning.
pub fn check(parts: &PartsSelection, heuristics: &PowerHeuristics) -> (CheckResult, PowerBudget) {
    // Accumulate in u64: catalog data can carry absurd watt figures
    // and the sum must degrade, never overflow
    let mut estimated = u64::from(heuristics.base_load_watts);

    if let Some(cpu) = &parts.cpu {
        estimated += u64::from(cpu.specifications.tdp.unwrap_or(heuristics.default_cpu_tdp));
    }
    if let Some(gpu) = &parts.gpu {
        estimated += u64::from(gpu.specifications.tdp.unwrap_or(heuristics.default_gpu_tdp));
    }
    if parts.ram.is_some() {
        estimated += u64::from(heuristics.ram_watts);
    }
    if let Some(storage) = &parts.storage {
        let is_ssd = spec_value(&storage.specifications.drive_type)
            .map(|drive| drive.to_ascii_lowercase().contains("ssd"))
            .unwrap_or(false);
        estimated += u64::from(if is_ssd {
            heuristics.ssd_watts
        } else {
            heuristics.hdd_watts
        });
    }

    // ceil(estimated * (1 + headroom/100))
    let recommended =
        (estimated * (100 + u64::from(heuristics.headroom_percent))).div_ceil(100);

    let psu_wattage = parts
        .psu
        .as_ref()
        .and_then(|psu| psu.specifications.wattage)
        .unwrap_or(heuristics.default_psu_watts);

    // Report figures clamp; the verdict compares the unclamped sums
    let budget = PowerBudget {
        total_wattage: u32::try_from(estimated).unwrap_or(u32::MAX),
        recommended_wattage: u32::try_from(recommended).unwrap_or(u32::MAX),
        psu_wattage,
    };

    let result = if u64::from(psu_wattage) < estimated {
        CheckResult::from_issues(vec![Issue::new(
            IssueCode::PsuUnderpowered,
            format!("PSU wattage too low: {psu_wattage}W (need at least {estimated}W)"),
        )])
    } else if u64::from(psu_wattage) < recommended {
        CheckResult::pass().with_warnings(vec![format!(
            "PSU is adequate but tight: {psu_wattage}W vs {recommended}W recommended"
        )])
    } else {
        CheckResult::pass()
    };

    (result, budget)
}
