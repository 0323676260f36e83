//! RAM memory type vs motherboard memory type.

use super::{spec_value, CheckResult, Issue, IssueCode};
use crate::component::{Component, MotherboardSpecs, RamSpecs};

/// Compare RAM and motherboard memory generations.
///
/// Same null rule as the socket check: absent components and
/// unreported memory types pass without a finding.
pub fn check(
    ram: Option<&Component<RamSpecs>>,
    motherboard: Option<&Component<MotherboardSpecs>>,
) -> CheckResult {
    let (Some(ram), Some(motherboard)) = (ram, motherboard) else {
        return CheckResult::pass();
    };

    let (Some(ram_type), Some(board_type)) = (
        spec_value(&ram.specifications.memory_type),
        spec_value(&motherboard.specifications.memory_type),
    ) else {
        return CheckResult::pass();
    };

    if ram_type.eq_ignore_ascii_case(board_type) {
        return CheckResult::pass();
    }

    CheckResult::from_issues(vec![Issue::new(
        IssueCode::MemoryTypeMismatch,
        format!("Memory type mismatch: RAM is {ram_type}, motherboard takes {board_type}"),
    )])
}
