//! Motherboard form factor vs case support list.

use super::{spec_value, CheckResult, Issue, IssueCode};
use crate::component::{CaseSpecs, Component, MotherboardSpecs};

/// Check that the case supports the motherboard's form factor.
///
/// The case advertises support as a comma-space delimited list
/// ("ATX, Micro-ATX"). Absent components and unreported fields pass,
/// the same null rule as the other pairwise checks - a case with no
/// support list is not judged.
pub fn check(
    motherboard: Option<&Component<MotherboardSpecs>>,
    case: Option<&Component<CaseSpecs>>,
) -> CheckResult {
    let (Some(motherboard), Some(case)) = (motherboard, case) else {
        return CheckResult::pass();
    };

    let (Some(form_factor), Some(supported)) = (
        spec_value(&motherboard.specifications.form_factor),
        spec_value(&case.specifications.motherboard_support),
    ) else {
        return CheckResult::pass();
    };

    let supported_set: Vec<&str> = supported.split(", ").map(str::trim).collect();
    if supported_set
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(form_factor))
    {
        return CheckResult::pass();
    }

    CheckResult::from_issues(vec![Issue::new(
        IssueCode::FormFactorUnsupported,
        format!("Case does not fit a {form_factor} motherboard (supports: {supported})"),
    )])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(form_factor: Option<&str>) -> Component<MotherboardSpecs> {
        Component::new(
            "test board",
            MotherboardSpecs {
                form_factor: form_factor.map(String::from),
                ..Default::default()
            },
        )
    }

    fn case(support: Option<&str>) -> Component<CaseSpecs> {
        Component::new(
            "test case",
            CaseSpecs {
                motherboard_support: support.map(String::from),
            },
        )
    }

    #[test]
    fn test_absent_component_passes() {
        assert!(check(None, None).compatible);
        assert!(check(Some(&board(Some("ATX"))), None).compatible);
        assert!(check(None, Some(&case(Some("ATX")))).compatible);
    }

    #[test]
    fn test_supported_form_factor_passes() {
        let result = check(
            Some(&board(Some("ATX"))),
            Some(&case(Some("ATX, Micro-ATX"))),
        );
        assert!(result.compatible);
    }

    #[test]
    fn test_unsupported_form_factor_flagged() {
        let result = check(
            Some(&board(Some("ATX"))),
            Some(&case(Some("Micro-ATX, Mini-ITX"))),
        );
        assert!(!result.compatible);
        assert_eq!(result.issues[0].code, IssueCode::FormFactorUnsupported);
        assert!(result.issues[0].message.contains("ATX"));
        assert!(result.issues[0].message.contains("Micro-ATX, Mini-ITX"));
    }

    #[test]
    fn test_missing_support_list_passes() {
        // A case without a support list is not judged, matching the
        // null rule of the other checks
        let result = check(Some(&board(Some("ATX"))), Some(&case(None)));
        assert!(result.compatible);

        let result = check(Some(&board(None)), Some(&case(Some("ATX"))));
        assert!(result.compatible);
    }

    #[test]
    fn test_single_entry_support_list() {
        assert!(check(Some(&board(Some("Mini-ITX"))), Some(&case(Some("Mini-ITX")))).compatible);
        assert!(!check(Some(&board(Some("ATX"))), Some(&case(Some("Mini-ITX")))).compatible);
    }
}
