//! CPU socket vs motherboard socket.

use super::{spec_value, CheckResult, Issue, IssueCode};
use crate::component::{Component, CpuSpecs, MotherboardSpecs};

/// Compare CPU and motherboard sockets.
///
/// Passes when either component is absent or either side does not
/// report a socket. The comparison is case-insensitive; the issue
/// message keeps the original casing of both values.
pub fn check(
    cpu: Option<&Component<CpuSpecs>>,
    motherboard: Option<&Component<MotherboardSpecs>>,
) -> CheckResult {
    let (Some(cpu), Some(motherboard)) = (cpu, motherboard) else {
        return CheckResult::pass();
    };

    let (Some(cpu_socket), Some(board_socket)) = (
        spec_value(&cpu.specifications.socket),
        spec_value(&motherboard.specifications.socket),
    ) else {
        return CheckResult::pass();
    };

    if cpu_socket.eq_ignore_ascii_case(board_socket) {
        return CheckResult::pass();
    }

    CheckResult::from_issues(vec![Issue::new(
        IssueCode::SocketMismatch,
        format!("Socket mismatch: CPU uses {cpu_socket}, motherboard uses {board_socket}"),
    )])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cpu(socket: Option<&str>) -> Component<CpuSpecs> {
        Component::new(
            "test cpu",
            CpuSpecs {
                socket: socket.map(String::from),
                tdp: None,
            },
        )
    }

    fn board(socket: Option<&str>) -> Component<MotherboardSpecs> {
        Component::new(
            "test board",
            MotherboardSpecs {
                socket: socket.map(String::from),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_absent_component_passes() {
        assert!(check(None, None).compatible);
        assert!(check(Some(&cpu(Some("AM5"))), None).compatible);
        assert!(check(None, Some(&board(Some("AM5")))).compatible);
    }

    #[test]
    fn test_matching_sockets_pass() {
        let result = check(Some(&cpu(Some("AM5"))), Some(&board(Some("AM5"))));
        assert!(result.compatible);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_case_insensitive_match() {
        let result = check(Some(&cpu(Some("lga1700"))), Some(&board(Some("LGA1700"))));
        assert!(result.compatible);
    }

    #[test]
    fn test_mismatch_names_both_values() {
        let result = check(Some(&cpu(Some("LGA1700"))), Some(&board(Some("AM5"))));
        assert!(!result.compatible);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].code, IssueCode::SocketMismatch);
        assert!(result.issues[0].message.contains("LGA1700"));
        assert!(result.issues[0].message.contains("AM5"));
    }

    #[test]
    fn test_unreported_socket_passes() {
        // A part that reports no socket is not judged
        assert!(check(Some(&cpu(None)), Some(&board(Some("AM5")))).compatible);
        assert!(check(Some(&cpu(Some("AM5"))), Some(&board(None))).compatible);
        assert!(check(Some(&cpu(Some(""))), Some(&board(Some("AM5")))).compatible);
    }
}
