//! Compatibility checks.
//!
//! Four independent leaf checks, each a pure function over the relevant
//! slice of the parts selection:
//! - socket: CPU socket vs motherboard socket
//! - memory: RAM memory type vs motherboard memory type
//! - power: estimated draw of the whole bundle vs PSU rating
//! - form_factor: motherboard form factor vs case support list
//!
//! The pairwise checks pass when either side is absent or unspecified -
//! absence is never itself a finding. The power check runs on any
//! selection, down to an empty one, because a draw estimate is
//! meaningful for a partial build where a pairwise comparison is not.

pub mod form_factor;
pub mod memory;
pub mod power;
pub mod socket;

use serde::{Deserialize, Serialize};

/// Machine-readable identifier for a class of finding.
///
/// Remediation advice keys off these codes, never off message text, so
/// rewording a message cannot silently detach its suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueCode {
    SocketMismatch,
    MemoryTypeMismatch,
    PsuUnderpowered,
    FormFactorUnsupported,
    /// Reserved for a future case-clearance check; nothing emits it yet
    GpuTooLong,
}

impl IssueCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::SocketMismatch => "SocketMismatch",
            IssueCode::MemoryTypeMismatch => "MemoryTypeMismatch",
            IssueCode::PsuUnderpowered => "PsuUnderpowered",
            IssueCode::FormFactorUnsupported => "FormFactorUnsupported",
            IssueCode::GpuTooLong => "GpuTooLong",
        }
    }
}

/// One finding: a code for machines, a message for humans
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub code: IssueCode,
    pub message: String,
}

impl Issue {
    pub fn new(code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Outcome of a single leaf check.
///
/// `compatible` is true exactly when `issues` is empty; the
/// constructors keep that in sync so it cannot drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub compatible: bool,
    pub issues: Vec<Issue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl CheckResult {
    /// A passing result with no findings
    pub fn pass() -> Self {
        Self {
            compatible: true,
            issues: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn from_issues(issues: Vec<Issue>) -> Self {
        Self {
            compatible: issues.is_empty(),
            issues,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }
}

/// Treat unset and blank spec values the same way.
///
/// Catalog records sometimes carry a field with an empty string where
/// another record omits it entirely; the checks must not tell those
/// apart.
pub(crate) fn spec_value(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
