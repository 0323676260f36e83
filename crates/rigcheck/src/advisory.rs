//! Presentation hints derived from a finished report.
//!
//! Pure post-processing: a score badge for the headline and one canned
//! remediation sentence per distinct issue code. Not required for
//! correctness - UIs are free to ignore this module entirely.

use crate::checks::IssueCode;
use crate::report::CompatibilityReport;
use serde::{Deserialize, Serialize};

/// Badge color, for terminals and UIs to map onto their own palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Green,
    Yellow,
    Orange,
    Red,
}

impl BadgeColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeColor::Green => "green",
            BadgeColor::Yellow => "yellow",
            BadgeColor::Orange => "orange",
            BadgeColor::Red => "red",
        }
    }
}

/// Headline classification of a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBadge {
    pub label: &'static str,
    pub color: BadgeColor,
    pub icon: &'static str,
}

/// Map a score to its badge.
///
/// Thresholds: 100 is fully compatible, 75+ mostly, 50+ partially,
/// below that incompatible.
pub fn classify_score(score: u8) -> ScoreBadge {
    if score >= 100 {
        ScoreBadge {
            label: "Fully Compatible",
            color: BadgeColor::Green,
            icon: "✓",
        }
    } else if score >= 75 {
        ScoreBadge {
            label: "Mostly Compatible",
            color: BadgeColor::Yellow,
            icon: "~",
        }
    } else if score >= 50 {
        ScoreBadge {
            label: "Partially Compatible",
            color: BadgeColor::Orange,
            icon: "!",
        }
    } else {
        ScoreBadge {
            label: "Incompatible",
            color: BadgeColor::Red,
            icon: "✗",
        }
    }
}

/// One remediation sentence per distinct issue code, in the order the
/// codes first appear in the report.
///
/// Keys off [`IssueCode`], never off message text, so rewording an
/// issue message cannot detach its suggestion.
pub fn suggestions(report: &CompatibilityReport) -> Vec<String> {
    let mut seen: Vec<IssueCode> = Vec::new();
    let mut advice = Vec::new();

    for issue in &report.issues {
        if seen.contains(&issue.code) {
            continue;
        }
        seen.push(issue.code);
        advice.push(remediation(issue.code).to_string());
    }

    advice
}

fn remediation(code: IssueCode) -> &'static str {
    match code {
        IssueCode::SocketMismatch => {
            "Choose a CPU and motherboard that share the same socket."
        }
        IssueCode::MemoryTypeMismatch => {
            "Pick RAM matching the memory type your motherboard supports."
        }
        IssueCode::PsuUnderpowered => {
            "Select a power supply with a higher wattage rating."
        }
        IssueCode::FormFactorUnsupported => {
            "Choose a case that supports your motherboard's form factor."
        }
        IssueCode::GpuTooLong => {
            "Pick a shorter graphics card or a case with more GPU clearance."
        }
    }
}
