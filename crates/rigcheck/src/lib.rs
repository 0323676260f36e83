//! Rigcheck - PC part compatibility evaluation.
//!
//! Takes a partially or fully populated parts selection and produces a
//! structured verdict: pass/fail, itemized issues and warnings, and a
//! 0-100 score. Four independent leaf checks feed the report:
//! - CPU socket vs motherboard socket
//! - RAM memory type vs motherboard memory type
//! - whole-bundle power draw vs PSU rating
//! - motherboard form factor vs case support
//!
//! The engine is deterministic and side-effect free: no I/O, no cache,
//! no shared state. Malformed or missing spec data degrades to typed
//! defaults rather than errors, so evaluation never fails. Everything
//! around it (catalog, storage, UI) is someone else's problem.
//!
//! ```
//! use rigcheck::{Component, CpuSpecs, Evaluator, MotherboardSpecs, PartsSelection};
//!
//! let parts = PartsSelection {
//!     cpu: Some(Component::new(
//!         "Ryzen 7 7800X3D",
//!         CpuSpecs { socket: Some("AM5".into()), tdp: Some(120) },
//!     )),
//!     motherboard: Some(Component::new(
//!         "B650 Aorus Elite",
//!         MotherboardSpecs { socket: Some("AM5".into()), ..Default::default() },
//!     )),
//!     ..Default::default()
//! };
//!
//! let report = Evaluator::default().evaluate(&parts);
//! assert!(report.compatible);
//! assert_eq!(report.score, 100);
//! ```

pub mod advisory;
pub mod checks;
pub mod component;
pub mod config;
pub mod report;

pub use advisory::{classify_score, suggestions, BadgeColor, ScoreBadge};
pub use checks::power::PowerBudget;
pub use checks::{CheckResult, Issue, IssueCode};
pub use component::{
    CaseSpecs, Category, Component, CpuSpecs, GpuSpecs, MotherboardSpecs, PartsSelection,
    PsuSpecs, RamSpecs, StorageSpecs,
};
pub use config::PowerHeuristics;
pub use report::{CompatibilityReport, Evaluator, LeafChecks};
