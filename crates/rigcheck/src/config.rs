//! Power-budget heuristics configuration.
//!
//! The wattage model is built from coarse per-category estimates, not
//! measured draw. Keeping them in configuration means the figures can
//! be tuned without touching the check logic.
//!
//! Loaded from TOML; every field has a default so a partial file (or no
//! file at all) yields a working model.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Per-category wattage estimates and PSU sizing rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerHeuristics {
    /// Baseline draw of motherboard, fans and peripherals
    #[serde(default = "default_base_load")]
    pub base_load_watts: u32,

    /// Assumed CPU TDP when the part does not report one
    #[serde(default = "default_cpu_tdp")]
    pub default_cpu_tdp: u32,

    /// Assumed GPU TDP when the part does not report one
    #[serde(default = "default_gpu_tdp")]
    pub default_gpu_tdp: u32,

    /// Flat allowance for RAM, regardless of module count
    #[serde(default = "default_ram_watts")]
    pub ram_watts: u32,

    /// Allowance for a solid-state drive
    #[serde(default = "default_ssd_watts")]
    pub ssd_watts: u32,

    /// Allowance for a spinning disk
    #[serde(default = "default_hdd_watts")]
    pub hdd_watts: u32,

    /// Assumed PSU rating when the part does not report one
    #[serde(default = "default_psu_watts")]
    pub default_psu_watts: u32,

    /// Headroom above estimated draw before a PSU stops being "tight"
    #[serde(default = "default_headroom_percent")]
    pub headroom_percent: u32,
}

fn default_base_load() -> u32 {
    100
}

fn default_cpu_tdp() -> u32 {
    65
}

fn default_gpu_tdp() -> u32 {
    150
}

fn default_ram_watts() -> u32 {
    30
}

fn default_ssd_watts() -> u32 {
    10
}

fn default_hdd_watts() -> u32 {
    20
}

fn default_psu_watts() -> u32 {
    500
}

fn default_headroom_percent() -> u32 {
    20
}

impl Default for PowerHeuristics {
    fn default() -> Self {
        Self {
            base_load_watts: default_base_load(),
            default_cpu_tdp: default_cpu_tdp(),
            default_gpu_tdp: default_gpu_tdp(),
            ram_watts: default_ram_watts(),
            ssd_watts: default_ssd_watts(),
            hdd_watts: default_hdd_watts(),
            default_psu_watts: default_psu_watts(),
            headroom_percent: default_headroom_percent(),
        }
    }
}

impl PowerHeuristics {
    /// Load heuristics from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Cannot read power heuristics from {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Invalid power heuristics in {}", path.display()))
    }

    /// Load heuristics from a TOML file, falling back to defaults if
    /// the file is missing or unreadable
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(&path) {
            Ok(heuristics) => heuristics,
            Err(e) => {
                tracing::debug!("Using default power heuristics: {e:#}");
                Self::default()
            }
        }
    }
}
