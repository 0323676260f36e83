//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap, kept separate from execution
//! logic.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rigcheck CLI
#[derive(Parser)]
#[command(name = "rigctl")]
#[command(about = "Check whether a set of PC parts will work together", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a power heuristics TOML file (overrides built-in figures)
    #[arg(long, global = true, value_name = "FILE")]
    pub heuristics: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a parts file and print the compatibility report
    Check {
        /// Parts selection file (TOML, one table per category)
        parts: PathBuf,

        /// Output the raw report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show only the power budget for a parts file
    Budget {
        /// Parts selection file (TOML, one table per category)
        parts: PathBuf,
    },
}
