//! rigctl - CLI client for the rigcheck compatibility engine.
//!
//! Loads a parts selection from a TOML file, runs the engine and
//! renders the report. All presentation lives here; the engine stays
//! ignorant of terminals and files.

pub mod cli;
pub mod commands;
pub mod display;
pub mod errors;
pub mod parts_file;
