//! Parts selection file loading.
//!
//! The on-disk format is TOML with one table per category:
//!
//! ```toml
//! [cpu]
//! name = "Ryzen 7 7800X3D"
//! price = 349.00
//! [cpu.specifications]
//! socket = "AM5"
//! tdp = 120
//!
//! [motherboard]
//! name = "B650 Aorus Elite"
//! [motherboard.specifications]
//! socket = "AM5"
//! memoryType = "DDR5"
//! formFactor = "ATX"
//! ```
//!
//! Unknown spec fields are ignored; missing ones stay unset and the
//! engine falls back to its typed defaults.

use rigcheck::PartsSelection;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PartsFileError {
    #[error("cannot read parts file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid parts file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load a parts selection from a TOML file
pub fn load(path: impl AsRef<Path>) -> Result<PartsSelection, PartsFileError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| PartsFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&contents).map_err(|source| PartsFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_full_selection() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [cpu]
            name = "Ryzen 5 7600"
            [cpu.specifications]
            socket = "AM5"
            tdp = 65

            [psu]
            name = "Focus GX-650"
            [psu.specifications]
            wattage = "650"
            "#
        )
        .unwrap();

        let parts = load(file.path()).unwrap();
        assert_eq!(parts.selected_count(), 2);
        assert_eq!(parts.psu.as_ref().unwrap().specifications.wattage, Some(650));
    }

    #[test]
    fn test_missing_file() {
        let err = load("/nonexistent/build.toml").unwrap_err();
        assert!(matches!(err, PartsFileError::Read { .. }));
    }

    #[test]
    fn test_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[cpu]\nname = [not toml").unwrap();

        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, PartsFileError::Parse { .. }));
    }

    #[test]
    fn test_component_without_specifications_table() {
        // A bare part entry is fine; specs default to unset
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[ram]\nname = \"Vengeance 32GB\"").unwrap();

        let parts = load(file.path()).unwrap();
        let ram = parts.ram.unwrap();
        assert_eq!(ram.name, "Vengeance 32GB");
        assert_eq!(ram.specifications.memory_type, None);
    }
}
