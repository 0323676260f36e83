//! Component and parts-selection model.
//!
//! Each selectable part carries a typed specification record for its
//! category instead of a loose key/value bag, so the checks read named
//! fields and the "missing field" case is visible in the signatures.
//!
//! Catalog data is messy: wattage fields arrive as integers or as
//! numeric text ("125"), and any field may be absent. Deserialization
//! is lenient - an unparseable number degrades to `None`, never to an
//! error.

use serde::{Deserialize, Deserializer, Serialize};

/// Component category
///
/// Closed set; one slot per category in a [`PartsSelection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cpu,
    Gpu,
    Ram,
    Motherboard,
    Storage,
    Psu,
    Case,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Cpu,
        Category::Gpu,
        Category::Ram,
        Category::Motherboard,
        Category::Storage,
        Category::Psu,
        Category::Case,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cpu => "cpu",
            Category::Gpu => "gpu",
            Category::Ram => "ram",
            Category::Motherboard => "motherboard",
            Category::Storage => "storage",
            Category::Psu => "psu",
            Category::Case => "case",
        }
    }
}

/// Accept a watt figure as an integer or as numeric text.
///
/// `"125"` parses to `Some(125)`; `"unknown"`, negative numbers and a
/// missing field all degrade to `None` so the checks fall back to their
/// typed defaults.
fn lenient_watts<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Num(n)) if n >= 0 => u32::try_from(n).ok(),
        Some(Raw::Text(s)) => s.trim().parse::<u32>().ok(),
        _ => None,
    })
}

/// CPU specification fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuSpecs {
    /// Socket name, e.g. "AM5" or "LGA1700"
    #[serde(default)]
    pub socket: Option<String>,
    /// Thermal design power in watts
    #[serde(default, deserialize_with = "lenient_watts")]
    pub tdp: Option<u32>,
}

/// GPU specification fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GpuSpecs {
    #[serde(default, deserialize_with = "lenient_watts")]
    pub tdp: Option<u32>,
}

/// RAM specification fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RamSpecs {
    /// Memory generation, e.g. "DDR5"
    #[serde(default)]
    pub memory_type: Option<String>,
}

/// Motherboard specification fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotherboardSpecs {
    #[serde(default)]
    pub socket: Option<String>,
    #[serde(default)]
    pub memory_type: Option<String>,
    /// Board form factor, e.g. "ATX"
    #[serde(default)]
    pub form_factor: Option<String>,
}

/// Storage specification fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageSpecs {
    /// Drive technology, e.g. "NVMe SSD" or "HDD"
    #[serde(default)]
    pub drive_type: Option<String>,
}

/// Power supply specification fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PsuSpecs {
    /// Rated output in watts
    #[serde(default, deserialize_with = "lenient_watts")]
    pub wattage: Option<u32>,
}

/// Case specification fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseSpecs {
    /// Supported board form factors, comma-space delimited,
    /// e.g. "ATX, Micro-ATX, Mini-ITX"
    #[serde(default)]
    pub motherboard_support: Option<String>,
}

/// One selectable part.
///
/// Identity and shop metadata ride along for the caller's benefit; the
/// compatibility checks only ever read `specifications`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "S: Deserialize<'de> + Default"))]
pub struct Component<S> {
    pub name: String,
    /// Price in the caller's currency; irrelevant to compatibility
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default)]
    pub specifications: S,
}

impl<S: Default> Component<S> {
    pub fn new(name: impl Into<String>, specifications: S) -> Self {
        Self {
            name: name.into(),
            price: None,
            specifications,
        }
    }
}

/// The parts picked so far: at most one component per category.
///
/// Built incrementally by the caller and handed to the engine as an
/// immutable snapshot on every evaluation. Categories not yet chosen
/// are simply unset; there is no ordering dependency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartsSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<Component<CpuSpecs>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu: Option<Component<GpuSpecs>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<Component<RamSpecs>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motherboard: Option<Component<MotherboardSpecs>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<Component<StorageSpecs>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psu: Option<Component<PsuSpecs>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case: Option<Component<CaseSpecs>>,
}

impl PartsSelection {
    /// Number of categories with a part selected
    pub fn selected_count(&self) -> usize {
        [
            self.cpu.is_some(),
            self.gpu.is_some(),
            self.ram.is_some(),
            self.motherboard.is_some(),
            self.storage.is_some(),
            self.psu.is_some(),
            self.case.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.selected_count() == 0
    }

    /// Categories currently selected, in fixed category order
    pub fn selected_categories(&self) -> Vec<Category> {
        let mut selected = Vec::new();
        for category in Category::ALL {
            let present = match category {
                Category::Cpu => self.cpu.is_some(),
                Category::Gpu => self.gpu.is_some(),
                Category::Ram => self.ram.is_some(),
                Category::Motherboard => self.motherboard.is_some(),
                Category::Storage => self.storage.is_some(),
                Category::Psu => self.psu.is_some(),
                Category::Case => self.case.is_some(),
            };
            if present {
                selected.push(category);
            }
        }
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_watts_accepts_integer() {
        let specs: CpuSpecs = serde_json::from_str(r#"{"socket":"AM5","tdp":120}"#).unwrap();
        assert_eq!(specs.tdp, Some(120));
    }

    #[test]
    fn test_lenient_watts_accepts_numeric_text() {
        let specs: CpuSpecs = serde_json::from_str(r#"{"tdp":"125"}"#).unwrap();
        assert_eq!(specs.tdp, Some(125));

        let specs: PsuSpecs = serde_json::from_str(r#"{"wattage":" 650 "}"#).unwrap();
        assert_eq!(specs.wattage, Some(650));
    }

    #[test]
    fn test_lenient_watts_degrades_garbage_to_none() {
        let specs: CpuSpecs = serde_json::from_str(r#"{"tdp":"unknown"}"#).unwrap();
        assert_eq!(specs.tdp, None);

        let specs: CpuSpecs = serde_json::from_str(r#"{"tdp":-65}"#).unwrap();
        assert_eq!(specs.tdp, None);

        let specs: CpuSpecs = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(specs.tdp, None);
    }

    #[test]
    fn test_selected_count() {
        let mut parts = PartsSelection::default();
        assert_eq!(parts.selected_count(), 0);
        assert!(parts.is_empty());

        parts.cpu = Some(Component::new("Ryzen 7 7800X3D", CpuSpecs::default()));
        parts.psu = Some(Component::new("RM750e", PsuSpecs::default()));
        assert_eq!(parts.selected_count(), 2);
        assert_eq!(
            parts.selected_categories(),
            vec![Category::Cpu, Category::Psu]
        );
    }

    #[test]
    fn test_parts_selection_toml() {
        let input = r#"
            [cpu]
            name = "Core i5-13600K"
            price = 319.99
            [cpu.specifications]
            socket = "LGA1700"
            tdp = "125"

            [motherboard]
            name = "B760 Tomahawk"
            [motherboard.specifications]
            socket = "LGA1700"
            memoryType = "DDR5"
            formFactor = "ATX"
        "#;

        let parts: PartsSelection = toml::from_str(input).unwrap();
        assert_eq!(parts.selected_count(), 2);
        assert_eq!(parts.cpu.as_ref().unwrap().specifications.tdp, Some(125));
        assert_eq!(
            parts
                .motherboard
                .as_ref()
                .unwrap()
                .specifications
                .form_factor
                .as_deref(),
            Some("ATX")
        );
    }
}
