use crate::core::elements::{self, LennardJonesData};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_BOND_FORCE_CONSTANT: f64 = 300.0; // kcal/(mol·Å²) per unit bond order
pub const DEFAULT_MIN_VDW_DISTANCE: f64 = 0.1;

/// Parameters of the simplified force field.
///
/// Starts from the built-in element table. A TOML file may override the global
/// constants and the Lennard-Jones parameters of individual elements:
///
/// ```toml
/// bond-force-constant = 300.0
/// min-vdw-distance = 0.1
///
/// [elements.Cl]
/// sigma = 3.47
/// epsilon = 0.265
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct ForcefieldParams {
    pub bond_force_constant: f64,
    pub min_vdw_distance: f64,
    #[serde(rename = "elements")]
    pub lennard_jones_overrides: HashMap<String, LennardJonesData>,
}

impl Default for ForcefieldParams {
    fn default() -> Self {
        Self {
            bond_force_constant: DEFAULT_BOND_FORCE_CONSTANT,
            min_vdw_distance: DEFAULT_MIN_VDW_DISTANCE,
            lennard_jones_overrides: HashMap::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

impl ForcefieldParams {
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    /// Lennard-Jones parameters for `symbol`, preferring an override over the table.
    pub fn lennard_jones(&self, symbol: &str) -> LennardJonesData {
        self.lennard_jones_overrides
            .get(symbol)
            .copied()
            .unwrap_or_else(|| elements::lennard_jones_data(symbol))
    }
}
