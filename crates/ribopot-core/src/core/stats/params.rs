use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Fallback pseudo-energy for cells with an undefined or zero ratio.
pub const DEFAULT_UNOBSERVED_PENALTY: f64 = 10.0;

/// Tunable constants of the pseudo-energy model.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EnergyParams {
    /// Pseudo-energy assigned where the observed/reference ratio is undefined
    /// or zero. Acts as the "never observed" energy ceiling of the table.
    pub unobserved_penalty: f64,
}

impl Default for EnergyParams {
    fn default() -> Self {
        Self {
            unobserved_penalty: DEFAULT_UNOBSERVED_PENALTY,
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

impl EnergyParams {
    /// Loads parameters from a TOML file; keys not present keep their defaults.
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
}
