use crate::core::stats::params::EnergyParams;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Configuration of a training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingConfig {
    /// Directory receiving the per-model extract files.
    pub extracts_dir: PathBuf,
    /// Directory holding the persisted report tables.
    pub reports_dir: PathBuf,
    /// Constants of the pseudo-energy model.
    pub params: EnergyParams,
    /// Discard previously accumulated counts before this run.
    pub reset: bool,
}

#[derive(Default)]
pub struct TrainingConfigBuilder {
    extracts_dir: Option<PathBuf>,
    reports_dir: Option<PathBuf>,
    params: Option<EnergyParams>,
    reset: bool,
}

impl TrainingConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extracts_dir(mut self, path: PathBuf) -> Self {
        self.extracts_dir = Some(path);
        self
    }
    pub fn reports_dir(mut self, path: PathBuf) -> Self {
        self.reports_dir = Some(path);
        self
    }
    pub fn params(mut self, params: EnergyParams) -> Self {
        self.params = Some(params);
        self
    }
    pub fn reset(mut self, reset: bool) -> Self {
        self.reset = reset;
        self
    }

    pub fn build(self) -> Result<TrainingConfig, ConfigError> {
        Ok(TrainingConfig {
            extracts_dir: self
                .extracts_dir
                .ok_or(ConfigError::MissingParameter("extracts_dir"))?,
            reports_dir: self
                .reports_dir
                .ok_or(ConfigError::MissingParameter("reports_dir"))?,
            params: self.params.unwrap_or_default(),
            reset: self.reset,
        })
    }
}

/// Configuration of a scoring run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Directory receiving the per-model extract files.
    pub extracts_dir: PathBuf,
    /// Directory holding the trained report tables.
    pub reports_dir: PathBuf,
}

#[derive(Default)]
pub struct ScoringConfigBuilder {
    extracts_dir: Option<PathBuf>,
    reports_dir: Option<PathBuf>,
}

impl ScoringConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extracts_dir(mut self, path: PathBuf) -> Self {
        self.extracts_dir = Some(path);
        self
    }
    pub fn reports_dir(mut self, path: PathBuf) -> Self {
        self.reports_dir = Some(path);
        self
    }

    pub fn build(self) -> Result<ScoringConfig, ConfigError> {
        Ok(ScoringConfig {
            extracts_dir: self
                .extracts_dir
                .ok_or(ConfigError::MissingParameter("extracts_dir"))?,
            reports_dir: self
                .reports_dir
                .ok_or(ConfigError::MissingParameter("reports_dir"))?,
        })
    }
}
