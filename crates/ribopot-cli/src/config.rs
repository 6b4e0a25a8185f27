use crate::cli::{ScoreArgs, TrainArgs};
use crate::error::{CliError, Result};
use ribopot::core::stats::params::EnergyParams;
use ribopot::pipeline::config::{
    ScoringConfig, ScoringConfigBuilder, TrainingConfig, TrainingConfigBuilder,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

const DEFAULT_STRUCTURES_DIR: &str = "PDB";
const DEFAULT_EXTRACTS_DIR: &str = "pdb_models";
const DEFAULT_REPORTS_DIR: &str = "reports";

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialDirectoriesConfig {
    structures: Option<PathBuf>,
    extracts: Option<PathBuf>,
    reports: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialEnergyConfig {
    #[serde(rename = "params-file")]
    params_file: Option<PathBuf>,
    #[serde(rename = "unobserved-penalty")]
    unobserved_penalty: Option<f64>,
}

/// Optional settings read from a TOML configuration file. Every field has a
/// built-in default; CLI arguments override whatever the file provides.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialRunConfig {
    directories: Option<PartialDirectoriesConfig>,
    energy: Option<PartialEnergyConfig>,
}

/// Fully resolved settings of a `train` invocation.
#[derive(Debug)]
pub struct TrainSettings {
    pub structures_dir: PathBuf,
    pub core: TrainingConfig,
}

/// Fully resolved settings of a `score` invocation.
#[derive(Debug)]
pub struct ScoreSettings {
    pub structures_dir: PathBuf,
    pub core: ScoringConfig,
}

impl PartialRunConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn merge_train(mut self, args: &TrainArgs) -> Result<TrainSettings> {
        let dirs = self.directories.take().unwrap_or_default();
        let energy = self.energy.take().unwrap_or_default();

        let params = resolve_params(args.params.as_deref(), args.penalty, &energy)?;

        let core = TrainingConfigBuilder::new()
            .extracts_dir(resolve_dir(
                args.extracts.as_ref(),
                dirs.extracts,
                DEFAULT_EXTRACTS_DIR,
            ))
            .reports_dir(resolve_dir(
                args.reports.as_ref(),
                dirs.reports,
                DEFAULT_REPORTS_DIR,
            ))
            .params(params)
            .reset(args.reset)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        Ok(TrainSettings {
            structures_dir: resolve_dir(
                args.structures.as_ref(),
                dirs.structures,
                DEFAULT_STRUCTURES_DIR,
            ),
            core,
        })
    }

    pub fn merge_score(mut self, args: &ScoreArgs) -> Result<ScoreSettings> {
        let dirs = self.directories.take().unwrap_or_default();

        let core = ScoringConfigBuilder::new()
            .extracts_dir(resolve_dir(
                args.extracts.as_ref(),
                dirs.extracts,
                DEFAULT_EXTRACTS_DIR,
            ))
            .reports_dir(resolve_dir(
                args.reports.as_ref(),
                dirs.reports,
                DEFAULT_REPORTS_DIR,
            ))
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        Ok(ScoreSettings {
            structures_dir: resolve_dir(
                args.structures.as_ref(),
                dirs.structures,
                DEFAULT_STRUCTURES_DIR,
            ),
            core,
        })
    }
}

fn resolve_dir(cli: Option<&PathBuf>, file: Option<PathBuf>, default: &str) -> PathBuf {
    cli.cloned().or(file).unwrap_or_else(|| PathBuf::from(default))
}

/// Resolves the energy parameters with the usual precedence: an explicit CLI
/// parameter file wins over the one named in the config file, and a bare
/// penalty override beats what either file says.
fn resolve_params(
    cli_params: Option<&Path>,
    cli_penalty: Option<f64>,
    file: &PartialEnergyConfig,
) -> Result<EnergyParams> {
    let mut params = match cli_params.or(file.params_file.as_deref()) {
        Some(path) => EnergyParams::load(path)?,
        None => EnergyParams::default(),
    };
    if let Some(penalty) = cli_penalty.or(file.unobserved_penalty) {
        if !penalty.is_finite() {
            return Err(CliError::Argument(format!(
                "Unobserved penalty must be finite, got {penalty}"
            )));
        }
        params.unobserved_penalty = penalty;
    }
    Ok(params)
}
