//! Scoring workflow: evaluates one candidate structure against a previously
//! trained potential and reports its estimated Gibbs free energy.

use crate::core::io::extract;
use crate::core::io::pdb;
use crate::core::models::model::{Model, Structure};
use crate::core::stats::scoring;
use crate::pipeline::config::ScoringConfig;
use crate::pipeline::error::PipelineError;
use crate::pipeline::progress::{Progress, ProgressReporter};
use crate::pipeline::source::StructureSource;
use crate::pipeline::store::ReportStore;
use std::path::Path;
use tracing::{info, instrument};

/// Outcome of scoring one structure.
#[derive(Debug, Clone)]
pub struct GibbsReport {
    /// Identifier of the scored structure.
    pub id: String,
    /// Number of models the estimate sums over.
    pub num_models: usize,
    /// Qualifying pairs that contributed to the estimate.
    pub pairs_scored: u64,
    /// Estimated Gibbs free energy, in the dimensionless pseudo-energy units
    /// of the potential.
    pub energy: f64,
}

/// Executes the scoring workflow.
///
/// The potential must have been derived by a prior training pass; a missing
/// potential table is a state error, reported before the query structure is
/// even looked at. The query is then resolved, checked to be RNA, extracted
/// model by model, and scored. Scoring never touches the count accumulator,
/// so evaluating a structure leaves the trained tables untouched.
#[instrument(skip_all, name = "scoring_workflow")]
pub fn run(
    source: &dyn StructureSource,
    id: &str,
    config: &ScoringConfig,
    reporter: &ProgressReporter,
) -> Result<GibbsReport, PipelineError> {
    // === Phase 1: Loading the Potential ===
    reporter.report(Progress::PhaseStart {
        name: "Loading Potential",
    });
    let store = ReportStore::new(&config.reports_dir);
    let potential_path = store.potential_path();
    if !potential_path.exists() {
        return Err(PipelineError::PotentialUnavailable {
            path: potential_path,
        });
    }
    let potential = store.load_potential()?;
    info!("Potential table loaded.");
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Extraction ===
    reporter.report(Progress::PhaseStart {
        name: "Extraction",
    });
    let path = source
        .resolve(id)
        .ok_or_else(|| PipelineError::Unavailable { id: id.to_string() })?;
    if !source.is_rna(id) {
        return Err(PipelineError::NotRna { id: id.to_string() });
    }
    let structure = pdb::read_from_path(&path, id).map_err(|e| PipelineError::Extraction {
        id: id.to_string(),
        source: e,
    })?;
    let models = persist_extracts(&structure, &config.extracts_dir)?;
    info!(id, models = models.len(), "Query structure extracted.");
    reporter.report(Progress::PhaseFinish);

    // === Phase 3: Scoring ===
    reporter.report(Progress::PhaseStart {
        name: "Scoring",
    });
    let estimate = scoring::score_models(&models, &potential);
    reporter.report(Progress::PhaseFinish);

    let report = GibbsReport {
        id: id.to_string(),
        num_models: models.len(),
        pairs_scored: estimate.pairs_scored,
        energy: estimate.energy,
    };
    info!(
        models = report.num_models,
        pairs = report.pairs_scored,
        energy = report.energy,
        "Scoring complete."
    );
    Ok(report)
}

/// Writes every model of the query out as an extract file and returns the
/// models as read back from those extracts, so scoring sees exactly the data
/// a training pass would have seen.
fn persist_extracts(
    structure: &Structure,
    extracts_dir: &Path,
) -> Result<Vec<Model>, PipelineError> {
    let mut models = Vec::with_capacity(structure.num_models());
    for (index, model) in structure.models.iter().enumerate() {
        let path = extract::write_model(extracts_dir, &structure.id, index + 1, model).map_err(
            |e| PipelineError::Extract {
                id: structure.id.clone(),
                source: e,
            },
        )?;
        let restored = extract::read_model(&path).map_err(|e| PipelineError::Extract {
            id: structure.id.clone(),
            source: e,
        })?;
        models.push(restored);
    }
    Ok(models)
}
