//! Training workflow: walks a corpus of RNA structures, persists their
//! per-model extracts, accumulates directed distance counts, and derives the
//! frequency and potential tables.

use crate::core::io::extract;
use crate::core::io::pdb;
use crate::core::stats::binning;
use crate::core::stats::counts::DirectedCountTable;
use crate::core::stats::frequency::FrequencyTable;
use crate::core::stats::potential::PotentialTable;
use crate::pipeline::config::TrainingConfig;
use crate::pipeline::error::PipelineError;
use crate::pipeline::progress::{Progress, ProgressReporter};
use crate::pipeline::source::StructureSource;
use crate::pipeline::store::ReportStore;
use std::path::PathBuf;
use tracing::{info, instrument, warn};

/// Outcome of one training pass over a structure corpus.
#[derive(Debug)]
pub struct TrainingReport {
    /// Identifiers whose models were extracted and binned.
    pub processed: Vec<String>,
    /// Identifiers the pass gave up on, with the error that removed each one.
    pub skipped: Vec<SkippedStructure>,
    /// Qualifying pairs binned by this pass alone.
    pub pairs_binned: u64,
    /// Observations in the accumulator after this pass, including counts
    /// carried over from earlier passes.
    pub total_observations: u64,
    /// Directory the report tables were written to.
    pub reports_dir: PathBuf,
}

/// One structure that failed a stage and was dropped from the pass.
#[derive(Debug)]
pub struct SkippedStructure {
    pub id: String,
    pub error: PipelineError,
}

/// Executes the training workflow.
///
/// Every RNA structure offered by `source` is read, split into models, written
/// out as extract files, and binned into the directed count accumulator. The
/// accumulator starts from the persisted counts of earlier passes unless
/// [`TrainingConfig::reset`] is set. Afterwards the merged counts, both
/// frequency tables, and the potential are derived and written to the reports
/// directory.
///
/// A structure that fails extraction or binning is skipped and recorded in the
/// report; only an empty corpus or a persistence failure aborts the pass.
#[instrument(skip_all, name = "training_workflow")]
pub fn run(
    source: &dyn StructureSource,
    config: &TrainingConfig,
    reporter: &ProgressReporter,
) -> Result<TrainingReport, PipelineError> {
    // === Phase 1: Preparation ===
    reporter.report(Progress::PhaseStart {
        name: "Preparation",
    });
    info!("Starting training pass: restoring the count accumulator.");

    let store = ReportStore::new(&config.reports_dir);
    let mut accumulator = if config.reset {
        info!("Reset requested; starting from an empty accumulator.");
        DirectedCountTable::zeroed()
    } else {
        store.load_directed_counts()?.unwrap_or_default()
    };

    let rna_ids = select_rna(source);
    if rna_ids.is_empty() {
        return Err(PipelineError::EmptyCorpus);
    }
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Extraction & Binning ===
    reporter.report(Progress::PhaseStart {
        name: "Binning Distances",
    });
    reporter.report(Progress::CorpusStart {
        structures: rna_ids.len() as u64,
    });

    let mut processed = Vec::new();
    let mut skipped = Vec::new();
    let mut pairs_binned = 0;

    for id in rna_ids {
        match bin_structure(source, &id, config, &mut accumulator) {
            Ok(pairs) => {
                pairs_binned += pairs;
                processed.push(id);
            }
            Err(error) => {
                warn!(id = %id, %error, "Skipping structure after a stage failure.");
                reporter.message(format!("Skipping {id}: {error}"));
                skipped.push(SkippedStructure { id, error });
            }
        }
        reporter.report(Progress::StructureDone);
    }
    reporter.report(Progress::PhaseFinish);

    // === Phase 3: Derivation ===
    reporter.report(Progress::PhaseStart {
        name: "Deriving Potential",
    });
    let merged = accumulator.merged();
    let observed = FrequencyTable::observed(&merged);
    let reference = FrequencyTable::reference(&merged);
    let potential = PotentialTable::derive(&observed, &reference, &config.params);
    reporter.report(Progress::PhaseFinish);

    // === Phase 4: Persistence ===
    reporter.report(Progress::PhaseStart {
        name: "Writing Reports",
    });
    store.save_directed_counts(&accumulator)?;
    store.save_counts(&merged)?;
    store.save_observed(&observed)?;
    store.save_reference(&reference)?;
    store.save_potential(&potential)?;
    reporter.report(Progress::PhaseFinish);

    let report = TrainingReport {
        processed,
        skipped,
        pairs_binned,
        total_observations: accumulator.total(),
        reports_dir: config.reports_dir.clone(),
    };
    info!(
        processed = report.processed.len(),
        skipped = report.skipped.len(),
        pairs = report.pairs_binned,
        "Training pass complete."
    );
    Ok(report)
}

/// Narrows the source listing down to the structures classified as RNA.
fn select_rna(source: &dyn StructureSource) -> Vec<String> {
    let available = source.list();
    info!(
        available = available.len(),
        "Enumerated candidate structures."
    );
    let rna: Vec<String> = available
        .into_iter()
        .filter(|id| source.is_rna(id))
        .collect();
    info!(rna = rna.len(), "Classified RNA structures for training.");
    rna
}

/// Reads one structure, persists every model as an extract file, and bins the
/// qualifying pairs of each model as read back from its extract.
fn bin_structure(
    source: &dyn StructureSource,
    id: &str,
    config: &TrainingConfig,
    accumulator: &mut DirectedCountTable,
) -> Result<u64, PipelineError> {
    let path = source
        .resolve(id)
        .ok_or_else(|| PipelineError::Unavailable { id: id.to_string() })?;
    let structure = pdb::read_from_path(&path, id).map_err(|e| PipelineError::Extraction {
        id: id.to_string(),
        source: e,
    })?;

    let mut pairs = 0;
    for (index, model) in structure.models.iter().enumerate() {
        let extract_path = extract::write_model(&config.extracts_dir, id, index + 1, model)
            .map_err(|e| PipelineError::Extract {
                id: id.to_string(),
                source: e,
            })?;
        let restored = extract::read_model(&extract_path).map_err(|e| PipelineError::Extract {
            id: id.to_string(),
            source: e,
        })?;
        pairs += binning::bin_model(&restored, accumulator);
    }
    info!(
        id,
        models = structure.num_models(),
        pairs,
        "Structure binned."
    );
    Ok(pairs)
}
