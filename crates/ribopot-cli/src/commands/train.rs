use crate::cli::TrainArgs;
use crate::config::PartialRunConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use ribopot::pipeline::progress::ProgressReporter;
use ribopot::pipeline::source::{DirectorySource, StructureSource};
use ribopot::workflows;
use std::path::Path;
use tracing::{info, warn};

pub fn run(args: TrainArgs, config_path: Option<&Path>) -> Result<()> {
    let partial_config = PartialRunConfig::load(config_path)?;
    info!("Merging configuration from file and CLI arguments...");
    let settings = partial_config.merge_train(&args)?;

    let allowlist = resolve_allowlist(&args)?;
    let mut source = DirectorySource::new(&settings.structures_dir);
    if let Some(ids) = &allowlist {
        info!("Restricting training to {} requested identifier(s).", ids.len());
        source = source.with_allowlist(ids.clone());
    }
    report_missing_requests(&source, allowlist.as_deref());

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Training potential from structures in {}...",
        settings.structures_dir.display()
    );
    info!("Invoking the core training workflow...");

    let report = workflows::train::run(&source, &settings.core, &reporter)?;

    for skipped in &report.skipped {
        warn!(id = %skipped.id, error = %skipped.error, "Structure skipped during training.");
        println!("  ! Skipped {}: {}", skipped.id, skipped.error);
    }

    println!(
        "✓ Trained on {} structure(s): {} pair(s) binned, {} observation(s) accumulated.",
        report.processed.len(),
        report.pairs_binned,
        report.total_observations
    );
    println!(
        "  Report tables written to: {}",
        report.reports_dir.display()
    );

    Ok(())
}

/// Restricts the run to explicitly requested identifiers, taken either from a
/// list file (one per line) or from positional arguments.
fn resolve_allowlist(args: &TrainArgs) -> Result<Option<Vec<String>>> {
    if let Some(path) = &args.list {
        let content = std::fs::read_to_string(path)?;
        let ids: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        return Ok(Some(ids));
    }
    if !args.ids.is_empty() {
        return Ok(Some(args.ids.clone()));
    }
    Ok(None)
}

/// Flags requested identifiers the source cannot offer, so a typo does not
/// silently shrink the corpus.
fn report_missing_requests(source: &DirectorySource, requested: Option<&[String]>) {
    let Some(requested) = requested else {
        return;
    };
    let available = source.list();
    for id in requested {
        if !available.iter().any(|a| a.eq_ignore_ascii_case(id)) {
            warn!(id = %id, "Requested structure not present in the structures directory.");
            println!("  ! Requested structure '{id}' was not found.");
        }
    }
}
