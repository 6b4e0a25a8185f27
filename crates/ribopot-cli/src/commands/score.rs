use crate::cli::ScoreArgs;
use crate::config::PartialRunConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use ribopot::pipeline::progress::ProgressReporter;
use ribopot::pipeline::source::DirectorySource;
use ribopot::workflows;
use std::path::Path;
use tracing::info;

pub fn run(args: ScoreArgs, config_path: Option<&Path>) -> Result<()> {
    let partial_config = PartialRunConfig::load(config_path)?;
    info!("Merging configuration from file and CLI arguments...");
    let settings = partial_config.merge_score(&args)?;

    let source = DirectorySource::new(&settings.structures_dir);
    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Scoring {} against the trained potential...", args.id);
    info!("Invoking the core scoring workflow...");

    let report = workflows::score::run(&source, &args.id, &settings.core, &reporter)?;

    println!(
        "✓ Estimated Gibbs energy for {}: {:.4} ({} pair(s) over {} model(s))",
        report.id, report.energy, report.pairs_scored, report.num_models
    );

    Ok(())
}
