use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "RiboPot CLI - A command-line interface for training a knowledge-based RNA statistical potential from solved structures and scoring candidate conformations against it.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to an optional configuration file in TOML format
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Accumulate distance statistics from a corpus of RNA structures and derive the potential tables.
    Train(TrainArgs),
    /// Estimate the Gibbs free energy of one structure against the trained potential.
    Score(ScoreArgs),
}

/// Arguments for the `train` subcommand.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Structure identifiers to train on.
    /// Defaults to every RNA structure found in the structures directory.
    #[arg(value_name = "ID", conflicts_with = "list")]
    pub ids: Vec<String>,

    /// Path to a file listing structure identifiers, one per line.
    #[arg(short, long, value_name = "PATH")]
    pub list: Option<PathBuf>,

    /// Override the directory holding the source structure files.
    #[arg(short = 'd', long, value_name = "DIR")]
    pub structures: Option<PathBuf>,

    /// Override the directory receiving the per-model extract files.
    #[arg(long, value_name = "DIR")]
    pub extracts: Option<PathBuf>,

    /// Override the directory receiving the report tables.
    #[arg(short, long, value_name = "DIR")]
    pub reports: Option<PathBuf>,

    /// Discard previously accumulated counts before this run.
    #[arg(long)]
    pub reset: bool,

    /// Path to an energy parameter file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub params: Option<PathBuf>,

    /// Override the pseudo-energy assigned to unobserved distance cells.
    #[arg(long, value_name = "FLOAT")]
    pub penalty: Option<f64>,
}

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Identifier of the structure to score.
    #[arg(value_name = "ID", required = true)]
    pub id: String,

    /// Override the directory holding the source structure files.
    #[arg(short = 'd', long, value_name = "DIR")]
    pub structures: Option<PathBuf>,

    /// Override the directory receiving the per-model extract files.
    #[arg(long, value_name = "DIR")]
    pub extracts: Option<PathBuf>,

    /// Override the directory holding the trained report tables.
    #[arg(short, long, value_name = "DIR")]
    pub reports: Option<PathBuf>,
}
