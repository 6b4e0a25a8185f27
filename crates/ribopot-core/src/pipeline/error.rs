use crate::core::io::extract::ExtractError;
use crate::core::io::pdb::PdbError;
use crate::core::io::table::TableError;
use crate::core::stats::params::ParamLoadError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Structure '{id}' could not be resolved by the source")]
    Unavailable { id: String },

    #[error("Structure '{id}' is not classified as RNA")]
    NotRna { id: String },

    #[error("Extraction failed for '{id}': {source}")]
    Extraction {
        id: String,
        #[source]
        source: PdbError,
    },

    #[error("Extract file error for '{id}': {source}")]
    Extract {
        id: String,
        #[source]
        source: ExtractError,
    },

    #[error("Report table error: {source}")]
    Report {
        #[from]
        source: TableError,
    },

    #[error("Parameter file error: {source}")]
    Params {
        #[from]
        source: ParamLoadError,
    },

    #[error("No potential table at '{path}'; run a training pass before scoring")]
    PotentialUnavailable { path: PathBuf },

    #[error("No RNA structures available for training")]
    EmptyCorpus,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
