//! Provides input/output functionality for the files the potential works with.
//!
//! This module contains the PDB-format extraction used to pull backbone-marker
//! records out of source structures, the per-model extract files the pipeline
//! persists and reads back, and the semicolon-delimited rectangular tables in
//! which counts, frequencies, and potentials are stored.

pub mod extract;
pub mod pdb;
pub mod table;
