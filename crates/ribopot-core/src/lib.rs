//! # RiboPot Core Library
//!
//! A knowledge-based statistical potential for RNA tertiary structure. The library
//! trains a pairwise distance-dependent pseudo-energy from a corpus of solved RNA
//! structures and applies it to estimate a Gibbs-like free energy for candidate
//! conformations.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (atom records,
//!   models, pair classes), structure-file parsing, and the pure statistics of the
//!   potential (binning, frequencies, log-ratio energies, interpolation).
//!
//! - **[`pipeline`]: The Logic Core.** This layer holds the stateful plumbing shared
//!   by complete runs: run configuration, the report store that persists count and
//!   energy tables between runs, structure sources, progress reporting, and the
//!   pipeline-wide error type.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer.
//!   It ties the `pipeline` and `core` together to execute the two end-to-end
//!   procedures of the method: training a potential from a structure corpus and
//!   scoring a single structure against a trained potential.

pub mod core;
pub mod pipeline;
pub mod workflows;
