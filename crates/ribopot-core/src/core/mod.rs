//! # Core Module
//!
//! This module provides the fundamental building blocks and algorithms of the
//! RiboPot statistical potential, serving as the computational core of the library.
//!
//! ## Overview
//!
//! The core module implements the data structures, parsing routines, and statistics
//! needed to derive a distance-dependent pseudo-energy from RNA structures and to
//! evaluate it on new conformations. Everything here is stateless: functions map
//! inputs to outputs without touching the filesystem layout or run configuration,
//! which live in the `pipeline` layer.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules that handle different aspects
//! of the method:
//!
//! - **Molecular Representation** ([`models`]) - Atom records, per-model record
//!   sequences, nucleobases, and base-pair classes
//! - **File I/O** ([`io`]) - PDB extraction, model-extract files, and the
//!   semicolon-delimited report tables
//! - **Statistics** ([`stats`]) - Distance binning, count accumulation and merging,
//!   frequency normalization, the log-ratio potential, and scoring
//!
//! ## Key Capabilities
//!
//! - **Backbone-marker extraction** of C3' records from single- and multi-model
//!   PDB files
//! - **Distance histogram accumulation** over intra-chain, sequence-separated
//!   base pairs
//! - **Observed/reference frequency derivation** and the −log10 ratio potential
//! - **Interpolated pseudo-energy evaluation** for candidate structures

pub mod io;
pub mod models;
pub mod stats;
