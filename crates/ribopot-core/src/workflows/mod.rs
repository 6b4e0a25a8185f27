//! # Workflows Module
//!
//! This module provides the high-level workflow implementations that orchestrate
//! the two end-to-end procedures of the statistical potential.
//!
//! ## Overview
//!
//! Workflows are the top-level entry points for users of the library. They tie
//! the `pipeline` plumbing (structure sources, the report store, progress
//! reporting) to the `core` computations (extraction, binning, frequency and
//! potential derivation, scoring), handling per-structure failures and
//! persistence so callers deal only in configurations and reports.
//!
//! ## Architecture
//!
//! The module is organized around the two procedures of the method:
//!
//! - **Training Workflow** ([`train`]) - Accumulates distance histograms over a
//!   structure corpus and derives the log-ratio potential tables from them.
//! - **Scoring Workflow** ([`score`]) - Evaluates one candidate structure
//!   against a previously trained potential.
//!
//! ## Key Capabilities
//!
//! - **Batch resilience** where one failed structure is skipped and reported
//!   without aborting the corpus
//! - **Cumulative training** by restoring the persisted accumulator, unless a
//!   reset is requested
//! - **Progress monitoring** with phase and per-structure reporting
//! - **All-or-nothing persistence** of every report table

pub mod score;
pub mod train;
