//! # Statistics Module
//!
//! This module holds the numerical heart of the method: turning pair distances
//! into histograms, histograms into frequencies, frequencies into a log-ratio
//! pseudo-energy, and the pseudo-energy into per-structure scores.
//!
//! ## Overview
//!
//! Training and scoring share the same geometric walk over a model's records
//! ([`binning::qualifying_pairs`]); they differ only in what they do with each
//! pair. Training increments the directed count table, from which canonical
//! counts, observed/reference frequencies, and finally the potential table are
//! derived. Scoring reads the potential table back and sums interpolated
//! values over the pairs of a candidate structure.
//!
//! ## Key Components
//!
//! - [`buckets`] - The 1 Å distance buckets covering 0 to 20 Å
//! - [`binning`] - Qualifying-pair enumeration and count accumulation
//! - [`counts`] - Directed and canonical count tables and their merge
//! - [`frequency`] - Row- and column-normalized frequency tables
//! - [`params`] - Tunable constants of the pseudo-energy model
//! - [`potential`] - The −log10 ratio table and its interpolation
//! - [`scoring`] - Pseudo-energy accumulation over candidate structures

pub mod binning;
pub mod buckets;
pub mod counts;
pub mod frequency;
pub mod params;
pub mod potential;
pub mod scoring;
