//! # Core Models Module
//!
//! This module contains the fundamental data structures used to represent RNA
//! structures and base-pair classes, providing the foundation for every other
//! operation in the library.
//!
//! ## Overview
//!
//! The models module defines the core abstractions of the statistical potential:
//! the filtered atom records the method tracks, the per-model record sequences
//! they form, and the alphabet of base-pair classes over which distances are
//! histogrammed. These models are designed to:
//!
//! - **Represent structure extracts** - The ordered C3' records of each
//!   conformational model, exactly as filtered from the source file
//! - **Fix the pair alphabet** - Sixteen directed base pairs and the ten
//!   canonical classes they merge into, in stable report-row order
//! - **Maintain type safety** - Strong typing for bases and pair classes so
//!   row indices cannot be confused with bucket indices
//!
//! ## Key Components
//!
//! - [`atom`] - A single filtered coordinate record with its source fields
//! - [`base`] - The four standard ribonucleotide bases
//! - [`pairs`] - Directed base pairs and canonical pair classes
//! - [`model`] - One conformational model and the structure that groups them

pub mod atom;
pub mod base;
pub mod model;
pub mod pairs;
