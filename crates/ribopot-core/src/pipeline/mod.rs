//! # Pipeline Module
//!
//! This module holds the stateful plumbing the end-to-end workflows share:
//! run configuration, the report store that persists tables between runs,
//! structure sources, progress reporting, and the pipeline-wide error type.
//!
//! ## Overview
//!
//! Where the `core` layer is pure computation, this layer decides where files
//! live and how runs relate to each other. The report store is what makes
//! training cumulative: the directed accumulator it persists is reloaded at
//! the start of the next run and extended, unless a run asks for a reset.
//!
//! ## Key Components
//!
//! - [`config`] - Training and scoring run configuration with builders
//! - [`error`] - The pipeline-wide error type
//! - [`progress`] - Progress events and the callback reporter seam
//! - [`source`] - Structure lookup, enumeration, and RNA classification
//! - [`store`] - The persisted count, frequency, and potential tables

pub mod config;
pub mod error;
pub mod progress;
pub mod source;
pub mod store;
