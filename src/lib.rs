// lib.rs - evomarker library root

//! # evomarker - per-position mutation rate calculator for aligned FASTA cohorts
//!
//! Compares one or more aligned FASTA files ("groups") against a reference
//! sequence and reports, for every position where at least one sequence
//! differs from the reference, the frequency of each alternative allele in
//! each group.
//!
//! The crate backs two binaries:
//!
//! - `evo_marker`: the mutation rate table generator
//! - `count_delta`: appends a `delta_F` (max - min) column to tab-separated
//!   tables and filters rows below a minimum delta
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use evomarker::prelude::*;
//! use std::path::Path;
//!
//! let reference = ReferenceSequence::from_fasta(Path::new("reference.fasta"))?;
//! let result = aggregate(&reference, &["cohort_a.fasta".to_string()], true)?;
//! write_report(&reference, &result, "mutations.txt")?;
//! # Ok::<(), String>(())
//! ```

pub mod cli;
pub mod core;
pub mod data;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, validate_delta_args, Args, DeltaArgs, DEFAULT_OUTPUT_NAME};
    pub use crate::core::{add_delta_column, aggregate, compose_output_path, MutationAggregate};
    pub use crate::data::ReferenceSequence;
    pub use crate::output::{write_report, COLUMN_DELIMITER, LINE_DELIMITER};
}

// Re-export main types at the root level for convenience
pub use crate::core::MutationAggregate;
pub use crate::data::ReferenceSequence;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
