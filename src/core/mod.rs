// mod.rs - Core logic module

pub mod aggregate;
pub mod delta;

// Re-export main operations for convenience
pub use aggregate::{aggregate, group_id_for, MutationAggregate, MutationMap};
pub use delta::{add_delta_column, compose_output_path};
