// mod.rs - CLI module

pub mod args;
pub mod validation;

// Re-export main types for convenience
pub use args::{Args, DeltaArgs, DEFAULT_OUTPUT_NAME};
pub use validation::{validate_args, validate_delta_args};
