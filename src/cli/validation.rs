// validation.rs - Input validation utilities

use std::collections::HashSet;
use std::path::Path;

use crate::cli::args::{Args, DeltaArgs};
use crate::core::group_id_for;

/// Validate command line arguments before any file is opened.
///
/// Duplicate group identifiers (two alignment files sharing a file name)
/// would silently merge their counts in the aggregate, so they are rejected
/// up front.
pub fn validate_args(args: &Args) -> Result<(), String> {
    if args.alignment_paths.is_empty() {
        return Err("At least one alignment path is required".to_string());
    }

    let mut seen = HashSet::new();
    for alignment_path in &args.alignment_paths {
        let group_id = group_id_for(Path::new(alignment_path));
        if !seen.insert(group_id.clone()) {
            return Err(format!(
                "Duplicate group identifier '{}': two alignment files share the same file name",
                group_id
            ));
        }
    }

    Ok(())
}

/// Validate command line arguments for the delta tool.
pub fn validate_delta_args(args: &DeltaArgs) -> Result<(), String> {
    if args.input_paths.is_empty() {
        return Err("At least one table path is required".to_string());
    }
    Ok(())
}
