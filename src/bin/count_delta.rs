// count_delta.rs - delta_F table transform CLI entry point

use std::path::Path;

use evomarker::output::print_result_file;
use evomarker::prelude::*;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let args: DeltaArgs = argh::from_env();
    validate_delta_args(&args)?;

    // Each input is processed independently into its own derived output file.
    for input in &args.input_paths {
        let input_path = Path::new(input);
        let output_path = compose_output_path(input_path, args.min_delta_f);
        add_delta_column(input_path, &output_path, args.min_delta_f)?;
        print_result_file(
            &output_path.display().to_string(),
            &format!("for input file \"{}\"", input),
        );
    }
    Ok(())
}
