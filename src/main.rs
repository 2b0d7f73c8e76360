// main.rs - evo_marker CLI entry point

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
    let args: Args = argh::from_env();
    validate_args(&args)?;

    if !args.quiet {
        println!("🧬 evo_marker v{}", evomarker::VERSION);
    }

    let reference = ReferenceSequence::from_fasta(Path::new(&args.reference_path))?;
    let result = aggregate(&reference, &args.alignment_paths, args.quiet)?;
    write_report(&reference, &result, &args.output_path)?;

    if !args.quiet {
        print_result_file(&args.output_path, "");
    }
    Ok(())
}
