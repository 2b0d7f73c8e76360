// args.rs - Command line arguments definition

use argh::FromArgs;

/// Default output file name for the evo_marker tool.
pub const DEFAULT_OUTPUT_NAME: &str = "evo_marker_output.txt";

#[derive(FromArgs, Debug)]
/// Compares the given alignments with a reference file, finds the mutations,
/// writes the rate of each mutation for each file in the output
pub struct Args {
    /// path to alignment file (one group per file)
    #[argh(positional)]
    pub alignment_paths: Vec<String>,

    /// reference genome fasta file
    #[argh(option, short = 'd', long = "ref")]
    pub reference_path: String,

    /// path to output file (default: evo_marker_output.txt)
    #[argh(option, short = 'o', long = "out", default = "DEFAULT_OUTPUT_NAME.to_string()")]
    pub output_path: String,

    /// don't print progress on standard output
    #[argh(switch, short = 'q')]
    pub quiet: bool,
}

#[derive(FromArgs, Debug)]
/// Calculate the delta_F function (max - min) for each row of the input
/// tables and filter rows below a minimum delta
pub struct DeltaArgs {
    /// path to table file to process
    #[argh(positional)]
    pub input_paths: Vec<String>,

    /// min value of delta_F required to keep a row (default: 0)
    #[argh(option, long = "min-delta-f", default = "0.0")]
    pub min_delta_f: f64,
}
