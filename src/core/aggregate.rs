// aggregate.rs - Per-position mutation aggregation across alignment files

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use bio::io::fasta;

use crate::data::ReferenceSequence;
use crate::output::print_warning;

/// position -> mutated allele -> group id -> occurrence count.
///
/// The two BTreeMap levels give the report writer ascending positions and
/// sorted alleles without a separate sort pass.
pub type MutationMap = BTreeMap<usize, BTreeMap<u8, HashMap<String, u32>>>;

/// Fully materialized aggregation result for one run.
#[derive(Debug, Default)]
pub struct MutationAggregate {
    pub mutations: MutationMap,
    /// Group ids in the order their files were supplied; drives output columns.
    pub group_order: Vec<String>,
    /// Records processed per group, the denominator for frequencies.
    pub group_totals: HashMap<String, u32>,
}

/// Derive the group identifier from an alignment path (its file name).
pub fn group_id_for(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Scan every alignment file against the reference and accumulate mismatch
/// counts keyed by (position, allele, group).
///
/// Each record is compared over the overlapping prefix of record and
/// reference; a length disagreement is warned about but never rejects the
/// record. Every record counts toward its group total, mismatches or not.
pub fn aggregate(
    reference: &ReferenceSequence,
    alignment_paths: &[String],
    quiet: bool,
) -> Result<MutationAggregate, String> {
    let mut result = MutationAggregate::default();

    for alignment_path in alignment_paths {
        let path = Path::new(alignment_path);
        let group_id = group_id_for(path);
        if result.group_totals.contains_key(&group_id) {
            return Err(format!(
                "Duplicate group identifier '{}': two alignment files share the same file name",
                group_id
            ));
        }

        if !quiet {
            println!("🧬 Processing {}", alignment_path);
        }

        let file = File::open(path)
            .map_err(|e| format!("Failed to open alignment file {}: {}", alignment_path, e))?;
        let reader = fasta::Reader::new(BufReader::new(file));

        let mut count: u32 = 0;
        for record_result in reader.records() {
            let record = record_result
                .map_err(|e| format!("Invalid FASTA record in {}: {}", alignment_path, e))?;
            count += 1;
            if let Some(message) = length_mismatch(&record, reference) {
                print_warning(&[message]);
            }

            let seq = record.seq();
            let overlap = reference.len().min(seq.len());
            for position in 0..overlap {
                let observed = seq[position];
                if reference.symbol_at(position) != observed {
                    *result
                        .mutations
                        .entry(position)
                        .or_default()
                        .entry(observed)
                        .or_default()
                        .entry(group_id.clone())
                        .or_insert(0) += 1;
                }
            }
        }

        result.group_totals.insert(group_id.clone(), count);
        result.group_order.push(group_id);
    }

    Ok(result)
}

/// Warning message for a record whose length disagrees with the reference,
/// or None when the lengths match. The record is still compared over the
/// overlapping prefix either way.
fn length_mismatch(record: &fasta::Record, reference: &ReferenceSequence) -> Option<String> {
    let record_len = record.seq().len();
    if record_len != reference.len() {
        Some(format!(
            "{}: invalid length {} ({} expected)",
            record.id(),
            record_len,
            reference.len()
        ))
    } else {
        None
    }
}
