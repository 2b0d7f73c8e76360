// mod.rs - Table conventions and report writer

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::core::aggregate::MutationAggregate;
use crate::data::ReferenceSequence;

/// Column separator shared by every table reader and writer in the crate.
pub const COLUMN_DELIMITER: char = '\t';

/// Line separator for table output.
pub const LINE_DELIMITER: char = '\n';

/// Round to 3 decimal places, half away from zero.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Render a rounded value with trailing zeros trimmed but at least one
/// fractional digit kept: `1.0`, `0.5`, `0.333`.
pub fn format_value(value: f64) -> String {
    let mut text = format!("{:.3}", round3(value));
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.push('0');
    }
    text
}

/// Emit a warning as one or more lines on stderr. Warnings are never
/// suppressed, regardless of the quiet flag.
pub fn print_warning(lines: &[String]) {
    eprintln!("⚠️  {}", lines.join(&LINE_DELIMITER.to_string()));
}

/// Final notice naming a result file, optionally with extra context.
pub fn print_result_file(path: &str, context: &str) {
    if context.is_empty() {
        println!("📁 Result file: \"{}\"", path);
    } else {
        println!("📁 Result file: \"{}\" ({})", path, context);
    }
}

/// Write the mutation rate table: header `pos`, `ref`, `alt` plus one column
/// per group in the order the alignment files were supplied, then one row per
/// (position, allele) pair with positions ascending and alleles sorted.
pub fn write_report(
    reference: &ReferenceSequence,
    result: &MutationAggregate,
    output_path: &str,
) -> Result<(), String> {
    let file = File::create(output_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", output_path, e))?;
    let mut writer = BufWriter::new(file);

    let mut header: Vec<String> = vec!["pos".to_string(), "ref".to_string(), "alt".to_string()];
    header.extend(result.group_order.iter().cloned());
    write_row(&mut writer, &header, output_path)?;

    for (&position, alleles) in &result.mutations {
        let reference_allele = reference.symbol_at(position) as char;
        for (&allele, group_counts) in alleles {
            let mut row = vec![
                (position + 1).to_string(),
                reference_allele.to_string(),
                (allele as char).to_string(),
            ];
            for group_id in &result.group_order {
                let total = result.group_totals.get(group_id).copied().unwrap_or(0);
                let count = group_counts.get(group_id).copied().unwrap_or(0);
                let frequency = if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64
                };
                row.push(format_value(frequency));
            }
            write_row(&mut writer, &row, output_path)?;
        }
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output file '{}': {}", output_path, e))?;
    Ok(())
}

fn write_row(writer: &mut impl Write, columns: &[String], path: &str) -> Result<(), String> {
    let line = columns.join(&COLUMN_DELIMITER.to_string());
    write!(writer, "{}{}", line, LINE_DELIMITER)
        .map_err(|e| format!("Failed to write to output file '{}': {}", path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round3() {
        assert_eq!(round3(1.0 / 3.0), 0.333);
        assert_eq!(round3(2.0 / 3.0), 0.667);
        assert_eq!(round3(0.5), 0.5);
        assert_eq!(round3(0.0), 0.0);
    }

    #[test]
    fn test_format_value_keeps_one_fractional_digit() {
        assert_eq!(format_value(1.0), "1.0");
        assert_eq!(format_value(0.0), "0.0");
        assert_eq!(format_value(3.0), "3.0");
    }

    #[test]
    fn test_format_value_trims_trailing_zeros() {
        assert_eq!(format_value(0.5), "0.5");
        assert_eq!(format_value(0.25), "0.25");
        assert_eq!(format_value(1.0 / 3.0), "0.333");
    }
}
