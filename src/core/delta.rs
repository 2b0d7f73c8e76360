// delta.rs - delta_F table transform

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::output::{format_value, print_warning, round3, COLUMN_DELIMITER, LINE_DELIMITER};

/// Derive the output path for an input table: `delta_` prefix, plus
/// `filter_min{N}_` when a positive threshold is set, same directory and
/// base name.
pub fn compose_output_path(input_path: &Path, min_delta: f64) -> PathBuf {
    let base = input_path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    let name = if min_delta > 0.0 {
        format!("delta_filter_min{}_{}", format_value(min_delta), base)
    } else {
        format!("delta_{}", base)
    };
    match input_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(name),
        _ => PathBuf::from(name),
    }
}

/// Append a `delta_F` column (max - min of the numeric columns from the 4th
/// onward) to a tab-separated table and keep only rows whose delta strictly
/// exceeds `min_delta`. Malformed rows are warned about and copied through
/// to the output unchanged.
pub fn add_delta_column(
    input_path: &Path,
    output_path: &Path,
    min_delta: f64,
) -> Result<(), String> {
    let file = File::open(input_path)
        .map_err(|e| format!("Failed to open table file {}: {}", input_path.display(), e))?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    let header = lines
        .next()
        .ok_or_else(|| format!("Empty table file: {}", input_path.display()))?
        .map_err(|e| format!("Failed to read header from {}: {}", input_path.display(), e))?
        .trim()
        .to_string();

    let column_number = header.split(COLUMN_DELIMITER).count();
    if column_number < 4 {
        return Err(format!("Invalid header line: {}", header));
    }

    let out_file = File::create(output_path).map_err(|e| {
        format!(
            "Failed to create output file {}: {}",
            output_path.display(),
            e
        )
    })?;
    let mut writer = BufWriter::new(out_file);
    write_line(
        &mut writer,
        output_path,
        &format!("{}{}delta_F", header, COLUMN_DELIMITER),
    )?;

    for (index, line_result) in lines.enumerate() {
        let raw = line_result.map_err(|e| {
            format!(
                "Failed to read line {} from {}: {}",
                index + 2,
                input_path.display(),
                e
            )
        })?;
        let line = raw.trim().to_string();
        let line_number = index + 1; // 1-based over data rows, header excluded

        if line.is_empty() {
            pass_through(&mut writer, output_path, &raw, line_number, "Empty line")?;
            continue;
        }

        let columns: Vec<&str> = line.split(COLUMN_DELIMITER).collect();
        if columns.len() < column_number {
            let message = format!(
                "Invalid number of values: {} ({} expected)",
                columns.len(),
                column_number
            );
            pass_through(&mut writer, output_path, &raw, line_number, &message)?;
            continue;
        }

        match parse_measurements(&columns) {
            Ok(values) => {
                let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
                let delta = round3(max - min);
                if delta > min_delta {
                    write_line(
                        &mut writer,
                        output_path,
                        &format!("{}{}{}", line, COLUMN_DELIMITER, format_value(delta)),
                    )?;
                }
            }
            Err(message) => {
                pass_through(&mut writer, output_path, &raw, line_number, &message)?;
            }
        }
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush {}: {}", output_path.display(), e))?;
    Ok(())
}

/// Parse every column from the 4th onward as a measurement value.
fn parse_measurements(columns: &[&str]) -> Result<Vec<f64>, String> {
    columns[3..]
        .iter()
        .map(|column| {
            column
                .parse::<f64>()
                .map_err(|e| format!("Invalid value: '{}' ({})", column, e))
        })
        .collect()
}

/// Warn about an anomalous row and copy it to the output verbatim.
fn pass_through(
    writer: &mut BufWriter<File>,
    output_path: &Path,
    raw_line: &str,
    line_number: usize,
    message: &str,
) -> Result<(), String> {
    let mut text = vec![format!("Line {}: {}", line_number, message)];
    if !raw_line.trim().is_empty() {
        text.push(raw_line.to_string());
    }
    print_warning(&text);
    write_line(writer, output_path, raw_line)
}

fn write_line(
    writer: &mut BufWriter<File>,
    output_path: &Path,
    line: &str,
) -> Result<(), String> {
    write!(writer, "{}{}", line, LINE_DELIMITER)
        .map_err(|e| format!("Failed to write to {}: {}", output_path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_output_path_without_threshold() {
        let path = compose_output_path(Path::new("/data/rates.txt"), 0.0);
        assert_eq!(path, PathBuf::from("/data/delta_rates.txt"));
    }

    #[test]
    fn test_compose_output_path_with_threshold() {
        let path = compose_output_path(Path::new("/data/rates.txt"), 0.5);
        assert_eq!(path, PathBuf::from("/data/delta_filter_min0.5_rates.txt"));
    }

    #[test]
    fn test_compose_output_path_bare_file_name() {
        let path = compose_output_path(Path::new("rates.txt"), 0.0);
        assert_eq!(path, PathBuf::from("delta_rates.txt"));
    }

    #[test]
    fn test_parse_measurements_skips_label_columns() {
        let columns = vec!["1", "foo", "2", "5", "2"];
        assert_eq!(parse_measurements(&columns).unwrap(), vec![5.0, 2.0]);
    }

    #[test]
    fn test_parse_measurements_reports_bad_value() {
        let columns = vec!["1", "foo", "2", "abc", "2"];
        let error = parse_measurements(&columns).unwrap_err();
        assert!(error.contains("Invalid value: 'abc'"));
    }
}
