// reference.rs - Reference sequence loading

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use bio::io::fasta;

/// Single reference sequence, immutable once loaded. Positions are 0-based
/// internally and reported 1-based in the output table.
#[derive(Debug, Clone)]
pub struct ReferenceSequence {
    pub id: String,
    pub seq: Vec<u8>,
}

impl ReferenceSequence {
    /// Load the first record of a FASTA file. Any further records are
    /// ignored; a file without a parseable record is a fatal error.
    pub fn from_fasta(path: &Path) -> Result<Self, String> {
        let file = File::open(path)
            .map_err(|e| format!("Failed to open reference file {}: {}", path.display(), e))?;
        let reader = fasta::Reader::new(BufReader::new(file));

        let record = reader
            .records()
            .next()
            .ok_or_else(|| format!("No FASTA record found in reference file {}", path.display()))?
            .map_err(|e| format!("Invalid FASTA record in {}: {}", path.display(), e))?;

        Ok(Self {
            id: record.id().to_string(),
            seq: record.seq().to_vec(),
        })
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Symbol at a 0-based position.
    pub fn symbol_at(&self, position: usize) -> u8 {
        self.seq[position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_fasta_uses_first_record_only() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, ">ref_a description\nACGT\n>ref_b\nTTTT").unwrap();

        let reference = ReferenceSequence::from_fasta(file.path()).unwrap();
        assert_eq!(reference.id, "ref_a");
        assert_eq!(reference.seq, b"ACGT");
        assert_eq!(reference.len(), 4);
        assert_eq!(reference.symbol_at(3), b'T');
    }

    #[test]
    fn test_from_fasta_empty_file_is_fatal() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let error = ReferenceSequence::from_fasta(file.path()).unwrap_err();
        assert!(error.contains("No FASTA record found"));
    }

    #[test]
    fn test_from_fasta_missing_file_is_fatal() {
        let error =
            ReferenceSequence::from_fasta(Path::new("/nonexistent/reference.fasta")).unwrap_err();
        assert!(error.contains("Failed to open reference file"));
    }
}
