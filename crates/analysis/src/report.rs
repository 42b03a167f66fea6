//! Aggregate report over a DNA sequence.

use serde::Serialize;

use helix_codec::{alphabet, CodecError, CodecParams};

use crate::composition::{self, NucleotideCounts};
use crate::runs::{self, HomopolymerRun};

/// Everything the analyzer knows about one sequence.
#[derive(Debug, Clone, Serialize)]
pub struct SequenceReport {
    pub sequence: String,
    pub length: usize,
    pub gc_content: f64,
    pub gc_balanced: bool,
    pub gc_target: (f64, f64),
    pub max_runlength: usize,
    pub runlength_ok: bool,
    pub runlength_limit: usize,
    pub counts: NucleotideCounts,
    pub runs: Vec<HomopolymerRun>,
}

/// Pass/fail summary of the codeword constraints.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConstraintCheck {
    pub gc_balanced: bool,
    pub runlength_ok: bool,
}

impl ConstraintCheck {
    pub fn all_ok(&self) -> bool {
        self.gc_balanced && self.runlength_ok
    }
}

/// Analyze a DNA string against the given constraint parameters.
pub fn analyze(dna: &str, ell: usize, epsilon: f64) -> Result<SequenceReport, CodecError> {
    validate(ell, epsilon)?;
    let symbols = alphabet::dna_to_symbols(dna)?;
    let max_runlength = runs::max_runlength(&symbols);
    Ok(SequenceReport {
        sequence: dna.to_uppercase(),
        length: symbols.len(),
        gc_content: composition::gc_content(&symbols),
        gc_balanced: composition::is_gc_balanced(&symbols, epsilon),
        gc_target: (0.5 - epsilon, 0.5 + epsilon),
        max_runlength,
        runlength_ok: max_runlength <= ell,
        runlength_limit: ell,
        counts: composition::nucleotide_counts(&symbols),
        runs: runs::homopolymer_runs(&symbols),
    })
}

/// Check both codeword constraints at once.
pub fn constraints_valid(dna: &str, ell: usize, epsilon: f64) -> Result<ConstraintCheck, CodecError> {
    let report = analyze(dna, ell, epsilon)?;
    Ok(ConstraintCheck {
        gc_balanced: report.gc_balanced,
        runlength_ok: report.runlength_ok,
    })
}

fn validate(ell: usize, epsilon: f64) -> Result<(), CodecError> {
    CodecParams {
        ell,
        epsilon,
        use_ec: false,
    }
    .validate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_balanced_sequence() {
        let report = analyze("ATCGATCG", 3, 0.05).unwrap();
        assert_eq!(report.length, 8);
        assert_eq!(report.gc_content, 0.5);
        assert!(report.gc_balanced);
        assert_eq!(report.max_runlength, 1);
        assert!(report.runlength_ok);
        assert!(report.runs.is_empty());
    }

    #[test]
    fn test_analyze_run_violations() {
        let report = analyze("AAAATTTCCCGGG", 3, 0.05).unwrap();
        assert_eq!(report.max_runlength, 4);
        assert!(!report.runlength_ok);
        assert_eq!(report.runs.len(), 4);
        // 6 of 13 bases are GC
        assert!((report.gc_content - 6.0 / 13.0).abs() < 1e-12);
    }

    #[test]
    fn test_analyze_gc_skew() {
        let report = analyze("CGCGCGCG", 3, 0.05).unwrap();
        assert_eq!(report.gc_content, 1.0);
        assert!(!report.gc_balanced);
        assert!(report.runlength_ok);
    }

    #[test]
    fn test_analyze_accepts_lowercase() {
        let report = analyze("atcg", 3, 0.05).unwrap();
        assert_eq!(report.sequence, "ATCG");
        assert_eq!(report.counts.a, 1);
    }

    #[test]
    fn test_analyze_rejects_bad_alphabet() {
        assert!(matches!(
            analyze("ATXG", 3, 0.05),
            Err(CodecError::BadAlphabet('X'))
        ));
    }

    #[test]
    fn test_analyze_rejects_bad_params() {
        assert!(matches!(
            analyze("ATCG", 1, 0.05),
            Err(CodecError::InvalidParameter(_))
        ));
        assert!(matches!(
            analyze("ATCG", 3, 0.7),
            Err(CodecError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_constraints_valid() {
        let check = constraints_valid("ATCGATCG", 3, 0.05).unwrap();
        assert!(check.all_ok());
        let check = constraints_valid("AAAAAAAA", 3, 0.05).unwrap();
        assert!(!check.gc_balanced);
        assert!(!check.runlength_ok);
    }
}
