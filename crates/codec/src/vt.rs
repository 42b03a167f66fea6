//! Varshamov-Tenengolts single-edit detection.
//!
//! The codeword body is summarized by a position-weighted syndrome modulo
//! `2n` and a plain symbol checksum modulo 4. Any single substitution moves
//! the checksum (the delta is nonzero mod 4); insertions and deletions move
//! the syndrome through the shifted weights and modulus. Detection only —
//! locating and correcting the edit is left to the reader of the report.

use crate::error::{CodecError, ErrorKind};
use crate::suffix;

/// Syndrome / checksum pair over a codeword body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VtDigest {
    pub syndrome: usize,
    pub checksum: u8,
}

/// Compute the digest of `seq`: `(Σ (i+1)·x[i]) mod 2n` and `(Σ x[i]) mod 4`.
pub fn digest(seq: &[u8]) -> VtDigest {
    let n = seq.len();
    if n == 0 {
        return VtDigest {
            syndrome: 0,
            checksum: 0,
        };
    }
    let weighted: usize = seq
        .iter()
        .enumerate()
        .map(|(i, &s)| (i + 1) * s as usize)
        .sum();
    let plain: usize = seq.iter().map(|&s| s as usize).sum();
    VtDigest {
        syndrome: weighted % (2 * n),
        checksum: (plain % 4) as u8,
    }
}

/// Base-4 digits needed for a syndrome over a body of `n` symbols.
pub fn syndrome_width(n: usize) -> usize {
    suffix::quart_width(2 * n)
}

/// Emit the digest as an interleaved suffix: syndrome digits (most
/// significant first) then the checksum digit, each paired with its flip.
/// Total length is `2 * (syndrome_width(n) + 1)`.
pub fn build_suffix(d: VtDigest, n: usize) -> Vec<u8> {
    let mut digits = suffix::to_digits(d.syndrome, syndrome_width(n));
    digits.push(d.checksum);
    suffix::interleave(&digits)
}

/// Parse an interleaved digest suffix of the given syndrome width.
///
/// A broken pair is already evidence of an edit inside the suffix region, so
/// it surfaces as `ErrorDetected` rather than a framing error.
pub fn parse_suffix(pairs: &[u8], width: usize) -> Result<VtDigest, CodecError> {
    let digits = suffix::deinterleave(pairs).map_err(|_| CodecError::ErrorDetected {
        kind: ErrorKind::Unknown,
    })?;
    if digits.len() != width + 1 {
        return Err(CodecError::ErrorDetected {
            kind: ErrorKind::Unknown,
        });
    }
    let (syn_digits, chk) = digits.split_at(width);
    Ok(VtDigest {
        syndrome: suffix::from_digits(syn_digits),
        checksum: chk[0],
    })
}

/// Guess the kind of edit behind a digest mismatch. A preserved checksum
/// with a moved syndrome points at an inserted or deleted A (symbol 0);
/// a moved checksum most often means a substitution.
pub fn classify(stored: VtDigest, recomputed: VtDigest) -> ErrorKind {
    if stored.checksum == recomputed.checksum && stored.syndrome != recomputed.syndrome {
        ErrorKind::InsertionOrDeletion
    } else if stored.checksum != recomputed.checksum {
        ErrorKind::Substitution
    } else {
        ErrorKind::Unknown
    }
}
