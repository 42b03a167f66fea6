//! Runlength-limited coding by zero-run escapes.
//!
//! The coder operates in the transition (differential) domain: a zero run of
//! length `r` there becomes a homopolymer run of `r + 1` once the prefix sum
//! is taken, so capping zero runs at `ell - 1` caps homopolymers at `ell`.
//!
//! Escape grammar over the coded string:
//!
//! - a maximal zero run shorter than the cap is literal;
//! - a maximal zero run of exactly the cap that is not at the end of the
//!   string opens an escape: extent digits over {1, 2} (bijective base-2,
//!   most significant first, empty for zero extent), a closing `3`, then
//!   either the protected nonzero symbol or — for the trailing run — a final
//!   `0` that doubles as the terminator;
//! - the trailing zero run is literal when it fits within the cap.
//!
//! The encoder never emits a literal zero run reaching the cap anywhere but
//! the end, so every parse decision is forced and decoding is a single
//! deterministic pass. Every non-empty input is terminated with an appended
//! `0` before coding; the coded string therefore always ends in `0`.

use crate::error::CodecError;

/// Closing digit of an escape's extent field.
const ESCAPE_CLOSE: u8 = 3;

/// Runlength-limited codec for a fixed homopolymer bound.
#[derive(Debug, Clone, Copy)]
pub struct RllCodec {
    ell: usize,
}

impl RllCodec {
    /// Create a codec enforcing homopolymer runs of at most `ell` (`ell >= 2`).
    pub fn new(ell: usize) -> Self {
        debug_assert!(ell >= 2);
        Self { ell }
    }

    /// Maximum homopolymer run length in the channel word.
    pub fn ell(&self) -> usize {
        self.ell
    }

    /// Longest zero run the coded string may carry.
    fn cap(&self) -> usize {
        self.ell - 1
    }

    /// Encode `data`, returning the coded string and whether a terminator was
    /// appended (always, except for the empty input).
    pub fn encode(&self, data: &[u8]) -> (Vec<u8>, bool) {
        if data.is_empty() {
            return (Vec::new(), false);
        }
        let cap = self.cap();
        let n = data.len();
        let total = n + 1;
        // data with the terminator appended, without materializing it
        let sym = |idx: usize| if idx < n { data[idx] } else { 0 };

        let mut out = Vec::with_capacity(total + 2);
        let mut i = 0;
        while i < total {
            if sym(i) != 0 {
                out.push(sym(i));
                i += 1;
                continue;
            }
            let start = i;
            while i < total && sym(i) == 0 {
                i += 1;
            }
            let run = i - start;
            let at_end = i == total;
            if at_end {
                if run <= cap {
                    out.resize(out.len() + run, 0);
                } else {
                    out.resize(out.len() + cap, 0);
                    push_extent(&mut out, run - cap - 1);
                    out.push(ESCAPE_CLOSE);
                    out.push(0);
                }
            } else if run < cap {
                out.resize(out.len() + run, 0);
            } else {
                out.resize(out.len() + cap, 0);
                push_extent(&mut out, run - cap);
                out.push(ESCAPE_CLOSE);
                // the protected symbol is copied by the next iteration
            }
        }
        (out, true)
    }

    /// Decode a coded string back to the original data.
    pub fn decode(&self, coded: &[u8]) -> Result<Vec<u8>, CodecError> {
        if coded.is_empty() {
            return Ok(Vec::new());
        }
        let cap = self.cap();
        let n = coded.len();
        if coded[n - 1] != 0 {
            return Err(CodecError::BadRll("terminator missing".into()));
        }

        let mut out = Vec::with_capacity(n);
        let mut i = 0;
        while i < n {
            if coded[i] != 0 {
                out.push(coded[i]);
                i += 1;
                continue;
            }
            let start = i;
            while i < n && coded[i] == 0 {
                i += 1;
            }
            let run = i - start;
            if run > cap {
                return Err(CodecError::BadRll(format!(
                    "zero run of {run} exceeds cap {cap}"
                )));
            }
            if run < cap || i == n {
                // literal run (short, or trailing including the terminator)
                out.resize(out.len() + run, 0);
                continue;
            }
            // escape: extent digits, a close marker, then the protected symbol
            let mut extent = 0usize;
            loop {
                match coded.get(i).copied() {
                    Some(d) if d == 1 || d == 2 => {
                        extent = extent
                            .checked_mul(2)
                            .and_then(|e| e.checked_add(d as usize))
                            .ok_or_else(|| CodecError::BadRll("extent overflow".into()))?;
                        i += 1;
                    }
                    Some(ESCAPE_CLOSE) => {
                        i += 1;
                        break;
                    }
                    Some(_) => {
                        return Err(CodecError::BadRll("zero inside escape extent".into()))
                    }
                    None => return Err(CodecError::BadRll("unterminated escape".into())),
                }
            }
            match coded.get(i).copied() {
                Some(0) => {
                    // trailing form: the final zero closes the run and the string
                    if i != n - 1 {
                        return Err(CodecError::BadRll("interior zero after escape".into()));
                    }
                    out.resize(out.len() + cap + extent + 1, 0);
                    i += 1;
                }
                Some(_) => {
                    out.resize(out.len() + cap + extent, 0);
                    // the protected symbol is copied by the next iteration
                }
                None => return Err(CodecError::BadRll("escape at end of stream".into())),
            }
        }

        match out.pop() {
            Some(0) => Ok(out),
            _ => Err(CodecError::BadRll("terminator missing".into())),
        }
    }
}

/// Append the bijective base-2 numeral of `r` over the digits {1, 2},
/// most significant digit first. Zero is the empty numeral.
fn push_extent(out: &mut Vec<u8>, mut r: usize) {
    let mark = out.len();
    while r > 0 {
        out.push(((r - 1) % 2 + 1) as u8);
        r = (r - 1) / 2;
    }
    out[mark..].reverse();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn max_zero_run(seq: &[u8]) -> usize {
        let mut max = 0;
        let mut cur = 0;
        for &s in seq {
            if s == 0 {
                cur += 1;
                max = max.max(cur);
            } else {
                cur = 0;
            }
        }
        max
    }

    fn round_trip(ell: usize, data: &[u8]) {
        let codec = RllCodec::new(ell);
        let (coded, term) = codec.encode(data);
        assert_eq!(term, !data.is_empty());
        if !data.is_empty() {
            assert_eq!(*coded.last().unwrap(), 0, "coded string must end in 0");
        }
        assert!(
            max_zero_run(&coded) <= ell - 1,
            "zero run too long in {coded:?} (ell = {ell})"
        );
        assert_eq!(codec.decode(&coded).unwrap(), data, "ell = {ell}");
    }

    #[test]
    fn test_empty_input() {
        let codec = RllCodec::new(3);
        let (coded, term) = codec.encode(&[]);
        assert!(coded.is_empty());
        assert!(!term);
        assert_eq!(codec.decode(&[]).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_all_zeros() {
        for ell in 2..=4 {
            for len in 1..=20 {
                round_trip(ell, &vec![0u8; len]);
            }
        }
    }

    #[test]
    fn test_no_zero_passthrough() {
        let codec = RllCodec::new(3);
        let (coded, _) = codec.encode(&[3, 2, 3, 3]);
        assert_eq!(coded, vec![3, 2, 3, 3, 0]);
        assert_eq!(codec.decode(&coded).unwrap(), vec![3, 2, 3, 3]);
    }

    #[test]
    fn test_short_runs_stay_literal() {
        // runs below the cap pass through untouched, even before a 3
        let codec = RllCodec::new(3);
        let (coded, _) = codec.encode(&[0, 3]);
        assert_eq!(coded, vec![0, 3, 0]);
        assert_eq!(codec.decode(&coded).unwrap(), vec![0, 3]);
    }

    #[test]
    fn test_run_at_cap_is_escaped() {
        let codec = RllCodec::new(3);
        let (coded, _) = codec.encode(&[1, 0, 0, 2]);
        assert_eq!(coded, vec![1, 0, 0, 3, 2, 0]);
        assert_eq!(codec.decode(&coded).unwrap(), vec![1, 0, 0, 2]);
    }

    #[test]
    fn test_trailing_run_forms() {
        let codec = RllCodec::new(3);
        // short trailing run merges with the terminator and stays literal
        let (coded, _) = codec.encode(&[1, 0]);
        assert_eq!(coded, vec![1, 0, 0]);
        // long trailing run takes the escaped form ending in the terminator
        let (coded, _) = codec.encode(&[1, 0, 0]);
        assert_eq!(coded, vec![1, 0, 0, 3, 0]);
        let (coded, _) = codec.encode(&[0, 0, 0, 0]);
        assert_eq!(coded, vec![0, 0, 2, 3, 0]);
        for data in [&[1u8, 0][..], &[1, 0, 0][..], &[0, 0, 0, 0][..]] {
            assert_eq!(codec.decode(&codec.encode(data).0).unwrap(), data);
        }
    }

    #[test]
    fn test_tight_bound_ell_two() {
        // ell = 2 escapes every zero run
        round_trip(2, &[0, 1]);
        round_trip(2, &[0, 3]);
        round_trip(2, &[3, 0, 1, 0, 0, 2]);
        round_trip(2, &[0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_escape_lookalike_data() {
        // data already containing extent digits and close markers around zeros
        for ell in 2..=4 {
            round_trip(ell, &[0, 0, 1, 3, 2]);
            round_trip(ell, &[2, 0, 0, 3, 3, 0, 0, 1, 1]);
            round_trip(ell, &[3, 3, 3, 0, 0, 0, 3, 3, 3]);
            round_trip(ell, &[1, 2, 1, 2, 0, 0, 0, 0, 2, 1]);
        }
    }

    #[test]
    fn test_long_mixed_runs() {
        for ell in 2..=5 {
            let mut data = Vec::new();
            for block in 0..12 {
                data.extend(std::iter::repeat(0).take(block));
                data.push((block % 3 + 1) as u8);
            }
            data.extend(std::iter::repeat(0).take(17));
            round_trip(ell, &data);
        }
    }

    #[test]
    fn test_decode_rejects_missing_terminator() {
        let codec = RllCodec::new(3);
        assert!(matches!(
            codec.decode(&[1, 2]),
            Err(CodecError::BadRll(_))
        ));
    }

    #[test]
    fn test_decode_rejects_overlong_zero_run() {
        let codec = RllCodec::new(3);
        assert!(matches!(
            codec.decode(&[0, 0, 0, 1, 0]),
            Err(CodecError::BadRll(_))
        ));
    }

    #[test]
    fn test_decode_rejects_unterminated_escape() {
        let codec = RllCodec::new(3);
        // cap-length run opens an escape but no close marker follows
        assert!(matches!(
            codec.decode(&[0, 0, 1, 1, 0]),
            Err(CodecError::BadRll(_))
        ));
    }

    #[test]
    fn test_decode_rejects_interior_zero_after_escape() {
        let codec = RllCodec::new(3);
        assert!(matches!(
            codec.decode(&[0, 0, 3, 0, 1, 0]),
            Err(CodecError::BadRll(_))
        ));
    }
}
