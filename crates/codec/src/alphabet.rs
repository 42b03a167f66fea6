//! Bit / symbol / nucleotide conversions.
//!
//! The pivot type of the whole pipeline is the quaternary symbol: a `u8`
//! holding a value in 0..=3. The fixed bijection to bases is 0↔A, 1↔T,
//! 2↔C, 3↔G, so the GC pair occupies the symbols with the high bit set.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// A DNA nucleotide base.
///
/// Backed by a single byte with the same numbering the codec uses for
/// quaternary symbols (A=0, T=1, C=2, G=3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Nucleotide {
    A = 0,
    T = 1,
    C = 2,
    G = 3,
}

impl Nucleotide {
    /// Convert from a symbol value (0-3).
    #[inline(always)]
    pub const fn from_index(idx: u8) -> Option<Self> {
        match idx {
            0 => Some(Self::A),
            1 => Some(Self::T),
            2 => Some(Self::C),
            3 => Some(Self::G),
            _ => None,
        }
    }

    /// Convert to the compact symbol value (0-3).
    #[inline(always)]
    pub const fn to_index(self) -> u8 {
        self as u8
    }

    /// Convert from an ASCII byte, accepting lowercase.
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'A' | b'a' => Some(Self::A),
            b'T' | b't' => Some(Self::T),
            b'C' | b'c' => Some(Self::C),
            b'G' | b'g' => Some(Self::G),
            _ => None,
        }
    }

    /// Convert to an uppercase ASCII byte.
    #[inline(always)]
    pub const fn to_ascii(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::T => b'T',
            Self::C => b'C',
            Self::G => b'G',
        }
    }

    /// Convert to an uppercase `char`.
    #[inline(always)]
    pub const fn to_char(self) -> char {
        self.to_ascii() as char
    }

    /// Return the Watson-Crick complement (A <-> T, C <-> G).
    #[inline(always)]
    pub const fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::T => Self::A,
            Self::C => Self::G,
            Self::G => Self::C,
        }
    }

    /// Return true for the strong (G/C) bases.
    #[inline(always)]
    pub const fn is_gc(self) -> bool {
        matches!(self, Self::C | Self::G)
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Group a binary string into quaternary symbols, two bits per symbol
/// (most significant bit first: "1101" becomes `[3, 1]`).
pub fn bits_to_symbols(bits: &str) -> Result<Vec<u8>, CodecError> {
    if bits.len() % 2 != 0 {
        return Err(CodecError::BadLength(bits.len()));
    }
    let mut symbols = Vec::with_capacity(bits.len() / 2);
    let mut pending: Option<u8> = None;
    for c in bits.chars() {
        let bit = match c {
            '0' => 0u8,
            '1' => 1u8,
            other => return Err(CodecError::BadAlphabet(other)),
        };
        match pending.take() {
            None => pending = Some(bit),
            Some(hi) => symbols.push((hi << 1) | bit),
        }
    }
    Ok(symbols)
}

/// Expand quaternary symbols back into a binary string, two bits per symbol.
pub fn symbols_to_bits(symbols: &[u8]) -> String {
    let mut bits = String::with_capacity(symbols.len() * 2);
    for &s in symbols {
        bits.push(if s & 2 != 0 { '1' } else { '0' });
        bits.push(if s & 1 != 0 { '1' } else { '0' });
    }
    bits
}

/// Render quaternary symbols as a DNA string.
pub fn symbols_to_dna(symbols: &[u8]) -> String {
    symbols
        .iter()
        .map(|&s| match Nucleotide::from_index(s) {
            Some(n) => n.to_char(),
            // Symbols are produced internally and always lie in 0..=3.
            None => unreachable!("symbol out of range: {s}"),
        })
        .collect()
}

/// Parse a DNA string into quaternary symbols.
pub fn dna_to_symbols(dna: &str) -> Result<Vec<u8>, CodecError> {
    dna.chars()
        .map(|c| {
            c.try_into()
                .ok()
                .and_then(Nucleotide::from_ascii)
                .map(Nucleotide::to_index)
                .ok_or(CodecError::BadAlphabet(c))
        })
        .collect()
}
