//! The codec driver: stage ordering, framing, and suffix widths.
//!
//! Encode direction:
//!
//! ```text
//! bits -> symbols -> differential -> RLL -> prefix sum (channel word)
//!      -> balance -> w' | g1 | index suffix (| g2 | vt suffix) -> DNA
//! ```
//!
//! The runlength coder polices zero runs in the transition domain; taking
//! the prefix sum afterwards yields the channel word whose homopolymer runs
//! are bounded by `ell`. Decoding mirrors the chain exactly, validating at
//! every boundary. All suffix widths are derived from the received length
//! alone: both framings have exactly one self-consistent width because the
//! width residual is strictly monotone in the digit count.

use serde::{Deserialize, Serialize};

use crate::alphabet;
use crate::balance::{self, GcBalancer};
use crate::differential;
use crate::error::CodecError;
use crate::glue;
use crate::rll::RllCodec;
use crate::suffix::quart_width;
use crate::vt;

/// Parameters of a codec instance. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CodecParams {
    /// Maximum homopolymer run length (at least 2).
    pub ell: usize,
    /// GC-content tolerance around one half, in (0, 0.5).
    pub epsilon: f64,
    /// Attach the syndrome/checksum suffix.
    pub use_ec: bool,
}

impl Default for CodecParams {
    fn default() -> Self {
        Self {
            ell: 3,
            epsilon: 0.05,
            use_ec: true,
        }
    }
}

impl CodecParams {
    pub fn validate(&self) -> Result<(), CodecError> {
        if self.ell < 2 {
            return Err(CodecError::InvalidParameter(format!(
                "ell must be at least 2 (got {})",
                self.ell
            )));
        }
        if !(self.epsilon > 0.0 && self.epsilon < 0.5) {
            return Err(CodecError::InvalidParameter(format!(
                "epsilon must lie in (0, 0.5) (got {})",
                self.epsilon
            )));
        }
        Ok(())
    }
}

/// Complete encode/decode pipeline for one parameter set.
///
/// Holds only parameters; safe to share across threads for read-only use.
#[derive(Debug, Clone)]
pub struct HelixCodec {
    params: CodecParams,
    rll: RllCodec,
    balancer: GcBalancer,
}

impl HelixCodec {
    pub fn new(params: CodecParams) -> Result<Self, CodecError> {
        params.validate()?;
        Ok(Self {
            params,
            rll: RllCodec::new(params.ell),
            balancer: GcBalancer::new(params.epsilon),
        })
    }

    /// Codec with the standard parameters (`ell = 3`, `epsilon = 0.05`, EC on).
    pub fn with_defaults() -> Self {
        let params = CodecParams::default();
        Self {
            params,
            rll: RllCodec::new(params.ell),
            balancer: GcBalancer::new(params.epsilon),
        }
    }

    pub fn params(&self) -> &CodecParams {
        &self.params
    }

    /// Encode a binary string into DNA.
    pub fn encode(&self, bits: &str) -> Result<String, CodecError> {
        Ok(alphabet::symbols_to_dna(&self.encode_symbols(bits)?))
    }

    /// Encode a binary string into quaternary symbols.
    pub fn encode_symbols(&self, bits: &str) -> Result<Vec<u8>, CodecError> {
        let payload = alphabet::bits_to_symbols(bits)?;
        if payload.is_empty() {
            return Ok(Vec::new());
        }

        let transitions = differential::encode(&payload);
        let (coded, _terminated) = self.rll.encode(&transitions);
        let word = differential::decode(&coded);

        let (flipped, t) = self.balancer.balance(&word, self.params.ell)?;
        let index = balance::index_suffix(t, word.len());

        let joined_gc = balance::gc_weight(&flipped) + index.len() / 2;
        let joined_len = flipped.len() + index.len();
        // flipped is non-empty here: the payload had at least one symbol
        let g1 = glue::select(flipped[flipped.len() - 1], index[0], joined_gc, joined_len);

        let mut body = flipped;
        body.push(g1);
        body.extend_from_slice(&index);

        if self.params.use_ec {
            let (g2, ec) = self.seal(&body);
            body.push(g2);
            body.extend_from_slice(&ec);
        }
        Ok(body)
    }

    /// Decode a DNA string back into the binary payload.
    pub fn decode(&self, dna: &str) -> Result<String, CodecError> {
        self.decode_symbols(&alphabet::dna_to_symbols(dna)?)
    }

    /// Decode quaternary symbols back into the binary payload.
    pub fn decode_symbols(&self, received: &[u8]) -> Result<String, CodecError> {
        if received.is_empty() {
            return Ok(String::new());
        }

        let body = if self.params.use_ec {
            let (sealed_len, width) = derive_vt_frame(received.len())?;
            let sealed = &received[..sealed_len];
            let stored = vt::parse_suffix(&received[sealed_len..], width)?;
            let recomputed = vt::digest(sealed);
            if stored != recomputed {
                return Err(CodecError::ErrorDetected {
                    kind: vt::classify(stored, recomputed),
                });
            }
            // drop the second glue symbol
            &received[..sealed_len - 1]
        } else {
            received
        };

        let (word_len, _width) = derive_index_frame(body.len())?;
        let flipped = &body[..word_len];
        // body[word_len] is the first glue symbol; it carries no data
        let index = &body[word_len + 1..];
        let t = balance::parse_index_suffix(index, word_len)?;

        let word = self.balancer.restore(flipped, t)?;
        let coded = differential::encode(&word);
        let transitions = self.rll.decode(&coded)?;
        let payload = differential::decode(&transitions);
        Ok(alphabet::symbols_to_bits(&payload))
    }

    /// True when `bits` survives an encode/decode round trip unchanged.
    pub fn round_trips(&self, bits: &str) -> Result<bool, CodecError> {
        let dna = self.encode(bits)?;
        Ok(self.decode(&dna)? == bits)
    }

    /// Choose the second glue symbol and build the digest suffix it seals.
    ///
    /// The digest covers the glue itself, so candidates are trialed in
    /// preference order until one differs from the head of its own suffix.
    /// If every candidate collides the first is kept: the seam run is then
    /// exactly two symbols, within the bound for every `ell >= 2`.
    fn seal(&self, body: &[u8]) -> (u8, Vec<u8>) {
        let prev = body[body.len() - 1];
        let gc = balance::gc_weight(body);
        let mut fallback = None;
        for g in glue::ranked(prev, gc, body.len()) {
            let mut sealed = Vec::with_capacity(body.len() + 1);
            sealed.extend_from_slice(body);
            sealed.push(g);
            let ec = vt::build_suffix(vt::digest(&sealed), sealed.len());
            if ec[0] != g {
                return (g, ec);
            }
            if fallback.is_none() {
                fallback = Some((g, ec));
            }
        }
        match fallback {
            Some(pick) => pick,
            // ranked() always yields candidates
            None => unreachable!("no glue candidate for the digest seam"),
        }
    }
}

/// Split a received codeword into the sealed body (including the second
/// glue) and the digest suffix, from the total length alone.
fn derive_vt_frame(total: usize) -> Result<(usize, usize), CodecError> {
    for width in 1..=32 {
        let Some(sealed_len) = total.checked_sub(2 * (width + 1)) else {
            break;
        };
        if sealed_len < 2 {
            break;
        }
        if quart_width(2 * sealed_len) == width {
            return Ok((sealed_len, width));
        }
    }
    Err(CodecError::BadSuffix(format!(
        "no consistent digest framing for length {total}"
    )))
}

/// Split a codeword body into channel word, glue, and index suffix, from the
/// body length alone.
fn derive_index_frame(body_len: usize) -> Result<(usize, usize), CodecError> {
    for width in 1..=32 {
        let Some(word_len) = body_len.checked_sub(2 * width + 1) else {
            break;
        };
        if word_len < 1 {
            break;
        }
        if quart_width(word_len + 1) == width {
            return Ok((word_len, width));
        }
    }
    Err(CodecError::BadSuffix(format!(
        "no consistent index framing for body length {body_len}"
    )))
}
