//! Constrained quaternary coding for DNA data storage.
//!
//! Encodes binary payloads into DNA strings over {A, T, C, G} that satisfy
//! two biochemical constraints at once — a homopolymer runlength bound and a
//! GC-content window around one half — while staying fully invertible and
//! carrying a Varshamov-Tenengolts syndrome for single-edit detection. The
//! construction follows the constrained-code pipeline of Nguyen, Cai, Kiah
//! and Immink (capacity-approaching constrained codes with error correction
//! for DNA-based data storage).
//!
//! The pipeline stages live in their own modules (`alphabet`,
//! `differential`, `rll`, `balance`, `vt`, `glue`) and compose as pure
//! functions; [`HelixCodec`] drives them and owns the framing.
//!
//! ```
//! use helix_codec::{CodecParams, HelixCodec};
//!
//! let codec = HelixCodec::new(CodecParams::default())?;
//! let dna = codec.encode("1101001110010110")?;
//! assert_eq!(codec.decode(&dna)?, "1101001110010110");
//! # Ok::<(), helix_codec::CodecError>(())
//! ```

pub mod alphabet;
pub mod balance;
mod codec;
pub mod differential;
mod error;
pub mod glue;
pub mod rll;
pub mod suffix;
pub mod vt;

pub use alphabet::Nucleotide;
pub use codec::{CodecParams, HelixCodec};
pub use error::{CodecError, ErrorKind};
