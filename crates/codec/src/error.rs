use thiserror::Error;

/// Error type for codec operations.
#[derive(Debug, Clone, Error)]
pub enum CodecError {
    /// Bit input whose length is not a whole number of symbol pairs.
    #[error("bit string length {0} is odd; symbols are built from bit pairs")]
    BadLength(usize),

    /// A character outside the expected alphabet ('0'/'1' for bits, A/T/C/G for DNA).
    #[error("invalid character '{0}' in input")]
    BadAlphabet(char),

    /// Payload too short to admit a flip index within the GC tolerance.
    #[error("payload of {len} symbols cannot reach GC tolerance {epsilon}")]
    TooShort { len: usize, epsilon: f64 },

    /// Malformed runlength coding encountered during decode.
    #[error("runlength decode failed: {0}")]
    BadRll(String),

    /// Suffix framing that does not satisfy the (digit, flip) pairing or widths.
    #[error("malformed suffix: {0}")]
    BadSuffix(String),

    /// Syndrome or checksum mismatch on a received sequence. A report, not a
    /// hard failure: the caller decides whether to keep the payload.
    #[error("error detected in received sequence ({kind})")]
    ErrorDetected { kind: ErrorKind },

    /// Codec parameters outside their valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Best-effort classification of a detected single-edit error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Substitution,
    InsertionOrDeletion,
    Unknown,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Substitution => write!(f, "likely substitution"),
            Self::InsertionOrDeletion => write!(f, "likely insertion or deletion"),
            Self::Unknown => write!(f, "unclassified"),
        }
    }
}
