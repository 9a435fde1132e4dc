//! Error types.

use core::fmt;

/// Result type with the `sm2dsa` crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// SM2 signature errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Scalar outside the valid window `[1, n-1]`.
    OutOfRange,

    /// Key encoding is not 64 hexadecimal characters, or the decoded point
    /// is not a valid public key.
    MalformedKey,

    /// Record or field encoding does not match the persisted layout.
    MalformedInput,

    /// Operand has no multiplicative inverse for the given modulus.
    ///
    /// Group-law and protocol callers catch this locally; it only escapes
    /// when no retry can ever succeed (e.g. signing with `d = n-1`).
    NonInvertible,

    /// Derived public key collapsed to the group identity.
    DegenerateKey,

    /// Distinguishing identifier exceeds the 2-byte bit-length field.
    IdentityTooLong,

    /// Bounded retry loop exhausted without producing a usable value.
    RetriesExhausted,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::OutOfRange => "scalar out of range",
            Error::MalformedKey => "malformed key encoding",
            Error::MalformedInput => "malformed input",
            Error::NonInvertible => "operand is not invertible",
            Error::DegenerateKey => "degenerate public key",
            Error::IdentityTooLong => "distinguishing identifier too long",
            Error::RetriesExhausted => "retry limit exhausted",
        })
    }
}

impl std::error::Error for Error {}

impl From<Error> for signature::Error {
    fn from(err: Error) -> signature::Error {
        signature::Error::from_source(err)
    }
}
