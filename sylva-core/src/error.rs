//! Error types for Sylva cryptographic operations.

use core::fmt;

/// Result type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during signature operations.
///
/// Every variant is fatal to the operation that raised it; no operation
/// recovers internally. Signature *invalidity* is not an error: the
/// low-level verifiers are total and return `false`. Only the
/// [`Signer`](crate::Signer) trait adapter reports an invalid signature as
/// [`Error::VerificationFailed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Unknown parameter set, or an out-of-range chain index.
    InvalidParameters,

    /// A key, signature, or context string has the wrong length.
    InvalidLength {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length provided.
        actual: usize,
    },

    /// A secret or public key component is all zero.
    WeakKey,

    /// Recomputed public root disagrees with the stored root on key import.
    RootMismatch,

    /// Pre-hash signing requested with an unsupported hash function.
    UnsupportedHash,

    /// The random source failed to produce bytes.
    RngFailure,

    /// Requested mask length exceeds what MGF1 can produce.
    Truncation,

    /// Signature verification failed.
    VerificationFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameters => write!(f, "invalid parameters"),
            Error::InvalidLength { expected, actual } => {
                write!(f, "invalid length: expected {expected}, got {actual}")
            }
            Error::WeakKey => write!(f, "weak key: all-zero key component"),
            Error::RootMismatch => write!(f, "public root mismatch on key import"),
            Error::UnsupportedHash => write!(f, "unsupported pre-hash function"),
            Error::RngFailure => write!(f, "random source failure"),
            Error::Truncation => write!(f, "mask length exceeds MGF1 output bound"),
            Error::VerificationFailed => write!(f, "signature verification failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
