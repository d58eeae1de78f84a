//! Cryptographic primitive traits.

use crate::Result;
use rand_core::TryCryptoRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Digital signature trait.
///
/// This trait defines the interface for context-string-aware digital
/// signature schemes as specified in NIST post-quantum cryptography
/// standards. The context string `ctx` domain-separates signatures produced
/// for different applications with the same key; most callers pass `b""`.
///
/// # Example
///
/// ```ignore
/// use sylva_core::Signer;
///
/// let (sk, pk) = MySigner::keygen(&mut rng)?;
/// let sig = MySigner::sign(&sk, message, b"")?;
/// MySigner::verify(&pk, message, &sig, b"")?;
/// ```
pub trait Signer {
    /// Signing key (private key).
    type SigningKey: Zeroize + ZeroizeOnDrop;

    /// Verification key (public key).
    type VerificationKey: Clone;

    /// Signature produced by signing.
    type Signature: Clone;

    /// Size of the signing key in bytes.
    const SIGNING_KEY_SIZE: usize;

    /// Size of the verification key in bytes.
    const VERIFICATION_KEY_SIZE: usize;

    /// Size of the signature in bytes.
    const SIGNATURE_SIZE: usize;

    /// Generate a new key pair.
    ///
    /// Failures of the random source surface as
    /// [`Error::RngFailure`](crate::Error::RngFailure).
    fn keygen(rng: &mut impl TryCryptoRng) -> Result<(Self::SigningKey, Self::VerificationKey)>;

    /// Sign a message under the given context string.
    ///
    /// The context string must be at most 255 bytes; longer contexts are
    /// rejected with [`Error::InvalidLength`](crate::Error::InvalidLength).
    fn sign(sk: &Self::SigningKey, message: &[u8], ctx: &[u8]) -> Result<Self::Signature>;

    /// Verify a signature over a message and context string.
    ///
    /// Returns `Ok(())` if the signature is valid,
    /// `Err(Error::VerificationFailed)` otherwise.
    fn verify(
        pk: &Self::VerificationKey,
        message: &[u8],
        signature: &Self::Signature,
        ctx: &[u8],
    ) -> Result<()>;
}
