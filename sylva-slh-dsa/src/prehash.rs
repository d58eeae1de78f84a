//! Message encodings for the external signing interface.
//!
//! FIPS 205, Section 10.2: before the internal algorithms run, the message
//! is framed with a domain-separator byte and the application context
//! string. Pure signing frames the message itself; pre-hash signing frames
//! the DER OID of an approved hash function followed by the message digest.

use sha2::{Digest, Sha256, Sha512};
use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake128, Shake256,
};
use sylva_core::{Error, Result};

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Maximum context string length in bytes.
pub const MAX_CONTEXT_LEN: usize = 255;

/// Approved pre-hash functions and their digest sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreHash {
    /// SHA-256, 32-byte digest.
    Sha256,
    /// SHA-512, 64-byte digest.
    Sha512,
    /// SHAKE128 with 32-byte output.
    Shake128,
    /// SHAKE256 with 64-byte output.
    Shake256,
}

impl PreHash {
    /// The 11-byte DER-encoded OID framed into the signed message.
    #[must_use]
    pub const fn oid(self) -> [u8; 11] {
        match self {
            PreHash::Sha256 => [
                0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x01,
            ],
            PreHash::Sha512 => [
                0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x03,
            ],
            PreHash::Shake128 => [
                0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x0B,
            ],
            PreHash::Shake256 => [
                0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x0C,
            ],
        }
    }

    /// Resolve a DER OID back to a pre-hash function.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedHash`] for OIDs outside the approved
    /// list.
    pub fn from_oid(oid: &[u8]) -> Result<Self> {
        [
            PreHash::Sha256,
            PreHash::Sha512,
            PreHash::Shake128,
            PreHash::Shake256,
        ]
        .into_iter()
        .find(|ph| ph.oid() == oid)
        .ok_or(Error::UnsupportedHash)
    }

    /// Digest size in bytes.
    #[must_use]
    pub const fn digest_len(self) -> usize {
        match self {
            PreHash::Sha256 | PreHash::Shake128 => 32,
            PreHash::Sha512 | PreHash::Shake256 => 64,
        }
    }

    /// Hash a message with this function.
    #[must_use]
    pub fn digest(self, message: &[u8]) -> Vec<u8> {
        match self {
            PreHash::Sha256 => Sha256::digest(message).to_vec(),
            PreHash::Sha512 => Sha512::digest(message).to_vec(),
            PreHash::Shake128 => {
                let mut hasher = Shake128::default();
                hasher.update(message);
                let mut out = vec![0u8; 32];
                hasher.finalize_xof().read(&mut out);
                out
            }
            PreHash::Shake256 => {
                let mut hasher = Shake256::default();
                hasher.update(message);
                let mut out = vec![0u8; 64];
                hasher.finalize_xof().read(&mut out);
                out
            }
        }
    }
}

fn check_context(ctx: &[u8]) -> Result<()> {
    if ctx.len() > MAX_CONTEXT_LEN {
        return Err(Error::InvalidLength {
            expected: MAX_CONTEXT_LEN,
            actual: ctx.len(),
        });
    }
    Ok(())
}

/// Frame a message for pure signing: `0x00 || len(ctx) || ctx || M`.
///
/// # Errors
/// Returns [`Error::InvalidLength`] if the context exceeds 255 bytes.
pub fn encode_pure(message: &[u8], ctx: &[u8]) -> Result<Vec<u8>> {
    check_context(ctx)?;
    let mut m_prime = Vec::with_capacity(2 + ctx.len() + message.len());
    m_prime.push(0x00);
    m_prime.push(ctx.len() as u8);
    m_prime.extend_from_slice(ctx);
    m_prime.extend_from_slice(message);
    Ok(m_prime)
}

/// Frame a message for pre-hash signing:
/// `0x01 || len(ctx) || ctx || OID(PH) || PH(M)`.
///
/// # Errors
/// Returns [`Error::InvalidLength`] if the context exceeds 255 bytes.
pub fn encode_prehash(message: &[u8], ctx: &[u8], ph: PreHash) -> Result<Vec<u8>> {
    check_context(ctx)?;
    let digest = ph.digest(message);
    let mut m_prime = Vec::with_capacity(2 + ctx.len() + 11 + digest.len());
    m_prime.push(0x01);
    m_prime.push(ctx.len() as u8);
    m_prime.extend_from_slice(ctx);
    m_prime.extend_from_slice(&ph.oid());
    m_prime.extend_from_slice(&digest);
    Ok(m_prime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_frame_layout() {
        let m = encode_pure(b"hello", b"ctx").unwrap();
        assert_eq!(m[0], 0x00);
        assert_eq!(m[1], 3);
        assert_eq!(&m[2..5], b"ctx");
        assert_eq!(&m[5..], b"hello");
    }

    #[test]
    fn test_pure_empty_context() {
        let m = encode_pure(b"hello", b"").unwrap();
        assert_eq!(&m[..2], &[0x00, 0x00]);
        assert_eq!(&m[2..], b"hello");
    }

    #[test]
    fn test_context_length_limit() {
        let ctx = [0u8; 256];
        assert_eq!(
            encode_pure(b"m", &ctx),
            Err(Error::InvalidLength {
                expected: 255,
                actual: 256
            })
        );
        assert!(encode_pure(b"m", &ctx[..255]).is_ok());
    }

    #[test]
    fn test_prehash_frame_layout() {
        let m = encode_prehash(b"test", b"", PreHash::Sha256).unwrap();
        assert_eq!(m[0], 0x01);
        assert_eq!(m[1], 0);
        assert_eq!(&m[2..13], &PreHash::Sha256.oid());
        // SHA-256("test")
        assert_eq!(
            hex::encode(&m[13..]),
            "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"
        );
    }

    #[test]
    fn test_prehash_digest_lengths() {
        for (ph, len) in [
            (PreHash::Sha256, 32),
            (PreHash::Sha512, 64),
            (PreHash::Shake128, 32),
            (PreHash::Shake256, 64),
        ] {
            assert_eq!(ph.digest(b"abc").len(), len);
            assert_eq!(ph.digest_len(), len);
        }
    }

    #[test]
    fn test_oid_roundtrip() {
        for ph in [
            PreHash::Sha256,
            PreHash::Sha512,
            PreHash::Shake128,
            PreHash::Shake256,
        ] {
            assert_eq!(PreHash::from_oid(&ph.oid()).unwrap(), ph);
        }
        let unlisted = [0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x02];
        assert_eq!(PreHash::from_oid(&unlisted), Err(Error::UnsupportedHash));
    }

    #[test]
    fn test_sha512_oid_tail() {
        assert_eq!(PreHash::Sha512.oid()[10], 0x03);
        assert_eq!(PreHash::Shake128.oid()[10], 0x0B);
        assert_eq!(PreHash::Shake256.oid()[10], 0x0C);
    }
}
