//! SHA-2-based hash function instantiations.
//!
//! FIPS 205, Section 11.2. The SHA-2 family hashes the 22-byte compressed
//! address, and pads `PK.seed` with zeros to a full compression block so the
//! keyed state can be precomputed. Security category 1 (n=16) uses SHA-256
//! everywhere; categories 3 and 5 (n=24, n=32) use SHA-512 for `Hmsg`,
//! `PRFmsg`, `H` and `Tl` while keeping SHA-256 for `PRF` and `F`.

use crate::address::Address;
use crate::hash::HashSuite;
use crate::utils::mgf1;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256, Sha512};
use zeroize::Zeroizing;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// SHA-2-based hash suite for security category 1 (n=16).
pub struct Sha2_128Hash;

/// SHA-2-based hash suite for security category 3 (n=24).
pub struct Sha2_192Hash;

/// SHA-2-based hash suite for security category 5 (n=32).
pub struct Sha2_256Hash;

/// `$wide` is the hash used for Hmsg/PRFmsg/H/Tl: SHA-256 in category 1,
/// SHA-512 in categories 3 and 5. PRF and F always use SHA-256 with the
/// seed padded to its 64-byte block.
macro_rules! impl_sha2_hash_suite {
    ($name:ident, $n:expr, $wide:ty, $wide_block:expr) => {
        impl HashSuite for $name {
            const N: usize = $n;

            fn prf(pk_seed: &[u8], sk_seed: &[u8], adrs: &Address) -> Zeroizing<Vec<u8>> {
                // PRF = Trunc_n(SHA-256(PK.seed || toByte(0, 64-n) || ADRSc || SK.seed))
                let mut hasher = Sha256::new();
                hasher.update(pk_seed);
                hasher.update([0u8; 64 - $n]);
                hasher.update(adrs.compressed());
                hasher.update(sk_seed);
                let hash = hasher.finalize();
                Zeroizing::new(hash[..$n].to_vec())
            }

            fn prf_msg(sk_prf: &[u8], opt_rand: &[u8], message: &[u8]) -> Zeroizing<Vec<u8>> {
                // PRFmsg = Trunc_n(HMAC(SK.prf, opt_rand || M))
                let mut mac =
                    Hmac::<$wide>::new_from_slice(sk_prf).expect("HMAC accepts any key length");
                mac.update(opt_rand);
                mac.update(message);
                let result = mac.finalize().into_bytes();
                Zeroizing::new(result[..$n].to_vec())
            }

            fn h_msg(
                r: &[u8],
                pk_seed: &[u8],
                pk_root: &[u8],
                message: &[u8],
                out_len: usize,
            ) -> Vec<u8> {
                // Hmsg = MGF1(R || PK.seed || Hash(R || PK.seed || PK.root || M), m)
                let mut inner = <$wide>::new();
                inner.update(r);
                inner.update(pk_seed);
                inner.update(pk_root);
                inner.update(message);
                let inner = inner.finalize();

                let mut seed = Vec::with_capacity(r.len() + pk_seed.len() + inner.len());
                seed.extend_from_slice(r);
                seed.extend_from_slice(pk_seed);
                seed.extend_from_slice(&inner);

                mgf1::<$wide>(&seed, out_len)
                    .expect("digest lengths stay far below the MGF1 bound")
            }

            fn f(pk_seed: &[u8], adrs: &Address, m1: &[u8]) -> Vec<u8> {
                // F = Trunc_n(SHA-256(PK.seed || toByte(0, 64-n) || ADRSc || M1))
                let mut hasher = Sha256::new();
                hasher.update(pk_seed);
                hasher.update([0u8; 64 - $n]);
                hasher.update(adrs.compressed());
                hasher.update(m1);
                let hash = hasher.finalize();
                hash[..$n].to_vec()
            }

            fn h(pk_seed: &[u8], adrs: &Address, m1: &[u8], m2: &[u8]) -> Vec<u8> {
                // H = Trunc_n(Hash(PK.seed || toByte(0, block-n) || ADRSc || M1 || M2))
                let mut hasher = <$wide>::new();
                hasher.update(pk_seed);
                hasher.update([0u8; $wide_block - $n]);
                hasher.update(adrs.compressed());
                hasher.update(m1);
                hasher.update(m2);
                let hash = hasher.finalize();
                hash[..$n].to_vec()
            }

            fn t_l(pk_seed: &[u8], adrs: &Address, m: &[u8]) -> Vec<u8> {
                // Tl = Trunc_n(Hash(PK.seed || toByte(0, block-n) || ADRSc || M))
                let mut hasher = <$wide>::new();
                hasher.update(pk_seed);
                hasher.update([0u8; $wide_block - $n]);
                hasher.update(adrs.compressed());
                hasher.update(m);
                let hash = hasher.finalize();
                hash[..$n].to_vec()
            }
        }
    };
}

impl_sha2_hash_suite!(Sha2_128Hash, 16, Sha256, 64);
impl_sha2_hash_suite!(Sha2_192Hash, 24, Sha512, 128);
impl_sha2_hash_suite!(Sha2_256Hash, 32, Sha512, 128);
