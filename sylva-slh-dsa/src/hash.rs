//! Hash function abstraction for SLH-DSA.
//!
//! FIPS 205 derives everything from six keyed hash functions:
//! - **PRF**: secret key element generation (WOTS+ and FORS)
//! - **PRFmsg**: message randomizer generation
//! - **Hmsg**: message digest generation
//! - **F**: WOTS+ chaining and FORS leaf hashing
//! - **H**: two-to-one Merkle node hashing
//! - **Tl**: multi-input public key compression
//!
//! The [`HashSuite`] trait abstracts over the SHAKE and SHA-2 instantiations.
//! Every call receives the [`Address`] and serializes it in the form its
//! family requires: the full 32 bytes for SHAKE, the 22-byte compressed form
//! for SHA-2.

use crate::address::Address;
use zeroize::Zeroizing;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Hash function suite trait for SLH-DSA.
pub trait HashSuite {
    /// Security parameter n (hash output length in bytes).
    const N: usize;

    /// PRF: derive an n-byte secret key element.
    ///
    /// The output is wrapped in `Zeroizing` because it is secret chain/leaf
    /// material.
    fn prf(pk_seed: &[u8], sk_seed: &[u8], adrs: &Address) -> Zeroizing<Vec<u8>>;

    /// PRFmsg: derive the n-byte message randomizer R.
    ///
    /// `opt_rand` is fresh randomness for hedged signing, or `PK.seed` for
    /// deterministic signing.
    fn prf_msg(sk_prf: &[u8], opt_rand: &[u8], message: &[u8]) -> Zeroizing<Vec<u8>>;

    /// Hmsg: produce the `out_len`-byte message digest that selects the
    /// FORS indices and the hypertree leaf.
    fn h_msg(r: &[u8], pk_seed: &[u8], pk_root: &[u8], message: &[u8], out_len: usize) -> Vec<u8>;

    /// F: the WOTS+ chaining / FORS leaf function (n bytes to n bytes).
    fn f(pk_seed: &[u8], adrs: &Address, m1: &[u8]) -> Vec<u8>;

    /// H: the two-to-one Merkle node function.
    fn h(pk_seed: &[u8], adrs: &Address, m1: &[u8], m2: &[u8]) -> Vec<u8>;

    /// Tl: compress an l*n-byte concatenation to n bytes.
    fn t_l(pk_seed: &[u8], adrs: &Address, m: &[u8]) -> Vec<u8>;
}
