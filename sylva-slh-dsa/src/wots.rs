//! WOTS+ (Winternitz One-Time Signature) implementation.
//!
//! WOTS+ signs a single n-byte value with `len = 2n + 3` hash chains of
//! length `w = 16`. It is never used standalone: XMSS certifies 2^h' WOTS+
//! public keys under one Merkle root.
//!
//! FIPS 205, Algorithms 5-8.

use crate::address::{Address, AdrsType};
use crate::hash::HashSuite;
use crate::params::common::{LG_W, W};
use crate::utils::{base_2b, encode_checksum, wots_checksum};
use sylva_core::{Error, Result};

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Apply the chaining function F `s` times starting at chain position `i`.
///
/// FIPS 205, Algorithm 5: chain(X, i, s, PK.seed, ADRS). The address must
/// be typed `WotsHash` with the chain word already set; each step writes
/// the hash address.
///
/// # Errors
/// Returns [`Error::InvalidParameters`] if `i + s > w - 1`.
pub fn wots_chain<H: HashSuite>(
    x: &[u8],
    i: u32,
    s: u32,
    pk_seed: &[u8],
    adrs: &mut Address,
) -> Result<Vec<u8>> {
    if i + s > W as u32 - 1 {
        return Err(Error::InvalidParameters);
    }

    let mut tmp = x.to_vec();
    for j in i..(i + s) {
        adrs.set_hash(j);
        tmp = H::f(pk_seed, adrs, &tmp);
    }
    Ok(tmp)
}

/// Encode an n-byte message as `len` base-w digits: 2n message nibbles
/// followed by the 3-digit checksum.
fn message_digits(message: &[u8], len1: usize, len2: usize) -> Vec<u32> {
    let mut msg = base_2b(message, LG_W, len1);
    let csum = wots_checksum(&msg, W as u32);
    msg.extend(encode_checksum(csum, LG_W, len2));
    msg
}

/// Generate a WOTS+ public key.
///
/// FIPS 205, Algorithm 6: wots_pkGen(SK.seed, PK.seed, ADRS). The address
/// arrives typed `WotsHash` with layer, tree, and key pair set; chain
/// secrets are derived under a `WotsPrf` clone and the chain endpoints are
/// compressed under a `WotsPk` clone.
pub fn wots_pk_gen<H: HashSuite, const WOTS_LEN: usize>(
    sk_seed: &[u8],
    pk_seed: &[u8],
    mut adrs: Address,
) -> Result<Vec<u8>> {
    let mut sk_adrs = adrs.with_type(AdrsType::WotsPrf);
    sk_adrs.set_key_pair(adrs.key_pair());

    let mut tmp = Vec::with_capacity(WOTS_LEN * H::N);
    for c in 0..WOTS_LEN {
        sk_adrs.set_chain(c as u32);
        let sk_c = H::prf(pk_seed, sk_seed, &sk_adrs);

        adrs.set_chain(c as u32);
        let end = wots_chain::<H>(&sk_c, 0, W as u32 - 1, pk_seed, &mut adrs)?;
        tmp.extend_from_slice(&end);
    }

    let mut pk_adrs = adrs.with_type(AdrsType::WotsPk);
    pk_adrs.set_key_pair(adrs.key_pair());
    Ok(H::t_l(pk_seed, &pk_adrs, &tmp))
}

/// Generate a WOTS+ signature into a caller-provided buffer of exactly
/// `WOTS_LEN * n` bytes.
///
/// FIPS 205, Algorithm 7: wots_sign(M, SK.seed, PK.seed, ADRS).
pub fn wots_sign_to<H: HashSuite, const WOTS_LEN: usize, const WOTS_LEN1: usize>(
    out: &mut [u8],
    message: &[u8],
    sk_seed: &[u8],
    pk_seed: &[u8],
    mut adrs: Address,
) -> Result<()> {
    let n = H::N;
    debug_assert_eq!(out.len(), WOTS_LEN * n);

    let msg = message_digits(message, WOTS_LEN1, WOTS_LEN - WOTS_LEN1);

    let mut sk_adrs = adrs.with_type(AdrsType::WotsPrf);
    sk_adrs.set_key_pair(adrs.key_pair());

    for c in 0..WOTS_LEN {
        sk_adrs.set_chain(c as u32);
        let sk_c = H::prf(pk_seed, sk_seed, &sk_adrs);

        adrs.set_chain(c as u32);
        let sig_c = wots_chain::<H>(&sk_c, 0, msg[c], pk_seed, &mut adrs)?;
        out[c * n..(c + 1) * n].copy_from_slice(&sig_c);
    }
    Ok(())
}

/// Generate a WOTS+ signature.
///
/// Allocating wrapper around [`wots_sign_to`].
pub fn wots_sign<H: HashSuite, const WOTS_LEN: usize, const WOTS_LEN1: usize>(
    message: &[u8],
    sk_seed: &[u8],
    pk_seed: &[u8],
    adrs: Address,
) -> Result<Vec<u8>> {
    let mut sig = vec![0u8; WOTS_LEN * H::N];
    wots_sign_to::<H, WOTS_LEN, WOTS_LEN1>(&mut sig, message, sk_seed, pk_seed, adrs)?;
    Ok(sig)
}

/// Recover the WOTS+ public key from a signature.
///
/// FIPS 205, Algorithm 8: wots_pkFromSig(sig, M, PK.seed, ADRS). Completes
/// each chain from the signature digit to `w - 1` and compresses the
/// endpoints. A forged signature yields a different public key, which the
/// enclosing Merkle verification rejects.
pub fn wots_pk_from_sig<H: HashSuite, const WOTS_LEN: usize, const WOTS_LEN1: usize>(
    sig: &[u8],
    message: &[u8],
    pk_seed: &[u8],
    mut adrs: Address,
) -> Result<Vec<u8>> {
    let n = H::N;
    debug_assert_eq!(sig.len(), WOTS_LEN * n);

    let msg = message_digits(message, WOTS_LEN1, WOTS_LEN - WOTS_LEN1);

    let mut tmp = Vec::with_capacity(WOTS_LEN * n);
    for c in 0..WOTS_LEN {
        adrs.set_chain(c as u32);
        let sig_c = &sig[c * n..(c + 1) * n];
        let end = wots_chain::<H>(sig_c, msg[c], W as u32 - 1 - msg[c], pk_seed, &mut adrs)?;
        tmp.extend_from_slice(&end);
    }

    let mut pk_adrs = adrs.with_type(AdrsType::WotsPk);
    pk_adrs.set_key_pair(adrs.key_pair());
    Ok(H::t_l(pk_seed, &pk_adrs, &tmp))
}
