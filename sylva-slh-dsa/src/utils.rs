//! Utility functions for SLH-DSA.
//!
//! Byte/integer conversions, base-2^b extraction, the WOTS+ checksum
//! encoding, MGF1, and constant-time comparison.

use sha2::digest::Digest;
use subtle::ConstantTimeEq;
use sylva_core::{Error, Result};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Convert a byte string to an integer (big-endian).
///
/// FIPS 205, Algorithm 1: toInt(X, n). The input must be at most 8 bytes.
#[must_use]
pub fn to_int(x: &[u8]) -> u64 {
    debug_assert!(x.len() <= 8);
    let mut total: u64 = 0;
    for &byte in x {
        total = (total << 8) | u64::from(byte);
    }
    total
}

/// Convert an integer to its `N` low bytes (big-endian).
///
/// FIPS 205, Algorithm 2: toByte(x, n).
#[must_use]
pub fn to_byte<const N: usize>(x: u64) -> [u8; N] {
    let mut result = [0u8; N];
    let mut val = x;
    for i in (0..N).rev() {
        result[i] = (val & 0xFF) as u8;
        val >>= 8;
    }
    result
}

/// Extract `out_len` base-2^b digits from a byte string.
///
/// FIPS 205, Algorithm 4: base_2b(X, b, out_len).
///
/// Bits are consumed left to right; each output is the next `b` bits and
/// lies in `[0, 2^b)`. The input must supply at least
/// `ceil(out_len * b / 8)` bytes.
#[must_use]
pub fn base_2b(x: &[u8], b: usize, out_len: usize) -> Vec<u32> {
    debug_assert!(b > 0 && b <= 32);
    debug_assert!(x.len() * 8 >= out_len * b);

    let mask = (1u64 << b) - 1;
    let mut result = Vec::with_capacity(out_len);

    let mut bits: u64 = 0;
    let mut num_bits: usize = 0;
    let mut byte_idx: usize = 0;

    for _ in 0..out_len {
        while num_bits < b {
            bits = (bits << 8) | u64::from(x[byte_idx]);
            num_bits += 8;
            byte_idx += 1;
        }
        num_bits -= b;
        result.push(((bits >> num_bits) & mask) as u32);
    }

    result
}

/// Compute the WOTS+ checksum over the base-w message digits.
///
/// csum = sum(w - 1 - msg[i]) for i in 0..len1.
#[must_use]
pub fn wots_checksum(msg: &[u32], w: u32) -> u32 {
    msg.iter().map(|&m| w - 1 - m).sum()
}

/// Encode the WOTS+ checksum as `len2` base-w digits.
///
/// The checksum is left-shifted so its most significant bit lands on a
/// digit boundary: `csum <<= (8 - ((len2 * lg_w) mod 8)) mod 8`.
#[must_use]
pub fn encode_checksum(csum: u32, lg_w: usize, len2: usize) -> Vec<u32> {
    let shift = (8 - ((len2 * lg_w) % 8)) % 8;
    let shifted = u64::from(csum) << shift;
    let csum_bytes = (len2 * lg_w).div_ceil(8);
    let buf = to_byte::<8>(shifted);
    base_2b(&buf[8 - csum_bytes..], lg_w, len2)
}

/// MGF1 mask generation over an arbitrary fixed-output hash.
///
/// Produces `mask_len` bytes as the concatenation of
/// `H(seed || toByte(counter, 4))` for counter = 0, 1, ..., truncated.
///
/// # Errors
/// Returns [`Error::Truncation`] if `mask_len` exceeds `2^32 * hLen`.
pub fn mgf1<D: Digest>(seed: &[u8], mask_len: usize) -> Result<Vec<u8>> {
    let h_len = <D as Digest>::output_size();
    if mask_len as u128 > (1u128 << 32) * h_len as u128 {
        return Err(Error::Truncation);
    }

    let mut output = Vec::with_capacity(mask_len);
    let mut counter: u32 = 0;
    while output.len() < mask_len {
        let mut hasher = D::new();
        hasher.update(seed);
        hasher.update(counter.to_be_bytes());
        output.extend_from_slice(&hasher.finalize());
        counter = counter.wrapping_add(1);
    }

    output.truncate(mask_len);
    Ok(output)
}

/// Constant-time byte equality.
///
/// Inputs of unequal length compare unequal; equal-length inputs are
/// compared without short-circuiting.
#[must_use]
pub fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
