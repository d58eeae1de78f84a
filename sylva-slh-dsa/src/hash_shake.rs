//! SHAKE-based hash function instantiations.
//!
//! FIPS 205, Section 11.1: every function is SHAKE256 over the
//! concatenation of its inputs, with the address in its full 32-byte form.

use crate::address::Address;
use crate::hash::HashSuite;
use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};
use zeroize::Zeroizing;

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// SHAKE256-based hash suite for 128-bit security (n=16).
pub struct Shake128Hash;

/// SHAKE256-based hash suite for 192-bit security (n=24).
pub struct Shake192Hash;

/// SHAKE256-based hash suite for 256-bit security (n=32).
pub struct Shake256Hash;

macro_rules! impl_shake_hash_suite {
    ($name:ident, $n:expr) => {
        impl HashSuite for $name {
            const N: usize = $n;

            fn prf(pk_seed: &[u8], sk_seed: &[u8], adrs: &Address) -> Zeroizing<Vec<u8>> {
                // PRF(PK.seed, SK.seed, ADRS) = SHAKE256(PK.seed || ADRS || SK.seed, 8n)
                let mut hasher = Shake256::default();
                hasher.update(pk_seed);
                hasher.update(adrs.as_bytes());
                hasher.update(sk_seed);
                let mut reader = hasher.finalize_xof();
                let mut output = Zeroizing::new(vec![0u8; $n]);
                reader.read(&mut output);
                output
            }

            fn prf_msg(sk_prf: &[u8], opt_rand: &[u8], message: &[u8]) -> Zeroizing<Vec<u8>> {
                // PRFmsg(SK.prf, opt_rand, M) = SHAKE256(SK.prf || opt_rand || M, 8n)
                let mut hasher = Shake256::default();
                hasher.update(sk_prf);
                hasher.update(opt_rand);
                hasher.update(message);
                let mut reader = hasher.finalize_xof();
                let mut output = Zeroizing::new(vec![0u8; $n]);
                reader.read(&mut output);
                output
            }

            fn h_msg(
                r: &[u8],
                pk_seed: &[u8],
                pk_root: &[u8],
                message: &[u8],
                out_len: usize,
            ) -> Vec<u8> {
                // Hmsg(R, PK.seed, PK.root, M) = SHAKE256(R || PK.seed || PK.root || M, 8m)
                let mut hasher = Shake256::default();
                hasher.update(r);
                hasher.update(pk_seed);
                hasher.update(pk_root);
                hasher.update(message);
                let mut reader = hasher.finalize_xof();
                let mut output = vec![0u8; out_len];
                reader.read(&mut output);
                output
            }

            fn f(pk_seed: &[u8], adrs: &Address, m1: &[u8]) -> Vec<u8> {
                // F(PK.seed, ADRS, M1) = SHAKE256(PK.seed || ADRS || M1, 8n)
                let mut hasher = Shake256::default();
                hasher.update(pk_seed);
                hasher.update(adrs.as_bytes());
                hasher.update(m1);
                let mut reader = hasher.finalize_xof();
                let mut output = vec![0u8; $n];
                reader.read(&mut output);
                output
            }

            fn h(pk_seed: &[u8], adrs: &Address, m1: &[u8], m2: &[u8]) -> Vec<u8> {
                // H(PK.seed, ADRS, M1 || M2) = SHAKE256(PK.seed || ADRS || M1 || M2, 8n)
                let mut hasher = Shake256::default();
                hasher.update(pk_seed);
                hasher.update(adrs.as_bytes());
                hasher.update(m1);
                hasher.update(m2);
                let mut reader = hasher.finalize_xof();
                let mut output = vec![0u8; $n];
                reader.read(&mut output);
                output
            }

            fn t_l(pk_seed: &[u8], adrs: &Address, m: &[u8]) -> Vec<u8> {
                // Tl(PK.seed, ADRS, M) = SHAKE256(PK.seed || ADRS || M, 8n)
                let mut hasher = Shake256::default();
                hasher.update(pk_seed);
                hasher.update(adrs.as_bytes());
                hasher.update(m);
                let mut reader = hasher.finalize_xof();
                let mut output = vec![0u8; $n];
                reader.read(&mut output);
                output
            }
        }
    };
}

impl_shake_hash_suite!(Shake128Hash, 16);
impl_shake_hash_suite!(Shake192Hash, 24);
impl_shake_hash_suite!(Shake256Hash, 32);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::AdrsType;

    #[test]
    fn test_prf_determinism_and_length() {
        let pk_seed = [0u8; 16];
        let sk_seed = [1u8; 16];
        let adrs = Address::new();

        let out1 = Shake128Hash::prf(&pk_seed, &sk_seed, &adrs);
        let out2 = Shake128Hash::prf(&pk_seed, &sk_seed, &adrs);
        assert_eq!(out1.len(), 16);
        assert_eq!(out1, out2);
    }

    #[test]
    fn test_prf_separates_addresses() {
        let pk_seed = [0u8; 16];
        let sk_seed = [1u8; 16];
        let adrs1 = Address::new();
        let mut adrs2 = Address::new();
        adrs2.set_type_and_clear(AdrsType::WotsPrf);
        adrs2.set_chain(1);

        let out1 = Shake128Hash::prf(&pk_seed, &sk_seed, &adrs1);
        let out2 = Shake128Hash::prf(&pk_seed, &sk_seed, &adrs2);
        assert_ne!(out1, out2);
    }

    #[test]
    fn test_h_orders_children() {
        let pk_seed = [0u8; 24];
        let adrs = Address::new();
        let m1 = [1u8; 24];
        let m2 = [2u8; 24];

        let out = Shake192Hash::h(&pk_seed, &adrs, &m1, &m2);
        let swapped = Shake192Hash::h(&pk_seed, &adrs, &m2, &m1);
        assert_eq!(out.len(), 24);
        assert_ne!(out, swapped);
    }

    #[test]
    fn test_h_msg_prefix_consistency() {
        let r = [0u8; 32];
        let pk_seed = [1u8; 32];
        let pk_root = [2u8; 32];
        let message = b"test message";

        let out_32 = Shake256Hash::h_msg(&r, &pk_seed, &pk_root, message, 32);
        let out_64 = Shake256Hash::h_msg(&r, &pk_seed, &pk_root, message, 64);
        assert_eq!(&out_32[..], &out_64[..32]);
    }

    #[test]
    fn test_t_l_compresses_wots_width() {
        let pk_seed = [0u8; 16];
        let adrs = Address::new();
        let m = vec![0u8; 35 * 16];
        assert_eq!(Shake128Hash::t_l(&pk_seed, &adrs, &m).len(), 16);
    }
}
