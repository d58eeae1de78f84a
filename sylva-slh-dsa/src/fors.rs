//! FORS (Forest of Random Subsets) implementation.
//!
//! A few-time signature over the message digest: k Merkle trees of height
//! a, one secret leaf revealed per tree, selected by k a-bit chunks of the
//! digest. The k roots compress to the FORS public key, which the
//! hypertree then certifies.
//!
//! FIPS 205, Algorithms 14-17.

use crate::address::{Address, AdrsType};
use crate::hash::HashSuite;
use crate::utils::base_2b;
use zeroize::Zeroizing;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Derive the FORS secret element at forest-wide leaf position `idx`.
///
/// FIPS 205, Algorithm 14: fors_skGen(SK.seed, PK.seed, ADRS, idx). The
/// incoming address is typed `ForsTree` with layer, tree, and key pair
/// set; the derivation runs under a `ForsPrf` clone with the key pair
/// copied across.
pub fn fors_sk_gen<H: HashSuite>(
    sk_seed: &[u8],
    pk_seed: &[u8],
    adrs: &Address,
    idx: u32,
) -> Zeroizing<Vec<u8>> {
    let mut sk_adrs = adrs.with_type(AdrsType::ForsPrf);
    sk_adrs.set_key_pair(adrs.key_pair());
    sk_adrs.set_tree_index(idx);
    H::prf(pk_seed, sk_seed, &sk_adrs)
}

/// Compute the node at height `z`, forest-wide index `i`.
///
/// FIPS 205, Algorithm 15: fors_node(SK.seed, i, z, PK.seed, ADRS).
/// Preconditions: `z <= a` and `i < k * 2^(a - z)`. Indices are global
/// across the forest, so tree t's root is node (t, z = a) = index t at
/// height a.
pub fn fors_node<H: HashSuite>(
    sk_seed: &[u8],
    i: u32,
    z: u32,
    pk_seed: &[u8],
    adrs: Address,
) -> Vec<u8> {
    let mut adrs = adrs;
    if z == 0 {
        let sk = fors_sk_gen::<H>(sk_seed, pk_seed, &adrs, i);
        adrs.set_tree_height(0);
        adrs.set_tree_index(i);
        H::f(pk_seed, &adrs, &sk)
    } else {
        let left = fors_node::<H>(sk_seed, 2 * i, z - 1, pk_seed, adrs);
        let right = fors_node::<H>(sk_seed, 2 * i + 1, z - 1, pk_seed, adrs);
        adrs.set_tree_height(z);
        adrs.set_tree_index(i);
        H::h(pk_seed, &adrs, &left, &right)
    }
}

/// Generate a FORS signature into a caller-provided buffer of exactly
/// `k * (1 + a) * n` bytes: per tree, the revealed secret element followed
/// by its authentication path.
///
/// FIPS 205, Algorithm 16: fors_sign(md, SK.seed, PK.seed, ADRS).
pub fn fors_sign_to<H: HashSuite>(
    out: &mut [u8],
    md: &[u8],
    sk_seed: &[u8],
    pk_seed: &[u8],
    adrs: Address,
    k: usize,
    a: usize,
) {
    let n = H::N;
    let per_tree = (1 + a) * n;
    debug_assert_eq!(out.len(), k * per_tree);

    let indices = base_2b(md, a, k);

    for i in 0..k {
        let idx = indices[i];
        let tree_out = &mut out[i * per_tree..(i + 1) * per_tree];

        let leaf = (i as u32) << a | idx;
        let sk = fors_sk_gen::<H>(sk_seed, pk_seed, &adrs, leaf);
        tree_out[..n].copy_from_slice(&sk);

        for j in 0..a {
            let sibling = ((i as u32) << (a - j)) + ((idx >> j) ^ 1);
            let node = fors_node::<H>(sk_seed, sibling, j as u32, pk_seed, adrs);
            tree_out[n + j * n..n + (j + 1) * n].copy_from_slice(&node);
        }
    }
}

/// Generate a FORS signature.
///
/// Allocating wrapper around [`fors_sign_to`].
pub fn fors_sign<H: HashSuite>(
    md: &[u8],
    sk_seed: &[u8],
    pk_seed: &[u8],
    adrs: Address,
    k: usize,
    a: usize,
) -> Vec<u8> {
    let mut sig = vec![0u8; k * (1 + a) * H::N];
    fors_sign_to::<H>(&mut sig, md, sk_seed, pk_seed, adrs, k, a);
    sig
}

/// Recover the FORS public key from a signature and digest.
///
/// FIPS 205, Algorithm 17: fors_pkFromSig(SIG_FORS, md, PK.seed, ADRS).
/// Rebuilds each tree's root from the revealed leaf and its path, then
/// compresses the k roots under a `ForsRoots` clone.
pub fn fors_pk_from_sig<H: HashSuite>(
    sig_fors: &[u8],
    md: &[u8],
    pk_seed: &[u8],
    adrs: Address,
    k: usize,
    a: usize,
) -> Vec<u8> {
    let n = H::N;
    let per_tree = (1 + a) * n;
    debug_assert_eq!(sig_fors.len(), k * per_tree);

    let indices = base_2b(md, a, k);
    let mut roots = Vec::with_capacity(k * n);
    let mut adrs = adrs;

    for i in 0..k {
        let idx = indices[i];
        let sig_i = &sig_fors[i * per_tree..(i + 1) * per_tree];
        let sk = &sig_i[..n];
        let auth = &sig_i[n..];

        adrs.set_tree_height(0);
        adrs.set_tree_index((i as u32) << a | idx);
        let mut node = H::f(pk_seed, &adrs, sk);

        for j in 0..a {
            let auth_j = &auth[j * n..(j + 1) * n];
            adrs.set_tree_height(j as u32 + 1);

            if (idx >> j) & 1 == 0 {
                adrs.set_tree_index(adrs.tree_index() / 2);
                node = H::h(pk_seed, &adrs, &node, auth_j);
            } else {
                adrs.set_tree_index((adrs.tree_index() - 1) / 2);
                node = H::h(pk_seed, &adrs, auth_j, &node);
            }
        }

        roots.extend_from_slice(&node);
    }

    let mut pk_adrs = adrs.with_type(AdrsType::ForsRoots);
    pk_adrs.set_key_pair(adrs.key_pair());
    H::t_l(pk_seed, &pk_adrs, &roots)
}

/// Compute the FORS public key directly from the secret seed.
///
/// Not part of the signing flow; used by tests to cross-check
/// [`fors_pk_from_sig`].
#[cfg(test)]
pub fn fors_pk_gen<H: HashSuite>(
    sk_seed: &[u8],
    pk_seed: &[u8],
    adrs: Address,
    k: usize,
    a: usize,
) -> Vec<u8> {
    let mut roots = Vec::with_capacity(k * H::N);
    for i in 0..k {
        let root = fors_node::<H>(sk_seed, i as u32, a as u32, pk_seed, adrs);
        roots.extend_from_slice(&root);
    }

    let mut pk_adrs = adrs.with_type(AdrsType::ForsRoots);
    pk_adrs.set_key_pair(adrs.key_pair());
    H::t_l(pk_seed, &pk_adrs, &roots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash_shake::Shake128Hash;

    const N: usize = 16;
    const K: usize = 4; // shrunken forest
    const A: usize = 3;

    fn fors_adrs(key_pair: u32) -> Address {
        let mut adrs = Address::new();
        adrs.set_type_and_clear(AdrsType::ForsTree);
        adrs.set_key_pair(key_pair);
        adrs
    }

    #[test]
    fn test_sk_gen_determinism() {
        let sk_seed = [1u8; N];
        let pk_seed = [2u8; N];
        let adrs = fors_adrs(0);

        let sk1 = fors_sk_gen::<Shake128Hash>(&sk_seed, &pk_seed, &adrs, 7);
        let sk2 = fors_sk_gen::<Shake128Hash>(&sk_seed, &pk_seed, &adrs, 7);
        assert_eq!(sk1.len(), N);
        assert_eq!(sk1, sk2);
    }

    #[test]
    fn test_sk_gen_separates_leaves() {
        let sk_seed = [1u8; N];
        let pk_seed = [2u8; N];
        let adrs = fors_adrs(0);

        let sk0 = fors_sk_gen::<Shake128Hash>(&sk_seed, &pk_seed, &adrs, 0);
        let sk1 = fors_sk_gen::<Shake128Hash>(&sk_seed, &pk_seed, &adrs, 1);
        assert_ne!(sk0, sk1);
    }

    #[test]
    fn test_sign_size() {
        let sig = fors_sign::<Shake128Hash>(&[0x55; 8], &[1u8; N], &[2u8; N], fors_adrs(0), K, A);
        assert_eq!(sig.len(), K * (1 + A) * N);
    }

    #[test]
    fn test_roundtrip_many_digests() {
        let sk_seed = [1u8; N];
        let pk_seed = [2u8; N];

        let expected = fors_pk_gen::<Shake128Hash>(&sk_seed, &pk_seed, fors_adrs(0), K, A);

        for byte in (0..=255u8).step_by(5) {
            let md = [byte, byte.wrapping_mul(3)];
            let sig = fors_sign::<Shake128Hash>(&md, &sk_seed, &pk_seed, fors_adrs(0), K, A);
            let pk = fors_pk_from_sig::<Shake128Hash>(&sig, &md, &pk_seed, fors_adrs(0), K, A);
            assert_eq!(expected, pk, "md byte {byte}");
        }
    }

    #[test]
    fn test_wrong_digest_recovers_wrong_pk() {
        let sk_seed = [1u8; N];
        let pk_seed = [2u8; N];

        let expected = fors_pk_gen::<Shake128Hash>(&sk_seed, &pk_seed, fors_adrs(0), K, A);
        let sig = fors_sign::<Shake128Hash>(&[0x55, 0x55], &sk_seed, &pk_seed, fors_adrs(0), K, A);
        let pk =
            fors_pk_from_sig::<Shake128Hash>(&sig, &[0xAA, 0xAA], &pk_seed, fors_adrs(0), K, A);
        assert_ne!(expected, pk);
    }

    #[test]
    fn test_key_pair_separates_forests() {
        let sk_seed = [1u8; N];
        let pk_seed = [2u8; N];

        let pk0 = fors_pk_gen::<Shake128Hash>(&sk_seed, &pk_seed, fors_adrs(0), K, A);
        let pk1 = fors_pk_gen::<Shake128Hash>(&sk_seed, &pk_seed, fors_adrs(1), K, A);
        assert_ne!(pk0, pk1);
    }
}
