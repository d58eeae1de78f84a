//! Hypertree: the d-layer chain of XMSS trees.
//!
//! Each layer's XMSS trees certify the roots of the layer below; layer 0
//! signs the FORS public key and the single layer d-1 tree's root is
//! `PK.root`. Tree positions are 96-bit [`TreeIndex`] values: each layer
//! consumes h' low bits as its leaf index.
//!
//! FIPS 205, Algorithms 12-13.

use crate::address::Address;
use crate::hash::HashSuite;
use crate::index::TreeIndex;
use crate::utils::ct_eq;
use crate::xmss::{xmss_node, xmss_pk_from_sig, xmss_sign_to};
use sylva_core::Result;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Generate a hypertree signature: d XMSS signatures, bottom layer first.
///
/// FIPS 205, Algorithm 12: ht_sign(M, SK.seed, PK.seed, idx_tree, idx_leaf).
/// `idx_tree` is consumed layer by layer (the caller keeps its own copy if
/// it still needs the value).
pub fn ht_sign<H: HashSuite, const WOTS_LEN: usize, const WOTS_LEN1: usize>(
    message: &[u8],
    sk_seed: &[u8],
    pk_seed: &[u8],
    mut idx_tree: TreeIndex,
    idx_leaf: u32,
    h_prime: usize,
    d: usize,
) -> Result<Vec<u8>> {
    let n = H::N;
    let xmss_sig_len = (WOTS_LEN + h_prime) * n;
    let mut sig_ht = vec![0u8; d * xmss_sig_len];

    let mut adrs = Address::new();
    adrs.set_tree(idx_tree);

    xmss_sign_to::<H, WOTS_LEN, WOTS_LEN1>(
        &mut sig_ht[..xmss_sig_len],
        message,
        sk_seed,
        idx_leaf,
        pk_seed,
        adrs,
        h_prime,
    )?;

    let mut root = xmss_pk_from_sig::<H, WOTS_LEN, WOTS_LEN1>(
        idx_leaf,
        &sig_ht[..xmss_sig_len],
        message,
        pk_seed,
        adrs,
        h_prime,
    )?;

    for j in 1..d {
        let idx_leaf_j = idx_tree.residue(h_prime);
        idx_tree.remove_bits(h_prime);

        adrs.set_layer(j as u32);
        adrs.set_tree(idx_tree);

        let sig_j = &mut sig_ht[j * xmss_sig_len..(j + 1) * xmss_sig_len];
        xmss_sign_to::<H, WOTS_LEN, WOTS_LEN1>(
            sig_j, &root, sk_seed, idx_leaf_j, pk_seed, adrs, h_prime,
        )?;

        if j < d - 1 {
            let sig_j = &sig_ht[j * xmss_sig_len..(j + 1) * xmss_sig_len];
            root = xmss_pk_from_sig::<H, WOTS_LEN, WOTS_LEN1>(
                idx_leaf_j, sig_j, &root, pk_seed, adrs, h_prime,
            )?;
        }
    }

    Ok(sig_ht)
}

/// Verify a hypertree signature against `PK.root`.
///
/// FIPS 205, Algorithm 13: ht_verify(M, SIG_HT, PK.seed, idx_tree,
/// idx_leaf, PK.root). Mirrors [`ht_sign`]'s index bookkeeping; the final
/// root comparison is constant-time.
pub fn ht_verify<H: HashSuite, const WOTS_LEN: usize, const WOTS_LEN1: usize>(
    message: &[u8],
    sig_ht: &[u8],
    pk_seed: &[u8],
    mut idx_tree: TreeIndex,
    idx_leaf: u32,
    pk_root: &[u8],
    h_prime: usize,
    d: usize,
) -> Result<bool> {
    let n = H::N;
    let xmss_sig_len = (WOTS_LEN + h_prime) * n;
    debug_assert_eq!(sig_ht.len(), d * xmss_sig_len);

    let mut adrs = Address::new();
    adrs.set_tree(idx_tree);

    let mut node = xmss_pk_from_sig::<H, WOTS_LEN, WOTS_LEN1>(
        idx_leaf,
        &sig_ht[..xmss_sig_len],
        message,
        pk_seed,
        adrs,
        h_prime,
    )?;

    for j in 1..d {
        let idx_leaf_j = idx_tree.residue(h_prime);
        idx_tree.remove_bits(h_prime);

        adrs.set_layer(j as u32);
        adrs.set_tree(idx_tree);

        let sig_j = &sig_ht[j * xmss_sig_len..(j + 1) * xmss_sig_len];
        node = xmss_pk_from_sig::<H, WOTS_LEN, WOTS_LEN1>(
            idx_leaf_j, sig_j, &node, pk_seed, adrs, h_prime,
        )?;
    }

    Ok(ct_eq(&node, pk_root))
}

/// Compute the hypertree root (`PK.root`): the root of the single XMSS
/// tree at layer d-1.
pub fn ht_root<H: HashSuite, const WOTS_LEN: usize>(
    sk_seed: &[u8],
    pk_seed: &[u8],
    h_prime: usize,
    d: usize,
) -> Result<Vec<u8>> {
    let mut adrs = Address::new();
    adrs.set_layer(d as u32 - 1);
    adrs.set_tree(TreeIndex::ZERO);
    xmss_node::<H, WOTS_LEN>(sk_seed, 0, h_prime as u32, pk_seed, adrs)
}
