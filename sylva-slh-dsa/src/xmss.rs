//! XMSS (eXtended Merkle Signature Scheme) implementation.
//!
//! A binary Merkle tree of height h' whose 2^h' leaves are WOTS+ public
//! keys. One XMSS signature is a WOTS+ signature plus the authentication
//! path from that leaf to the root.
//!
//! FIPS 205, Algorithms 9-11.

use crate::address::{Address, AdrsType};
use crate::hash::HashSuite;
use crate::wots::{wots_pk_from_sig, wots_pk_gen, wots_sign_to};
use sylva_core::Result;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Compute the node at height `z`, index `i` of the XMSS tree.
///
/// FIPS 205, Algorithm 9: xmss_node(SK.seed, i, z, PK.seed, ADRS).
/// Preconditions: `z <= h'` and `i < 2^(h' - z)`.
///
/// The address is taken by value; each recursion level mutates its own
/// copy, so concurrent or re-entrant callers never share address state.
pub fn xmss_node<H: HashSuite, const WOTS_LEN: usize>(
    sk_seed: &[u8],
    i: u32,
    z: u32,
    pk_seed: &[u8],
    adrs: Address,
) -> Result<Vec<u8>> {
    if z == 0 {
        // Leaf: the WOTS+ public key for key pair i.
        let mut leaf_adrs = adrs;
        leaf_adrs.set_type_and_clear(AdrsType::WotsHash);
        leaf_adrs.set_key_pair(i);
        wots_pk_gen::<H, WOTS_LEN>(sk_seed, pk_seed, leaf_adrs)
    } else {
        let left = xmss_node::<H, WOTS_LEN>(sk_seed, 2 * i, z - 1, pk_seed, adrs)?;
        let right = xmss_node::<H, WOTS_LEN>(sk_seed, 2 * i + 1, z - 1, pk_seed, adrs)?;

        let mut node_adrs = adrs;
        node_adrs.set_type_and_clear(AdrsType::Tree);
        node_adrs.set_tree_height(z);
        node_adrs.set_tree_index(i);
        Ok(H::h(pk_seed, &node_adrs, &left, &right))
    }
}

/// Generate an XMSS signature into a caller-provided buffer of exactly
/// `(WOTS_LEN + h') * n` bytes: WOTS+ signature followed by the
/// authentication path.
///
/// FIPS 205, Algorithm 10: xmss_sign(M, SK.seed, idx, PK.seed, ADRS).
pub fn xmss_sign_to<H: HashSuite, const WOTS_LEN: usize, const WOTS_LEN1: usize>(
    out: &mut [u8],
    message: &[u8],
    sk_seed: &[u8],
    idx: u32,
    pk_seed: &[u8],
    adrs: Address,
    h_prime: usize,
) -> Result<()> {
    let n = H::N;
    let wots_sig_len = WOTS_LEN * n;
    debug_assert_eq!(out.len(), wots_sig_len + h_prime * n);

    let mut wots_adrs = adrs;
    wots_adrs.set_type_and_clear(AdrsType::WotsHash);
    wots_adrs.set_key_pair(idx);
    wots_sign_to::<H, WOTS_LEN, WOTS_LEN1>(
        &mut out[..wots_sig_len],
        message,
        sk_seed,
        pk_seed,
        wots_adrs,
    )?;

    for j in 0..h_prime {
        let sibling = (idx >> j) ^ 1;
        let node = xmss_node::<H, WOTS_LEN>(sk_seed, sibling, j as u32, pk_seed, adrs)?;
        out[wots_sig_len + j * n..wots_sig_len + (j + 1) * n].copy_from_slice(&node);
    }
    Ok(())
}

/// Generate an XMSS signature.
///
/// Allocating wrapper around [`xmss_sign_to`].
pub fn xmss_sign<H: HashSuite, const WOTS_LEN: usize, const WOTS_LEN1: usize>(
    message: &[u8],
    sk_seed: &[u8],
    idx: u32,
    pk_seed: &[u8],
    adrs: Address,
    h_prime: usize,
) -> Result<Vec<u8>> {
    let mut sig = vec![0u8; (WOTS_LEN + h_prime) * H::N];
    xmss_sign_to::<H, WOTS_LEN, WOTS_LEN1>(&mut sig, message, sk_seed, idx, pk_seed, adrs, h_prime)?;
    Ok(sig)
}

/// Recover the XMSS root from a signature.
///
/// FIPS 205, Algorithm 11: xmss_pkFromSig(idx, SIG_XMSS, M, PK.seed, ADRS).
/// Recovers the WOTS+ public key, then folds it with the authentication
/// path; the leaf position at each height follows the bits of `idx`.
pub fn xmss_pk_from_sig<H: HashSuite, const WOTS_LEN: usize, const WOTS_LEN1: usize>(
    idx: u32,
    sig_xmss: &[u8],
    message: &[u8],
    pk_seed: &[u8],
    adrs: Address,
    h_prime: usize,
) -> Result<Vec<u8>> {
    let n = H::N;
    let wots_sig_len = WOTS_LEN * n;
    debug_assert_eq!(sig_xmss.len(), wots_sig_len + h_prime * n);

    let sig_wots = &sig_xmss[..wots_sig_len];
    let auth = &sig_xmss[wots_sig_len..];

    let mut wots_adrs = adrs;
    wots_adrs.set_type_and_clear(AdrsType::WotsHash);
    wots_adrs.set_key_pair(idx);
    let mut node =
        wots_pk_from_sig::<H, WOTS_LEN, WOTS_LEN1>(sig_wots, message, pk_seed, wots_adrs)?;

    let mut tree_adrs = adrs;
    tree_adrs.set_type_and_clear(AdrsType::Tree);
    tree_adrs.set_tree_index(idx);

    for k in 0..h_prime {
        tree_adrs.set_tree_height(k as u32 + 1);
        let auth_k = &auth[k * n..(k + 1) * n];

        if (idx >> k) & 1 == 0 {
            tree_adrs.set_tree_index(tree_adrs.tree_index() / 2);
            node = H::h(pk_seed, &tree_adrs, &node, auth_k);
        } else {
            tree_adrs.set_tree_index((tree_adrs.tree_index() - 1) / 2);
            node = H::h(pk_seed, &tree_adrs, auth_k, &node);
        }
    }

    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash_shake::Shake128Hash;

    const N: usize = 16;
    const WOTS_LEN: usize = 35;
    const WOTS_LEN1: usize = 32;
    const H_PRIME: usize = 4; // shrunken tree so tests stay fast

    #[test]
    fn test_leaf_is_deterministic() {
        let sk_seed = [1u8; N];
        let pk_seed = [2u8; N];

        let leaf =
            xmss_node::<Shake128Hash, WOTS_LEN>(&sk_seed, 0, 0, &pk_seed, Address::new()).unwrap();
        let again =
            xmss_node::<Shake128Hash, WOTS_LEN>(&sk_seed, 0, 0, &pk_seed, Address::new()).unwrap();
        assert_eq!(leaf.len(), N);
        assert_eq!(leaf, again);
    }

    #[test]
    fn test_leaves_differ_by_index() {
        let sk_seed = [1u8; N];
        let pk_seed = [2u8; N];

        let leaf0 =
            xmss_node::<Shake128Hash, WOTS_LEN>(&sk_seed, 0, 0, &pk_seed, Address::new()).unwrap();
        let leaf1 =
            xmss_node::<Shake128Hash, WOTS_LEN>(&sk_seed, 1, 0, &pk_seed, Address::new()).unwrap();
        assert_ne!(leaf0, leaf1);
    }

    #[test]
    fn test_sign_verify_every_leaf() {
        let sk_seed = [1u8; N];
        let pk_seed = [2u8; N];
        let message = [3u8; N];

        let root = xmss_node::<Shake128Hash, WOTS_LEN>(
            &sk_seed,
            0,
            H_PRIME as u32,
            &pk_seed,
            Address::new(),
        )
        .unwrap();

        for idx in 0..(1u32 << H_PRIME) {
            let sig = xmss_sign::<Shake128Hash, WOTS_LEN, WOTS_LEN1>(
                &message,
                &sk_seed,
                idx,
                &pk_seed,
                Address::new(),
                H_PRIME,
            )
            .unwrap();
            assert_eq!(sig.len(), (WOTS_LEN + H_PRIME) * N);

            let recovered = xmss_pk_from_sig::<Shake128Hash, WOTS_LEN, WOTS_LEN1>(
                idx,
                &sig,
                &message,
                &pk_seed,
                Address::new(),
                H_PRIME,
            )
            .unwrap();
            assert_eq!(root, recovered, "leaf {idx}");
        }
    }

    #[test]
    fn test_wrong_message_breaks_root() {
        let sk_seed = [1u8; N];
        let pk_seed = [2u8; N];
        let message = [3u8; N];
        let wrong = [4u8; N];

        let root = xmss_node::<Shake128Hash, WOTS_LEN>(
            &sk_seed,
            0,
            H_PRIME as u32,
            &pk_seed,
            Address::new(),
        )
        .unwrap();

        let sig = xmss_sign::<Shake128Hash, WOTS_LEN, WOTS_LEN1>(
            &message,
            &sk_seed,
            0,
            &pk_seed,
            Address::new(),
            H_PRIME,
        )
        .unwrap();

        let recovered = xmss_pk_from_sig::<Shake128Hash, WOTS_LEN, WOTS_LEN1>(
            0,
            &sig,
            &wrong,
            &pk_seed,
            Address::new(),
            H_PRIME,
        )
        .unwrap();
        assert_ne!(root, recovered);
    }

    #[test]
    fn test_wrong_index_breaks_root() {
        let sk_seed = [1u8; N];
        let pk_seed = [2u8; N];
        let message = [3u8; N];

        let root = xmss_node::<Shake128Hash, WOTS_LEN>(
            &sk_seed,
            0,
            H_PRIME as u32,
            &pk_seed,
            Address::new(),
        )
        .unwrap();

        let sig = xmss_sign::<Shake128Hash, WOTS_LEN, WOTS_LEN1>(
            &message,
            &sk_seed,
            0,
            &pk_seed,
            Address::new(),
            H_PRIME,
        )
        .unwrap();

        let recovered = xmss_pk_from_sig::<Shake128Hash, WOTS_LEN, WOTS_LEN1>(
            1,
            &sig,
            &message,
            &pk_seed,
            Address::new(),
            H_PRIME,
        )
        .unwrap();
        assert_ne!(root, recovered);
    }
}
