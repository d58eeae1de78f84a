//! Core SLH-DSA key generation, signing, and verification.
//!
//! The `_internal` functions implement FIPS 205, Algorithms 18-20 over an
//! already-framed message `M'`; the external functions layer the pure and
//! pre-hash encodings (Algorithms 22-25) on top. Deterministic signing
//! passes `PK.seed` as `addrnd`; hedged signing passes fresh randomness.
//! That choice belongs to the call site, not to this module.

use crate::address::{Address, AdrsType};
use crate::fors::{fors_pk_from_sig, fors_sign_to};
use crate::hash::HashSuite;
use crate::hypertree::{ht_root, ht_sign, ht_verify};
use crate::index::TreeIndex;
use crate::prehash::{encode_prehash, encode_pure, PreHash};
use crate::utils::{ct_eq, to_int};
use rand_core::TryCryptoRng;
use sylva_core::{Error, Result};
use zeroize::Zeroize;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

fn all_zero(bytes: &[u8]) -> bool {
    bytes.iter().all(|&b| b == 0)
}

/// Secret key components.
///
/// Zeroized on drop. `pk_seed` and `pk_root` are public material but live
/// here as well so one struct carries everything signing needs.
#[derive(Clone, Zeroize)]
pub struct SecretKey<const N: usize> {
    /// Secret seed: the source of all WOTS+ and FORS secret elements.
    pub sk_seed: [u8; N],
    /// Secret PRF key: randomizes the message digest.
    pub sk_prf: [u8; N],
    /// Public seed, mixed into every hash call.
    pub pk_seed: [u8; N],
    /// Root of the top-layer XMSS tree.
    pub pk_root: [u8; N],
}

impl<const N: usize> SecretKey<N> {
    /// Serialize as `SK.seed || SK.prf || PK.seed || PK.root` (4n bytes).
    ///
    /// The returned buffer contains secret material and zeroizes itself.
    #[must_use]
    pub fn to_bytes(&self) -> zeroize::Zeroizing<Vec<u8>> {
        let mut bytes = zeroize::Zeroizing::new(Vec::with_capacity(N * 4));
        bytes.extend_from_slice(&self.sk_seed);
        bytes.extend_from_slice(&self.sk_prf);
        bytes.extend_from_slice(&self.pk_seed);
        bytes.extend_from_slice(&self.pk_root);
        bytes
    }

    /// Deserialize a secret key, enforcing length and the non-zero
    /// component invariant.
    ///
    /// # Errors
    /// [`Error::InvalidLength`] on a wrong-size buffer, [`Error::WeakKey`]
    /// if any component is all zero.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != N * 4 {
            return Err(Error::InvalidLength {
                expected: N * 4,
                actual: bytes.len(),
            });
        }
        // Copy straight into the zero-initialized fields; no intermediate
        // stack buffers holding secret material.
        let mut key = Self {
            sk_seed: [0u8; N],
            sk_prf: [0u8; N],
            pk_seed: [0u8; N],
            pk_root: [0u8; N],
        };
        key.sk_seed.copy_from_slice(&bytes[..N]);
        key.sk_prf.copy_from_slice(&bytes[N..2 * N]);
        key.pk_seed.copy_from_slice(&bytes[2 * N..3 * N]);
        key.pk_root.copy_from_slice(&bytes[3 * N..]);

        if all_zero(&key.sk_seed)
            || all_zero(&key.sk_prf)
            || all_zero(&key.pk_seed)
            || all_zero(&key.pk_root)
        {
            return Err(Error::WeakKey);
        }
        Ok(key)
    }

    /// Recompute `PK.root` from `SK.seed` and check it against the stored
    /// root.
    ///
    /// # Errors
    /// Returns [`Error::RootMismatch`] if the recomputed root disagrees.
    pub fn validate<H: HashSuite, const WOTS_LEN: usize, const H_PRIME: usize, const D: usize>(
        &self,
    ) -> Result<()> {
        let root = ht_root::<H, WOTS_LEN>(&self.sk_seed, &self.pk_seed, H_PRIME, D)?;
        if ct_eq(&root, &self.pk_root) {
            Ok(())
        } else {
            Err(Error::RootMismatch)
        }
    }
}

impl<const N: usize> Drop for SecretKey<N> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<const N: usize> PartialEq for SecretKey<N> {
    fn eq(&self, other: &Self) -> bool {
        // Secret comparison stays constant-time end to end.
        let mut eq = ct_eq(&self.sk_seed, &other.sk_seed);
        eq &= ct_eq(&self.sk_prf, &other.sk_prf);
        eq &= ct_eq(&self.pk_seed, &other.pk_seed);
        eq &= ct_eq(&self.pk_root, &other.pk_root);
        eq
    }
}

impl<const N: usize> Eq for SecretKey<N> {}

/// Public key components.
#[derive(Clone, Debug)]
pub struct PublicKey<const N: usize> {
    /// Public seed.
    pub pk_seed: [u8; N],
    /// Root of the top-layer XMSS tree.
    pub pk_root: [u8; N],
}

impl<const N: usize> PublicKey<N> {
    /// Serialize as `PK.seed || PK.root` (2n bytes).
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(N * 2);
        bytes.extend_from_slice(&self.pk_seed);
        bytes.extend_from_slice(&self.pk_root);
        bytes
    }

    /// Deserialize a public key.
    ///
    /// # Errors
    /// [`Error::InvalidLength`] on a wrong-size buffer, [`Error::WeakKey`]
    /// if either component is all zero.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != N * 2 {
            return Err(Error::InvalidLength {
                expected: N * 2,
                actual: bytes.len(),
            });
        }
        let mut pk_seed = [0u8; N];
        let mut pk_root = [0u8; N];
        pk_seed.copy_from_slice(&bytes[..N]);
        pk_root.copy_from_slice(&bytes[N..]);

        if all_zero(&pk_seed) || all_zero(&pk_root) {
            return Err(Error::WeakKey);
        }
        Ok(Self { pk_seed, pk_root })
    }
}

impl<const N: usize> PartialEq for PublicKey<N> {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.pk_seed, &other.pk_seed) & ct_eq(&self.pk_root, &other.pk_root)
    }
}

impl<const N: usize> Eq for PublicKey<N> {}

/// Generate an SLH-DSA key pair from a random source.
///
/// FIPS 205, Algorithm 21: slh_keygen().
///
/// # Errors
/// [`Error::RngFailure`] if the source fails, [`Error::WeakKey`] if it
/// produces an all-zero seed.
pub fn slh_keygen<
    H: HashSuite,
    const N: usize,
    const WOTS_LEN: usize,
    const H_PRIME: usize,
    const D: usize,
>(
    rng: &mut impl TryCryptoRng,
) -> Result<(SecretKey<N>, PublicKey<N>)> {
    let mut sk_seed = [0u8; N];
    let mut sk_prf = [0u8; N];
    let mut pk_seed = [0u8; N];

    rng.try_fill_bytes(&mut sk_seed).map_err(|_| Error::RngFailure)?;
    rng.try_fill_bytes(&mut sk_prf).map_err(|_| Error::RngFailure)?;
    rng.try_fill_bytes(&mut pk_seed).map_err(|_| Error::RngFailure)?;

    slh_keygen_internal::<H, N, WOTS_LEN, H_PRIME, D>(sk_seed, sk_prf, pk_seed)
}

/// Key generation from caller-provided seeds.
///
/// FIPS 205, Algorithm 18: slh_keygen_internal(SK.seed, SK.prf, PK.seed).
/// This is the ACVP entry point; production callers use [`slh_keygen`].
///
/// # Errors
/// [`Error::WeakKey`] if any seed is all zero.
pub fn slh_keygen_internal<
    H: HashSuite,
    const N: usize,
    const WOTS_LEN: usize,
    const H_PRIME: usize,
    const D: usize,
>(
    sk_seed: [u8; N],
    sk_prf: [u8; N],
    pk_seed: [u8; N],
) -> Result<(SecretKey<N>, PublicKey<N>)> {
    if all_zero(&sk_seed) || all_zero(&sk_prf) || all_zero(&pk_seed) {
        return Err(Error::WeakKey);
    }

    let pk_root_vec = ht_root::<H, WOTS_LEN>(&sk_seed, &pk_seed, H_PRIME, D)?;
    let mut pk_root = [0u8; N];
    pk_root.copy_from_slice(&pk_root_vec);

    let sk = SecretKey {
        sk_seed,
        sk_prf,
        pk_seed,
        pk_root,
    };
    let pk = PublicKey { pk_seed, pk_root };
    Ok((sk, pk))
}

/// Split the message digest into the FORS digest, tree index, and leaf
/// index.
///
/// FIPS 205, Algorithm 19, steps 7-10. Consumes exactly
/// `ceil(k*a/8) + ceil((h-h')/8) + ceil(h'/8)` bytes; the indices are
/// reduced to `h - h'` and `h'` bits.
fn split_digest<const K: usize, const A: usize, const H_PRIME: usize, const D: usize>(
    digest: &[u8],
) -> (Vec<u8>, TreeIndex, u32) {
    let md_bytes = (K * A).div_ceil(8);
    let tree_bits = H_PRIME * (D - 1);
    let tree_bytes = tree_bits.div_ceil(8);
    let leaf_bytes = H_PRIME.div_ceil(8);
    debug_assert_eq!(digest.len(), md_bytes + tree_bytes + leaf_bytes);

    let md = digest[..md_bytes].to_vec();

    let idx_tree =
        TreeIndex::from_bytes(&digest[md_bytes..md_bytes + tree_bytes]).mask_lower(tree_bits);

    let leaf_raw = to_int(&digest[md_bytes + tree_bytes..md_bytes + tree_bytes + leaf_bytes]);
    let idx_leaf = (leaf_raw as u32) & ((1u32 << H_PRIME) - 1);

    (md, idx_tree, idx_leaf)
}

/// Sign an already-framed message `M'`.
///
/// FIPS 205, Algorithm 19: slh_sign_internal(M', SK, addrnd). `addrnd` is
/// `PK.seed` for deterministic signing or n fresh random bytes for hedged
/// signing. The output is `R || SIG_FORS || SIG_HT`.
#[allow(clippy::too_many_arguments)]
pub fn slh_sign_internal<
    H: HashSuite,
    const N: usize,
    const WOTS_LEN: usize,
    const WOTS_LEN1: usize,
    const H_PRIME: usize,
    const D: usize,
    const K: usize,
    const A: usize,
    const M: usize,
>(
    sk: &SecretKey<N>,
    m_prime: &[u8],
    addrnd: &[u8],
) -> Result<Vec<u8>> {
    let r = H::prf_msg(&sk.sk_prf, addrnd, m_prime);
    let digest = H::h_msg(&r, &sk.pk_seed, &sk.pk_root, m_prime, M);
    let (md, idx_tree, idx_leaf) = split_digest::<K, A, H_PRIME, D>(&digest);

    let mut adrs = Address::new();
    adrs.set_tree(idx_tree);
    adrs.set_type_and_clear(AdrsType::ForsTree);
    adrs.set_key_pair(idx_leaf);

    let fors_sig_len = K * (A + 1) * N;
    let ht_sig_len = D * (WOTS_LEN + H_PRIME) * N;
    let mut signature = vec![0u8; N + fors_sig_len + ht_sig_len];

    signature[..N].copy_from_slice(&r);
    fors_sign_to::<H>(
        &mut signature[N..N + fors_sig_len],
        &md,
        &sk.sk_seed,
        &sk.pk_seed,
        adrs,
        K,
        A,
    );

    let pk_fors = fors_pk_from_sig::<H>(
        &signature[N..N + fors_sig_len],
        &md,
        &sk.pk_seed,
        adrs,
        K,
        A,
    );

    // ht_sign consumes its own copy of idx_tree.
    let sig_ht = ht_sign::<H, WOTS_LEN, WOTS_LEN1>(
        &pk_fors,
        &sk.sk_seed,
        &sk.pk_seed,
        idx_tree,
        idx_leaf,
        H_PRIME,
        D,
    )?;
    signature[N + fors_sig_len..].copy_from_slice(&sig_ht);

    Ok(signature)
}

/// Verify an already-framed message `M'`.
///
/// FIPS 205, Algorithm 20: slh_verify_internal(M', SIG, PK). Total: every
/// malformed input is an invalid signature, never an error. The final root
/// comparison inside the hypertree walk is constant-time.
pub fn slh_verify_internal<
    H: HashSuite,
    const N: usize,
    const WOTS_LEN: usize,
    const WOTS_LEN1: usize,
    const H_PRIME: usize,
    const D: usize,
    const K: usize,
    const A: usize,
    const M: usize,
>(
    pk: &PublicKey<N>,
    m_prime: &[u8],
    signature: &[u8],
) -> bool {
    let fors_sig_len = K * (A + 1) * N;
    let ht_sig_len = D * (WOTS_LEN + H_PRIME) * N;
    if signature.len() != N + fors_sig_len + ht_sig_len {
        return false;
    }

    let r = &signature[..N];
    let sig_fors = &signature[N..N + fors_sig_len];
    let sig_ht = &signature[N + fors_sig_len..];

    let digest = H::h_msg(r, &pk.pk_seed, &pk.pk_root, m_prime, M);
    let (md, idx_tree, idx_leaf) = split_digest::<K, A, H_PRIME, D>(&digest);

    let mut adrs = Address::new();
    adrs.set_tree(idx_tree);
    adrs.set_type_and_clear(AdrsType::ForsTree);
    adrs.set_key_pair(idx_leaf);

    let pk_fors = fors_pk_from_sig::<H>(sig_fors, &md, &pk.pk_seed, adrs, K, A);

    ht_verify::<H, WOTS_LEN, WOTS_LEN1>(
        &pk_fors,
        sig_ht,
        &pk.pk_seed,
        idx_tree,
        idx_leaf,
        &pk.pk_root,
        H_PRIME,
        D,
    )
    .unwrap_or(false)
}

/// Sign a message under a context string (pure mode).
///
/// FIPS 205, Algorithm 22: slh_sign(M, ctx, SK). With `opt_rand = None`
/// the signature is deterministic (`addrnd = PK.seed`); otherwise
/// `opt_rand` must be n fresh random bytes.
#[allow(clippy::too_many_arguments)]
pub fn slh_sign<
    H: HashSuite,
    const N: usize,
    const WOTS_LEN: usize,
    const WOTS_LEN1: usize,
    const H_PRIME: usize,
    const D: usize,
    const K: usize,
    const A: usize,
    const M: usize,
>(
    sk: &SecretKey<N>,
    message: &[u8],
    ctx: &[u8],
    opt_rand: Option<&[u8]>,
) -> Result<Vec<u8>> {
    let m_prime = encode_pure(message, ctx)?;
    let addrnd = opt_rand.unwrap_or(&sk.pk_seed);
    slh_sign_internal::<H, N, WOTS_LEN, WOTS_LEN1, H_PRIME, D, K, A, M>(sk, &m_prime, addrnd)
}

/// Sign a message digest under a context string (pre-hash mode).
///
/// FIPS 205, Algorithm 23: hash_slh_sign(M, ctx, PH, SK).
#[allow(clippy::too_many_arguments)]
pub fn slh_sign_prehash<
    H: HashSuite,
    const N: usize,
    const WOTS_LEN: usize,
    const WOTS_LEN1: usize,
    const H_PRIME: usize,
    const D: usize,
    const K: usize,
    const A: usize,
    const M: usize,
>(
    sk: &SecretKey<N>,
    message: &[u8],
    ctx: &[u8],
    ph: PreHash,
    opt_rand: Option<&[u8]>,
) -> Result<Vec<u8>> {
    let m_prime = encode_prehash(message, ctx, ph)?;
    let addrnd = opt_rand.unwrap_or(&sk.pk_seed);
    slh_sign_internal::<H, N, WOTS_LEN, WOTS_LEN1, H_PRIME, D, K, A, M>(sk, &m_prime, addrnd)
}

/// Verify a pure-mode signature. Total over all inputs.
///
/// FIPS 205, Algorithm 24: slh_verify(M, SIG, ctx, PK).
pub fn slh_verify<
    H: HashSuite,
    const N: usize,
    const WOTS_LEN: usize,
    const WOTS_LEN1: usize,
    const H_PRIME: usize,
    const D: usize,
    const K: usize,
    const A: usize,
    const M: usize,
>(
    pk: &PublicKey<N>,
    message: &[u8],
    ctx: &[u8],
    signature: &[u8],
) -> bool {
    match encode_pure(message, ctx) {
        Ok(m_prime) => slh_verify_internal::<H, N, WOTS_LEN, WOTS_LEN1, H_PRIME, D, K, A, M>(
            pk, &m_prime, signature,
        ),
        Err(_) => false,
    }
}

/// Verify a pre-hash-mode signature. Total over all inputs.
///
/// FIPS 205, Algorithm 25: hash_slh_verify(M, SIG, ctx, PH, PK).
pub fn slh_verify_prehash<
    H: HashSuite,
    const N: usize,
    const WOTS_LEN: usize,
    const WOTS_LEN1: usize,
    const H_PRIME: usize,
    const D: usize,
    const K: usize,
    const A: usize,
    const M: usize,
>(
    pk: &PublicKey<N>,
    message: &[u8],
    ctx: &[u8],
    ph: PreHash,
    signature: &[u8],
) -> bool {
    match encode_prehash(message, ctx, ph) {
        Ok(m_prime) => slh_verify_internal::<H, N, WOTS_LEN, WOTS_LEN1, H_PRIME, D, K, A, M>(
            pk, &m_prime, signature,
        ),
        Err(_) => false,
    }
}
