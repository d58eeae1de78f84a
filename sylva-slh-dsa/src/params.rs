//! SLH-DSA parameter sets as defined in FIPS 205.
//!
//! All 12 parameter sets are defined here:
//! - 6 SHAKE-based variants: SHAKE-128s/f, SHAKE-192s/f, SHAKE-256s/f
//! - 6 SHA2-based variants: SHA2-128s/f, SHA2-192s/f, SHA2-256s/f
//!
//! Each set is available both as a compile-time module of constants (used
//! by the generic signing core) and through the runtime [`ParamSet`] name
//! table (used for vector dispatch and key/signature size lookups).

use sylva_core::{Error, Result};

/// Common parameters shared across all SLH-DSA variants.
pub mod common {
    /// Winternitz parameter (always 16 for SLH-DSA).
    pub const W: usize = 16;

    /// Log2 of the Winternitz parameter.
    pub const LG_W: usize = 4;

    /// Address size in bytes.
    pub const ADRS_BYTES: usize = 32;

    /// Compressed address size in bytes (SHA-2 variants).
    pub const ADRS_C_BYTES: usize = 22;
}

/// Trait for SLH-DSA parameter sets.
pub trait Params {
    /// Security parameter n (hash output length in bytes).
    const N: usize;

    /// Total hypertree height.
    const H: usize;

    /// Number of hypertree layers.
    const D: usize;

    /// Height of each XMSS tree (h' = h/d).
    const H_PRIME: usize;

    /// FORS tree height.
    const A: usize;

    /// Number of FORS trees.
    const K: usize;

    /// Message digest length in bytes:
    /// ceil(k*a/8) + ceil((h - h')/8) + ceil(h'/8).
    const M: usize;

    /// WOTS+ len1 = 2n message digits (lg_w = 4).
    const WOTS_LEN1: usize = 2 * Self::N;

    /// WOTS+ len2 = 3 checksum digits (lg_w = 4).
    const WOTS_LEN2: usize = 3;

    /// Total WOTS+ chain count: len = len1 + len2.
    const WOTS_LEN: usize = Self::WOTS_LEN1 + Self::WOTS_LEN2;

    /// Public key size in bytes.
    const PK_BYTES: usize = 2 * Self::N;

    /// Secret key size in bytes.
    const SK_BYTES: usize = 4 * Self::N;

    /// Signature size in bytes:
    /// R (n) + SIG_FORS (k*(1+a)*n) + SIG_HT (d*(h'+len)*n).
    const SIG_BYTES: usize =
        Self::N + Self::K * (Self::A + 1) * Self::N + (Self::H + Self::D * Self::WOTS_LEN) * Self::N;
}

/// Emit a parameter-set module plus its marker type.
macro_rules! define_param_set {
    (
        $(#[$doc:meta])*
        feature = $feat:literal,
        mod $mod_name:ident { marker = $marker:ident,
            n = $n:expr, h = $h:expr, d = $d:expr, h_prime = $hp:expr,
            a = $a:expr, k = $k:expr, m = $m:expr, sig = $sig:expr }
    ) => {
        $(#[$doc])*
        #[cfg(feature = $feat)]
        pub mod $mod_name {
            pub use super::common::*;

            /// Security parameter n in bytes.
            pub const N: usize = $n;
            /// Total hypertree height.
            pub const H: usize = $h;
            /// Number of hypertree layers.
            pub const D: usize = $d;
            /// Height of each XMSS tree.
            pub const H_PRIME: usize = $hp;
            /// FORS tree height.
            pub const A: usize = $a;
            /// Number of FORS trees.
            pub const K: usize = $k;
            /// Message digest length in bytes.
            pub const M: usize = $m;
            /// WOTS+ message digit count.
            pub const WOTS_LEN1: usize = 2 * N;
            /// WOTS+ checksum digit count.
            pub const WOTS_LEN2: usize = 3;
            /// Total WOTS+ chain count.
            pub const WOTS_LEN: usize = WOTS_LEN1 + WOTS_LEN2;
            /// Public key size in bytes.
            pub const PK_BYTES: usize = 2 * N;
            /// Secret key size in bytes.
            pub const SK_BYTES: usize = 4 * N;
            /// Signature size in bytes.
            pub const SIG_BYTES: usize = N + K * (A + 1) * N + (H + D * WOTS_LEN) * N;

            const _: () = assert!(SIG_BYTES == $sig);
            const _: () = assert!(H == D * H_PRIME);
            const _: () =
                assert!(M == (K * A).div_ceil(8) + (H - H_PRIME).div_ceil(8) + H_PRIME.div_ceil(8));

            /// Parameter set marker type.
            pub struct $marker;

            impl super::Params for $marker {
                const N: usize = N;
                const H: usize = H;
                const D: usize = D;
                const H_PRIME: usize = H_PRIME;
                const A: usize = A;
                const K: usize = K;
                const M: usize = M;
            }
        }
    };
}

define_param_set!(
    /// SLH-DSA-SHAKE-128s: small signatures, slower signing.
    feature = "slh-dsa-shake-128s",
    mod slh_dsa_shake_128s { marker = Params128s,
        n = 16, h = 63, d = 7, h_prime = 9, a = 12, k = 14, m = 30, sig = 7856 }
);

define_param_set!(
    /// SLH-DSA-SHAKE-128f: fast signing, larger signatures.
    feature = "slh-dsa-shake-128f",
    mod slh_dsa_shake_128f { marker = Params128f,
        n = 16, h = 66, d = 22, h_prime = 3, a = 6, k = 33, m = 34, sig = 17088 }
);

define_param_set!(
    /// SLH-DSA-SHAKE-192s: small signatures, slower signing.
    feature = "slh-dsa-shake-192s",
    mod slh_dsa_shake_192s { marker = Params192s,
        n = 24, h = 63, d = 7, h_prime = 9, a = 14, k = 17, m = 39, sig = 16224 }
);

define_param_set!(
    /// SLH-DSA-SHAKE-192f: fast signing, larger signatures.
    feature = "slh-dsa-shake-192f",
    mod slh_dsa_shake_192f { marker = Params192f,
        n = 24, h = 66, d = 22, h_prime = 3, a = 8, k = 33, m = 42, sig = 35664 }
);

define_param_set!(
    /// SLH-DSA-SHAKE-256s: small signatures, slower signing.
    feature = "slh-dsa-shake-256s",
    mod slh_dsa_shake_256s { marker = Params256s,
        n = 32, h = 64, d = 8, h_prime = 8, a = 14, k = 22, m = 47, sig = 29792 }
);

define_param_set!(
    /// SLH-DSA-SHAKE-256f: fast signing, larger signatures.
    feature = "slh-dsa-shake-256f",
    mod slh_dsa_shake_256f { marker = Params256f,
        n = 32, h = 68, d = 17, h_prime = 4, a = 9, k = 35, m = 49, sig = 49856 }
);

define_param_set!(
    /// SLH-DSA-SHA2-128s: small signatures, slower signing.
    feature = "slh-dsa-sha2-128s",
    mod slh_dsa_sha2_128s { marker = ParamsSha2_128s,
        n = 16, h = 63, d = 7, h_prime = 9, a = 12, k = 14, m = 30, sig = 7856 }
);

define_param_set!(
    /// SLH-DSA-SHA2-128f: fast signing, larger signatures.
    feature = "slh-dsa-sha2-128f",
    mod slh_dsa_sha2_128f { marker = ParamsSha2_128f,
        n = 16, h = 66, d = 22, h_prime = 3, a = 6, k = 33, m = 34, sig = 17088 }
);

define_param_set!(
    /// SLH-DSA-SHA2-192s: small signatures, slower signing.
    feature = "slh-dsa-sha2-192s",
    mod slh_dsa_sha2_192s { marker = ParamsSha2_192s,
        n = 24, h = 63, d = 7, h_prime = 9, a = 14, k = 17, m = 39, sig = 16224 }
);

define_param_set!(
    /// SLH-DSA-SHA2-192f: fast signing, larger signatures.
    feature = "slh-dsa-sha2-192f",
    mod slh_dsa_sha2_192f { marker = ParamsSha2_192f,
        n = 24, h = 66, d = 22, h_prime = 3, a = 8, k = 33, m = 42, sig = 35664 }
);

define_param_set!(
    /// SLH-DSA-SHA2-256s: small signatures, slower signing.
    feature = "slh-dsa-sha2-256s",
    mod slh_dsa_sha2_256s { marker = ParamsSha2_256s,
        n = 32, h = 64, d = 8, h_prime = 8, a = 14, k = 22, m = 47, sig = 29792 }
);

define_param_set!(
    /// SLH-DSA-SHA2-256f: fast signing, larger signatures.
    feature = "slh-dsa-sha2-256f",
    mod slh_dsa_sha2_256f { marker = ParamsSha2_256f,
        n = 32, h = 68, d = 17, h_prime = 4, a = 9, k = 35, m = 49, sig = 49856 }
);

/// Full parameter tuple for one named set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamInfo {
    /// Parameter set name as it appears in FIPS 205 and ACVP vectors.
    pub name: &'static str,
    /// Security parameter n in bytes.
    pub n: usize,
    /// Total hypertree height.
    pub h: usize,
    /// Number of hypertree layers.
    pub d: usize,
    /// Height of each XMSS tree.
    pub h_prime: usize,
    /// FORS tree height.
    pub a: usize,
    /// Number of FORS trees.
    pub k: usize,
    /// Log2 of the Winternitz parameter.
    pub lg_w: usize,
    /// Message digest length in bytes.
    pub m: usize,
    /// NIST security category (1, 3, or 5).
    pub security_category: u8,
    /// Public key size in bytes.
    pub pk_bytes: usize,
    /// Signature size in bytes.
    pub sig_bytes: usize,
}

/// Runtime handle for one of the twelve named parameter sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum ParamSet {
    Shake128s,
    Shake128f,
    Shake192s,
    Shake192f,
    Shake256s,
    Shake256f,
    Sha2_128s,
    Sha2_128f,
    Sha2_192s,
    Sha2_192f,
    Sha2_256s,
    Sha2_256f,
}

macro_rules! param_info {
    ($name:literal, $n:expr, $h:expr, $d:expr, $hp:expr, $a:expr, $k:expr, $m:expr, $sc:expr, $sig:expr) => {
        ParamInfo {
            name: $name,
            n: $n,
            h: $h,
            d: $d,
            h_prime: $hp,
            a: $a,
            k: $k,
            lg_w: 4,
            m: $m,
            security_category: $sc,
            pk_bytes: 2 * $n,
            sig_bytes: $sig,
        }
    };
}

impl ParamSet {
    /// All twelve parameter sets.
    pub const ALL: [ParamSet; 12] = [
        ParamSet::Shake128s,
        ParamSet::Shake128f,
        ParamSet::Shake192s,
        ParamSet::Shake192f,
        ParamSet::Shake256s,
        ParamSet::Shake256f,
        ParamSet::Sha2_128s,
        ParamSet::Sha2_128f,
        ParamSet::Sha2_192s,
        ParamSet::Sha2_192f,
        ParamSet::Sha2_256s,
        ParamSet::Sha2_256f,
    ];

    /// The full parameter tuple for this set.
    #[must_use]
    pub const fn info(self) -> ParamInfo {
        match self {
            ParamSet::Shake128s => {
                param_info!("SLH-DSA-SHAKE-128s", 16, 63, 7, 9, 12, 14, 30, 1, 7856)
            }
            ParamSet::Shake128f => {
                param_info!("SLH-DSA-SHAKE-128f", 16, 66, 22, 3, 6, 33, 34, 1, 17088)
            }
            ParamSet::Shake192s => {
                param_info!("SLH-DSA-SHAKE-192s", 24, 63, 7, 9, 14, 17, 39, 3, 16224)
            }
            ParamSet::Shake192f => {
                param_info!("SLH-DSA-SHAKE-192f", 24, 66, 22, 3, 8, 33, 42, 3, 35664)
            }
            ParamSet::Shake256s => {
                param_info!("SLH-DSA-SHAKE-256s", 32, 64, 8, 8, 14, 22, 47, 5, 29792)
            }
            ParamSet::Shake256f => {
                param_info!("SLH-DSA-SHAKE-256f", 32, 68, 17, 4, 9, 35, 49, 5, 49856)
            }
            ParamSet::Sha2_128s => {
                param_info!("SLH-DSA-SHA2-128s", 16, 63, 7, 9, 12, 14, 30, 1, 7856)
            }
            ParamSet::Sha2_128f => {
                param_info!("SLH-DSA-SHA2-128f", 16, 66, 22, 3, 6, 33, 34, 1, 17088)
            }
            ParamSet::Sha2_192s => {
                param_info!("SLH-DSA-SHA2-192s", 24, 63, 7, 9, 14, 17, 39, 3, 16224)
            }
            ParamSet::Sha2_192f => {
                param_info!("SLH-DSA-SHA2-192f", 24, 66, 22, 3, 8, 33, 42, 3, 35664)
            }
            ParamSet::Sha2_256s => {
                param_info!("SLH-DSA-SHA2-256s", 32, 64, 8, 8, 14, 22, 47, 5, 29792)
            }
            ParamSet::Sha2_256f => {
                param_info!("SLH-DSA-SHA2-256f", 32, 68, 17, 4, 9, 35, 49, 5, 49856)
            }
        }
    }

    /// Look up a parameter set by its FIPS 205 name.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameters`] for unknown names.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|set| set.info().name == name)
            .ok_or(Error::InvalidParameters)
    }

    /// The parameter set name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.info().name
    }

    /// True for the SHAKE family, false for SHA-2.
    #[must_use]
    pub const fn is_shake(self) -> bool {
        matches!(
            self,
            ParamSet::Shake128s
                | ParamSet::Shake128f
                | ParamSet::Shake192s
                | ParamSet::Shake192f
                | ParamSet::Shake256s
                | ParamSet::Shake256f
        )
    }

    /// Secret key size in bytes (4n).
    #[must_use]
    pub const fn sk_bytes(self) -> usize {
        4 * self.info().n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_sizes_match_table() {
        for set in ParamSet::ALL {
            let info = set.info();
            let len = 2 * info.n + 3;
            let expected = info.n * (1 + info.k * (info.a + 1) + info.h + info.d * len);
            assert_eq!(info.sig_bytes, expected, "{}", info.name);
        }
    }

    #[test]
    fn test_digest_length_matches_split() {
        for set in ParamSet::ALL {
            let info = set.info();
            let md = (info.k * info.a).div_ceil(8);
            let tree = (info.h - info.h_prime).div_ceil(8);
            let leaf = info.h_prime.div_ceil(8);
            assert_eq!(info.m, md + tree + leaf, "{}", info.name);
        }
    }

    #[test]
    fn test_hypertree_geometry() {
        for set in ParamSet::ALL {
            let info = set.info();
            assert_eq!(info.h, info.d * info.h_prime, "{}", info.name);
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(
            ParamSet::from_name("SLH-DSA-SHAKE-128f").unwrap(),
            ParamSet::Shake128f
        );
        assert_eq!(
            ParamSet::from_name("SLH-DSA-SHA2-256s").unwrap(),
            ParamSet::Sha2_256s
        );
        assert_eq!(
            ParamSet::from_name("SLH-DSA-SHAKE-512f"),
            Err(sylva_core::Error::InvalidParameters)
        );
    }

    #[test]
    fn test_families() {
        assert!(ParamSet::Shake192s.is_shake());
        assert!(!ParamSet::Sha2_192s.is_shake());
    }

    #[cfg(feature = "slh-dsa-shake-128s")]
    #[test]
    fn test_shake_128s_sizes() {
        use slh_dsa_shake_128s::*;
        assert_eq!(PK_BYTES, 32);
        assert_eq!(SK_BYTES, 64);
        assert_eq!(SIG_BYTES, 7856);
        assert_eq!(WOTS_LEN, 35);
    }

    #[cfg(feature = "slh-dsa-shake-256f")]
    #[test]
    fn test_shake_256f_sizes() {
        use slh_dsa_shake_256f::*;
        assert_eq!(PK_BYTES, 64);
        assert_eq!(SK_BYTES, 128);
        assert_eq!(SIG_BYTES, 49856);
        assert_eq!(WOTS_LEN, 67);
    }

    #[cfg(feature = "slh-dsa-sha2-192f")]
    #[test]
    fn test_sha2_192f_sizes() {
        use slh_dsa_sha2_192f::*;
        assert_eq!(PK_BYTES, 48);
        assert_eq!(SK_BYTES, 96);
        assert_eq!(SIG_BYTES, 35664);
        assert_eq!(WOTS_LEN, 51);
    }
}
