//! Property-based tests for SLH-DSA using proptest.
//!
//! These tests verify fundamental cryptographic properties:
//! - Roundtrip: sign followed by verify succeeds
//! - Determinism: deterministic signing is byte-stable
//! - Sizes: keys and signatures have the lengths the parameter set fixes
//! - Wrong key / tampered message / tampered signature: verification fails
//!
//! SLH-DSA is much slower than lattice-based schemes, so each property
//! runs only a handful of cases.

use proptest::prelude::*;

/// Arbitrary 32-byte RNG seeds.
fn arb_seed() -> impl Strategy<Value = [u8; 32]> {
    prop::array::uniform32(any::<u8>())
}

/// Arbitrary messages (0-128 bytes).
fn arb_message() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..128)
}

/// Arbitrary context strings (0-16 bytes).
fn arb_ctx() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..16)
}

macro_rules! variant_properties {
    ($mod_name:ident, $variant:ident, $cases:expr) => {
        mod $mod_name {
            use super::*;
            use rand::rngs::StdRng;
            use rand::SeedableRng;
            use sylva_slh_dsa::$variant;
            use sylva_slh_dsa::Signer;

            proptest! {
                #![proptest_config(ProptestConfig::with_cases($cases))]

                /// Roundtrip: sign then verify succeeds, under any context.
                #[test]
                fn roundtrip(seed in arb_seed(), message in arb_message(), ctx in arb_ctx()) {
                    let mut rng = StdRng::from_seed(seed);
                    let (sk, pk) = $variant::keygen(&mut rng).unwrap();

                    let sig = $variant::sign(&sk, &message, &ctx).unwrap();
                    prop_assert!($variant::verify(&pk, &message, &sig, &ctx).is_ok());
                }

                /// Deterministic signing is byte-stable.
                #[test]
                fn determinism(seed in arb_seed(), message in arb_message()) {
                    let mut rng = StdRng::from_seed(seed);
                    let (sk, _) = $variant::keygen(&mut rng).unwrap();

                    let sig1 = $variant::sign(&sk, &message, b"").unwrap();
                    let sig2 = $variant::sign(&sk, &message, b"").unwrap();
                    prop_assert_eq!(sig1, sig2);
                }

                /// Key and signature sizes match the parameter set.
                #[test]
                fn sizes(seed in arb_seed(), message in arb_message()) {
                    let mut rng = StdRng::from_seed(seed);
                    let (sk, pk) = $variant::keygen(&mut rng).unwrap();

                    prop_assert_eq!(sk.to_bytes().len(), $variant::SIGNING_KEY_SIZE);
                    prop_assert_eq!(pk.to_bytes().len(), $variant::VERIFICATION_KEY_SIZE);

                    let sig = $variant::sign(&sk, &message, b"").unwrap();
                    prop_assert_eq!(sig.to_bytes().len(), $variant::SIGNATURE_SIZE);
                }

                /// Verification with a different key pair fails.
                #[test]
                fn wrong_key_fails(seed1 in arb_seed(), seed2 in arb_seed(), message in arb_message()) {
                    prop_assume!(seed1 != seed2);

                    let mut rng1 = StdRng::from_seed(seed1);
                    let mut rng2 = StdRng::from_seed(seed2);
                    let (sk1, _pk1) = $variant::keygen(&mut rng1).unwrap();
                    let (_sk2, pk2) = $variant::keygen(&mut rng2).unwrap();

                    let sig = $variant::sign(&sk1, &message, b"").unwrap();
                    prop_assert!($variant::verify(&pk2, &message, &sig, b"").is_err());
                }

                /// A single flipped message byte fails verification.
                #[test]
                fn tampered_message_fails(seed in arb_seed(), message in arb_message(), flip_pos in 0usize..128) {
                    prop_assume!(!message.is_empty());

                    let mut rng = StdRng::from_seed(seed);
                    let (sk, pk) = $variant::keygen(&mut rng).unwrap();

                    let sig = $variant::sign(&sk, &message, b"").unwrap();

                    let mut tampered = message.clone();
                    let pos = flip_pos % tampered.len();
                    tampered[pos] ^= 0xFF;
                    prop_assert!($variant::verify(&pk, &tampered, &sig, b"").is_err());
                }

                /// A single flipped signature bit fails verification.
                #[test]
                fn tampered_signature_fails(seed in arb_seed(), message in arb_message(), flip in any::<(usize, u8)>()) {
                    let mut rng = StdRng::from_seed(seed);
                    let (sk, pk) = $variant::keygen(&mut rng).unwrap();

                    let sig = $variant::sign(&sk, &message, b"").unwrap();
                    let mut bytes = sig.to_bytes().to_vec();
                    let pos = flip.0 % bytes.len();
                    bytes[pos] ^= 1 << (flip.1 % 8);

                    let tampered = <$variant as Signer>::Signature::from_bytes(&bytes).unwrap();
                    prop_assert!($variant::verify(&pk, &message, &tampered, b"").is_err());
                }

                /// A different context string fails verification.
                #[test]
                fn wrong_context_fails(seed in arb_seed(), message in arb_message(), ctx in arb_ctx()) {
                    let mut rng = StdRng::from_seed(seed);
                    let (sk, pk) = $variant::keygen(&mut rng).unwrap();

                    let sig = $variant::sign(&sk, &message, &ctx).unwrap();

                    let mut other_ctx = ctx.clone();
                    other_ctx.push(0x42);
                    prop_assert!($variant::verify(&pk, &message, &sig, &other_ctx).is_err());
                }
            }
        }
    };
}

#[cfg(feature = "slh-dsa-shake-128f")]
variant_properties!(slh_dsa_shake_128f_props, SlhDsaShake128f, 8);

#[cfg(feature = "slh-dsa-sha2-128f")]
variant_properties!(slh_dsa_sha2_128f_props, SlhDsaSha2_128f, 8);

// The small variants are very slow; run minimal cases.
#[cfg(feature = "slh-dsa-shake-128s")]
variant_properties!(slh_dsa_shake_128s_props, SlhDsaShake128s, 2);

#[cfg(feature = "slh-dsa-shake-256f")]
variant_properties!(slh_dsa_shake_256f_props, SlhDsaShake256f, 4);
