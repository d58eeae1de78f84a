//! Key type wrapper macro for SLH-DSA variants.
//!
//! Generates the `SigningKey` / `VerificationKey` / `Signature` wrappers
//! and the [`Signer`](sylva_core::Signer) implementation for one parameter
//! set. Each variant module invokes this with its hash suite and the
//! constants from its params module in scope.

macro_rules! define_slh_dsa_variant {
    (
        variant_name: $variant_name:ident,
        hash_type: $hash_type:ty,
        sk_size: $sk_size:expr,
        pk_size: $pk_size:expr,
        sig_size: $sig_size:expr
    ) => {
        use crate::prehash::PreHash;
        use crate::sign::{
            slh_keygen, slh_sign, slh_sign_prehash, slh_verify, slh_verify_prehash, PublicKey,
            SecretKey,
        };

        use rand_core::TryCryptoRng;
        use sylva_core::{Error, Result, Signer};
        use zeroize::{Zeroize, ZeroizeOnDrop};

        #[cfg(not(feature = "std"))]
        use alloc::vec::Vec;

        /// Signing key (secret key).
        pub struct SigningKey(SecretKey<N>);

        impl SigningKey {
            /// Deserialize a signing key from its 4n-byte form.
            ///
            /// Enforces the length and non-zero component invariants.
            pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
                SecretKey::from_bytes(bytes).map(Self)
            }

            /// Serialize the signing key.
            ///
            /// The returned vector contains secret key material and should
            /// be zeroized after use.
            pub fn to_bytes(&self) -> Vec<u8> {
                self.0.to_bytes().as_slice().to_vec()
            }

            /// Get the corresponding verification key.
            pub fn verification_key(&self) -> VerificationKey {
                VerificationKey(PublicKey {
                    pk_seed: self.0.pk_seed,
                    pk_root: self.0.pk_root,
                })
            }

            /// Recompute `PK.root` from `SK.seed` and check it against the
            /// stored root. Imported keys may carry a forged root; this
            /// catches it at the cost of one key generation.
            pub fn validate(&self) -> Result<()> {
                self.0.validate::<$hash_type, WOTS_LEN, H_PRIME, D>()
            }

            /// Sign a message deterministically under a context string.
            pub fn sign(&self, message: &[u8], ctx: &[u8]) -> Result<Signature> {
                slh_sign::<$hash_type, N, WOTS_LEN, WOTS_LEN1, H_PRIME, D, K, A, M>(
                    &self.0, message, ctx, None,
                )
                .map(Signature)
            }

            /// Sign a message with fresh randomness (hedged signing).
            pub fn sign_randomized(
                &self,
                message: &[u8],
                ctx: &[u8],
                rng: &mut impl TryCryptoRng,
            ) -> Result<Signature> {
                let mut addrnd = [0u8; N];
                rng.try_fill_bytes(&mut addrnd)
                    .map_err(|_| Error::RngFailure)?;
                slh_sign::<$hash_type, N, WOTS_LEN, WOTS_LEN1, H_PRIME, D, K, A, M>(
                    &self.0,
                    message,
                    ctx,
                    Some(&addrnd),
                )
                .map(Signature)
            }

            /// Sign a message in pre-hash mode, deterministically.
            pub fn sign_prehash(
                &self,
                message: &[u8],
                ctx: &[u8],
                ph: PreHash,
            ) -> Result<Signature> {
                slh_sign_prehash::<$hash_type, N, WOTS_LEN, WOTS_LEN1, H_PRIME, D, K, A, M>(
                    &self.0, message, ctx, ph, None,
                )
                .map(Signature)
            }
        }

        impl Clone for SigningKey {
            fn clone(&self) -> Self {
                Self(self.0.clone())
            }
        }

        impl Zeroize for SigningKey {
            fn zeroize(&mut self) {
                self.0.sk_seed.zeroize();
                self.0.sk_prf.zeroize();
            }
        }

        impl ZeroizeOnDrop for SigningKey {}

        impl Drop for SigningKey {
            fn drop(&mut self) {
                self.zeroize();
            }
        }

        /// Verification key (public key).
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct VerificationKey(PublicKey<N>);

        impl VerificationKey {
            /// Deserialize a verification key from its 2n-byte form.
            pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
                PublicKey::from_bytes(bytes).map(Self)
            }

            /// Serialize the verification key.
            pub fn to_bytes(&self) -> Vec<u8> {
                self.0.to_bytes()
            }

            /// Verify a pure-mode signature.
            pub fn verify(&self, message: &[u8], signature: &Signature, ctx: &[u8]) -> bool {
                slh_verify::<$hash_type, N, WOTS_LEN, WOTS_LEN1, H_PRIME, D, K, A, M>(
                    &self.0,
                    message,
                    ctx,
                    &signature.0,
                )
            }

            /// Verify a pre-hash-mode signature.
            pub fn verify_prehash(
                &self,
                message: &[u8],
                signature: &Signature,
                ctx: &[u8],
                ph: PreHash,
            ) -> bool {
                slh_verify_prehash::<$hash_type, N, WOTS_LEN, WOTS_LEN1, H_PRIME, D, K, A, M>(
                    &self.0,
                    message,
                    ctx,
                    ph,
                    &signature.0,
                )
            }
        }

        /// Signature.
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct Signature(Vec<u8>);

        impl Signature {
            /// Deserialize a signature; the length must match the
            /// parameter set exactly.
            pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
                if bytes.len() != SIG_BYTES {
                    return Err(Error::InvalidLength {
                        expected: SIG_BYTES,
                        actual: bytes.len(),
                    });
                }
                Ok(Self(bytes.to_vec()))
            }

            /// The signature bytes.
            pub fn to_bytes(&self) -> &[u8] {
                &self.0
            }
        }

        impl AsRef<[u8]> for Signature {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        /// Algorithm marker type.
        pub struct $variant_name;

        impl Signer for $variant_name {
            type SigningKey = SigningKey;
            type VerificationKey = VerificationKey;
            type Signature = Signature;

            const SIGNING_KEY_SIZE: usize = SK_BYTES;
            const VERIFICATION_KEY_SIZE: usize = PK_BYTES;
            const SIGNATURE_SIZE: usize = SIG_BYTES;

            fn keygen(
                rng: &mut impl TryCryptoRng,
            ) -> Result<(Self::SigningKey, Self::VerificationKey)> {
                let (sk, pk) = slh_keygen::<$hash_type, N, WOTS_LEN, H_PRIME, D>(rng)?;
                Ok((SigningKey(sk), VerificationKey(pk)))
            }

            fn sign(sk: &Self::SigningKey, message: &[u8], ctx: &[u8]) -> Result<Self::Signature> {
                sk.sign(message, ctx)
            }

            fn verify(
                pk: &Self::VerificationKey,
                message: &[u8],
                signature: &Self::Signature,
                ctx: &[u8],
            ) -> Result<()> {
                if pk.verify(message, signature, ctx) {
                    Ok(())
                } else {
                    Err(Error::VerificationFailed)
                }
            }
        }

        #[cfg(test)]
        mod tests {
            use super::*;
            use rand::SeedableRng;
            use rand_chacha::ChaCha20Rng;

            #[test]
            fn test_keygen_sign_verify() {
                let mut rng = ChaCha20Rng::seed_from_u64(42);
                let (sk, pk) = $variant_name::keygen(&mut rng).unwrap();

                let message = b"Hello, SLH-DSA!";
                let signature = $variant_name::sign(&sk, message, b"").unwrap();

                assert!($variant_name::verify(&pk, message, &signature, b"").is_ok());
            }

            #[test]
            fn test_key_sizes() {
                assert_eq!($variant_name::SIGNING_KEY_SIZE, $sk_size);
                assert_eq!($variant_name::VERIFICATION_KEY_SIZE, $pk_size);
                assert_eq!($variant_name::SIGNATURE_SIZE, $sig_size);
            }

            #[test]
            fn test_key_serialization() {
                let mut rng = ChaCha20Rng::seed_from_u64(42);
                let (sk, pk) = $variant_name::keygen(&mut rng).unwrap();

                let sk_restored = SigningKey::from_bytes(&sk.to_bytes()).unwrap();
                assert_eq!(sk.verification_key(), sk_restored.verification_key());

                let pk_restored = VerificationKey::from_bytes(&pk.to_bytes()).unwrap();
                assert_eq!(pk, pk_restored);
            }

            #[test]
            fn test_signature_size() {
                let mut rng = ChaCha20Rng::seed_from_u64(42);
                let (sk, _pk) = $variant_name::keygen(&mut rng).unwrap();

                let signature = $variant_name::sign(&sk, b"Test message", b"").unwrap();
                assert_eq!(signature.to_bytes().len(), SIG_BYTES);
            }

            #[test]
            fn test_wrong_message_fails() {
                let mut rng = ChaCha20Rng::seed_from_u64(42);
                let (sk, pk) = $variant_name::keygen(&mut rng).unwrap();

                let signature = $variant_name::sign(&sk, b"Original message", b"").unwrap();
                assert!($variant_name::verify(&pk, b"Wrong message", &signature, b"").is_err());
            }
        }
    };
}

pub(crate) use define_slh_dsa_variant;
