//! Ed25519 detached signatures.
//!
//! This module provides:
//! - [`Natrium::sign_keypair`]: generate a keypair from a fresh random seed
//! - [`Natrium::sign_detached`]: sign a message, returning a 64-byte signature
//! - [`Natrium::sign_verify_detached`]: verify, echoing the message back on success
//!
//! # Key format
//!
//! Secret keys are 64 bytes, `seed (32) || public key (32)`, the layout
//! libsodium uses. Ed25519 itself is `ring`'s `PureEd25519`.

use ring::signature::{self, Ed25519KeyPair, KeyPair};
use std::fmt;

use crate::constants::{SIGN_BYTES, SIGN_PUBLICKEYBYTES, SIGN_SECRETKEYBYTES, SIGN_SEEDBYTES};
use crate::context::Natrium;
use crate::error::CryptoError;
use crate::memory::{SecretBuffer, SecretBytes};

/// Ed25519 keypair as returned to the host.
///
/// Intentionally not `Serialize`; `Debug` is masked.
pub struct SignKeyPair {
    /// `seed || public key`, 64 bytes, zeroized on drop.
    pub secret: SecretBuffer,
    /// 32-byte public key.
    pub public: [u8; SIGN_PUBLICKEYBYTES],
}

impl fmt::Debug for SignKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignKeyPair")
            .field("secret", &"***")
            .field("public", &self.public)
            .finish()
    }
}

impl Natrium {
    /// Generate an Ed25519 keypair.
    ///
    /// The seed lives in a [`SecretBytes`] so it is wiped on every exit path.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::KeyGeneration`] if the RNG or `ring` fails.
    pub fn sign_keypair(&self) -> Result<SignKeyPair, CryptoError> {
        let seed = SecretBytes::<SIGN_SEEDBYTES>::random()
            .map_err(|e| CryptoError::KeyGeneration(format!("seed generation failed: {e:?}")))?;

        let kp = Ed25519KeyPair::from_seed_unchecked(seed.expose())
            .map_err(|e| CryptoError::KeyGeneration(format!("Ed25519 key derivation failed: {e}")))?;

        let mut public = [0u8; SIGN_PUBLICKEYBYTES];
        public.copy_from_slice(kp.public_key().as_ref());

        let mut secret = Vec::with_capacity(SIGN_SECRETKEYBYTES);
        secret.extend_from_slice(seed.expose());
        secret.extend_from_slice(&public);

        Ok(SignKeyPair {
            secret: SecretBuffer::from_vec(secret),
            public,
        })
    }

    /// Sign `message` with a 64-byte secret key.
    ///
    /// # Errors
    ///
    /// - [`CryptoError::InvalidSecretKeySize`] if `secret_key` is not 64 bytes
    /// - [`CryptoError::InvalidSecretKey`] if its public half does not match its seed
    pub fn sign_detached(
        &self,
        message: &[u8],
        secret_key: &[u8],
    ) -> Result<[u8; SIGN_BYTES], CryptoError> {
        if secret_key.len() != SIGN_SECRETKEYBYTES {
            return Err(CryptoError::InvalidSecretKeySize {
                expected: SIGN_SECRETKEYBYTES,
                actual: secret_key.len(),
            });
        }
        let (seed, public) = secret_key.split_at(SIGN_SEEDBYTES);

        let kp = Ed25519KeyPair::from_seed_and_public_key(seed, public)
            .map_err(|_| CryptoError::InvalidSecretKey)?;

        let mut sig = [0u8; SIGN_BYTES];
        sig.copy_from_slice(kp.sign(message).as_ref());
        Ok(sig)
    }

    /// Verify a detached signature, returning `message` unchanged on success.
    ///
    /// # Errors
    ///
    /// - [`CryptoError::InvalidPublicKeySize`] if `public_key` is not 32 bytes
    /// - [`CryptoError::IncorrectSignature`] if `signature` is not 64 bytes or
    ///   does not verify
    pub fn sign_verify_detached<'m>(
        &self,
        message: &'m [u8],
        signature: &[u8],
        public_key: &[u8],
    ) -> Result<&'m [u8], CryptoError> {
        if public_key.len() != SIGN_PUBLICKEYBYTES {
            return Err(CryptoError::InvalidPublicKeySize {
                expected: SIGN_PUBLICKEYBYTES,
                actual: public_key.len(),
            });
        }
        if signature.len() != SIGN_BYTES {
            return Err(CryptoError::IncorrectSignature);
        }

        signature::UnparsedPublicKey::new(&signature::ED25519, public_key)
            .verify(message, signature)
            .map_err(|_| CryptoError::IncorrectSignature)?;
        Ok(message)
    }
}
