//! XChaCha20-Poly1305 authenticated encryption.
//!
//! This module provides:
//! - [`Natrium::aead_encrypt`]: encrypt and authenticate with caller-supplied nonce
//! - [`Natrium::aead_decrypt`]: verify and decrypt, returning a [`SecretBuffer`]
//!
//! Ciphertexts use the combined layout `ciphertext || tag`, with the
//! 16-byte Poly1305 tag appended. The nonce is NOT included; callers store
//! it alongside and must never reuse one under the same key.
//!
//! Both directions validate nonce and key lengths before the primitive is
//! touched, and report them with the same errors in the same order.

use chacha20poly1305::aead::{Aead, KeyInit, Payload};
use chacha20poly1305::{XChaCha20Poly1305, XNonce};

use crate::constants::{SYMMETRIC_ABYTES, SYMMETRIC_KEYBYTES, SYMMETRIC_NONCEBYTES};
use crate::context::Natrium;
use crate::error::CryptoError;
use crate::memory::SecretBuffer;

/// Check nonce then key, returning a ready cipher.
fn cipher_for(nonce: &[u8], key: &[u8]) -> Result<XChaCha20Poly1305, CryptoError> {
    if nonce.len() != SYMMETRIC_NONCEBYTES {
        return Err(CryptoError::InvalidNonceSize {
            expected: SYMMETRIC_NONCEBYTES,
            actual: nonce.len(),
        });
    }
    if key.len() != SYMMETRIC_KEYBYTES {
        return Err(CryptoError::InvalidKeySize {
            expected: SYMMETRIC_KEYBYTES,
            actual: key.len(),
        });
    }
    XChaCha20Poly1305::new_from_slice(key).map_err(|_| CryptoError::InvalidKeySize {
        expected: SYMMETRIC_KEYBYTES,
        actual: key.len(),
    })
}

impl Natrium {
    /// Encrypt `message`, authenticating it together with `ad`.
    ///
    /// Returns `message.len() + 16` bytes.
    ///
    /// # Errors
    ///
    /// - [`CryptoError::InvalidNonceSize`] if `nonce` is not 24 bytes
    /// - [`CryptoError::InvalidKeySize`] if `key` is not 32 bytes
    /// - [`CryptoError::Encryption`] if the message exceeds the cipher's limit
    pub fn aead_encrypt(
        &self,
        message: &[u8],
        ad: &[u8],
        nonce: &[u8],
        key: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        let cipher = cipher_for(nonce, key)?;
        let ciphertext = cipher
            .encrypt(XNonce::from_slice(nonce), Payload { msg: message, aad: ad })
            .map_err(|_| CryptoError::Encryption)?;
        debug_assert_eq!(
            ciphertext.len(),
            message.len().saturating_add(SYMMETRIC_ABYTES)
        );
        Ok(ciphertext)
    }

    /// Verify and decrypt `ciphertext` produced by [`Natrium::aead_encrypt`].
    ///
    /// # Errors
    ///
    /// - [`CryptoError::InvalidNonceSize`] if `nonce` is not 24 bytes
    /// - [`CryptoError::InvalidKeySize`] if `key` is not 32 bytes
    /// - [`CryptoError::MessageForged`] if the ciphertext is shorter than a
    ///   tag or fails authentication (tampering, wrong key, nonce or AD)
    pub fn aead_decrypt(
        &self,
        ciphertext: &[u8],
        ad: &[u8],
        nonce: &[u8],
        key: &[u8],
    ) -> Result<SecretBuffer, CryptoError> {
        let cipher = cipher_for(nonce, key)?;
        if ciphertext.len() < SYMMETRIC_ABYTES {
            return Err(CryptoError::MessageForged);
        }
        let plaintext = cipher
            .decrypt(
                XNonce::from_slice(nonce),
                Payload {
                    msg: ciphertext,
                    aad: ad,
                },
            )
            .map_err(|_| CryptoError::MessageForged)?;

        Ok(SecretBuffer::from_vec(plaintext))
    }
}
