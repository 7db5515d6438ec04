//! Keyed BLAKE2b with caller-chosen digest length.
//!
//! Output matches libsodium's `crypto_generichash`: the digest length is
//! part of the BLAKE2b parameter block (so a 32-byte digest is not a
//! prefix of the 64-byte one), and a non-empty key is zero-padded to one
//! full block and hashed ahead of the message.

use blake2::digest::core_api::{BlockSizeUser, Buffer, UpdateCore, VariableOutputCore};
use blake2::digest::typenum::Unsigned;
use blake2::digest::Output;
use blake2::Blake2bVarCore;
use zeroize::Zeroize;

use crate::constants::{HASH_BYTES_MAX, HASH_BYTES_MIN, HASH_KEYBYTES_MAX};
use crate::context::Natrium;
use crate::error::CryptoError;

const BLOCK_LEN: usize = <<Blake2bVarCore as BlockSizeUser>::BlockSize as Unsigned>::USIZE;

impl Natrium {
    /// Hash `message` under `key`, producing exactly `hash_len` bytes.
    ///
    /// An empty key gives plain (unkeyed) BLAKE2b.
    ///
    /// # Errors
    ///
    /// - [`CryptoError::InvalidHashSize`] if `hash_len` is outside
    ///   [`HASH_BYTES_MIN`]`..=`[`HASH_BYTES_MAX`]
    /// - [`CryptoError::InvalidHashKeySize`] if `key` is longer than
    ///   [`HASH_KEYBYTES_MAX`]
    pub fn generic_hash(
        &self,
        message: &[u8],
        key: &[u8],
        hash_len: i64,
    ) -> Result<Vec<u8>, CryptoError> {
        let out_len = usize::try_from(hash_len)
            .ok()
            .filter(|n| (HASH_BYTES_MIN..=HASH_BYTES_MAX).contains(n))
            .ok_or(CryptoError::InvalidHashSize {
                requested: hash_len,
            })?;
        if key.len() > HASH_KEYBYTES_MAX {
            return Err(CryptoError::InvalidHashKeySize {
                max: HASH_KEYBYTES_MAX,
                actual: key.len(),
            });
        }

        Ok(blake2b(message, key, out_len))
    }
}

/// Lengths must already be validated.
fn blake2b(message: &[u8], key: &[u8], out_len: usize) -> Vec<u8> {
    let mut core = Blake2bVarCore::new_with_params(&[], &[], key.len(), out_len);

    // The key block goes into the lazy buffer rather than straight into the
    // core: for an empty message it must be compressed as the final block.
    let mut buffer = if key.is_empty() {
        Buffer::<Blake2bVarCore>::default()
    } else {
        let mut padded_key = [0u8; BLOCK_LEN];
        padded_key[..key.len()].copy_from_slice(key);
        let buffer = Buffer::<Blake2bVarCore>::new(&padded_key);
        padded_key.zeroize();
        buffer
    };

    buffer.digest_blocks(message, |blocks| core.update_blocks(blocks));

    let mut full = Output::<Blake2bVarCore>::default();
    core.finalize_variable_core(&mut buffer, &mut full);
    wipe(&mut buffer);
    let digest = full[..out_len].to_vec();
    full.as_mut_slice().zeroize();
    // `core` is left holding the chaining value, which after finalization is
    // the untruncated digest; `blake2` gives no way to wipe it.
    digest
}

/// Overwrite the whole block, not just the bytes before the cursor: the
/// last block compressed (the padded key, for an empty message) stays in
/// the buffer after finalization.
fn wipe(buffer: &mut Buffer<Blake2bVarCore>) {
    buffer.reset();
    buffer.pad_with_zeros().as_mut_slice().zeroize();
}
