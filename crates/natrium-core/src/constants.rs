//! Primitive sizes exported to the host.
//!
//! Sizes are read from the type-level parameters of the linked crates so a
//! dependency upgrade can never leave a stale hand-written number behind.
//! Ed25519 signature and seed lengths are not exposed by `ring` as
//! constants; they are pinned by the tests in this module against what
//! `ring` actually produces.

use blake2::digest::typenum::Unsigned;
use blake2::digest::OutputSizeUser;
use blake2::Blake2bVarCore;
use chacha20poly1305::aead::{AeadCore, KeySizeUser};
use chacha20poly1305::XChaCha20Poly1305;
use serde::Serialize;

/// XChaCha20-Poly1305 key length (32).
pub const SYMMETRIC_KEYBYTES: usize =
    <<XChaCha20Poly1305 as KeySizeUser>::KeySize as Unsigned>::USIZE;

/// XChaCha20-Poly1305 nonce length (24).
pub const SYMMETRIC_NONCEBYTES: usize =
    <<XChaCha20Poly1305 as AeadCore>::NonceSize as Unsigned>::USIZE;

/// Poly1305 tag length appended to every ciphertext (16).
pub const SYMMETRIC_ABYTES: usize = <<XChaCha20Poly1305 as AeadCore>::TagSize as Unsigned>::USIZE;

/// Ed25519 public key length (32).
pub const SIGN_PUBLICKEYBYTES: usize = ring::signature::ED25519_PUBLIC_KEY_LEN;

/// Ed25519 seed length (32).
pub const SIGN_SEEDBYTES: usize = 32;

/// Ed25519 secret key length: seed followed by public key (64).
pub const SIGN_SECRETKEYBYTES: usize = SIGN_SEEDBYTES + SIGN_PUBLICKEYBYTES;

/// Ed25519 detached signature length (64).
pub const SIGN_BYTES: usize = 64;

/// Largest BLAKE2b digest (64).
pub const HASH_BYTES_MAX: usize = <<Blake2bVarCore as OutputSizeUser>::OutputSize as Unsigned>::USIZE;

/// Smallest digest `generic_hash` will produce (128 bits).
pub const HASH_BYTES_MIN: usize = 16;

/// Longest BLAKE2b key; equal to the maximum digest length.
pub const HASH_KEYBYTES_MAX: usize = HASH_BYTES_MAX;

/// Ceiling on a single `random_bytes` request.
pub const RANDOM_BYTES_MAX: usize = 256;

const _: () = assert!(HASH_BYTES_MIN <= HASH_BYTES_MAX);

/// Snapshot of every exported size, in host export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Constants {
    pub symmetric_keybytes: usize,
    pub symmetric_noncebytes: usize,
    pub symmetric_abytes: usize,
    pub sign_publickeybytes: usize,
    pub sign_secretkeybytes: usize,
    pub sign_bytes: usize,
    pub hash_bytes_min: usize,
    pub hash_bytes_max: usize,
    pub hash_keybytes_max: usize,
    pub random_bytes_max: usize,
}

impl Constants {
    /// The sizes compiled into this build.
    pub const CURRENT: Self = Self {
        symmetric_keybytes: SYMMETRIC_KEYBYTES,
        symmetric_noncebytes: SYMMETRIC_NONCEBYTES,
        symmetric_abytes: SYMMETRIC_ABYTES,
        sign_publickeybytes: SIGN_PUBLICKEYBYTES,
        sign_secretkeybytes: SIGN_SECRETKEYBYTES,
        sign_bytes: SIGN_BYTES,
        hash_bytes_min: HASH_BYTES_MIN,
        hash_bytes_max: HASH_BYTES_MAX,
        hash_keybytes_max: HASH_KEYBYTES_MAX,
        random_bytes_max: RANDOM_BYTES_MAX,
    };
}
