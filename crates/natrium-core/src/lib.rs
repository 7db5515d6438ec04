//! `natrium-core`: validated Ed25519, XChaCha20-Poly1305 and BLAKE2b for
//! scripting hosts.
//!
//! Every operation is a method on [`Natrium`], obtained from
//! [`Natrium::init`]. Inputs are plain byte slices; each operation checks
//! their lengths against the primitive's exact requirements before the
//! primitive runs. Algorithms come from `ring`, `chacha20poly1305` and
//! `blake2`; nothing here reimplements them.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod constants;
pub mod context;
pub mod error;
pub mod memory;

pub mod hash;
pub mod random;
pub mod signing;
pub mod symmetric;

pub use constants::{
    Constants, HASH_BYTES_MAX, HASH_BYTES_MIN, HASH_KEYBYTES_MAX, RANDOM_BYTES_MAX, SIGN_BYTES,
    SIGN_PUBLICKEYBYTES, SIGN_SECRETKEYBYTES, SYMMETRIC_ABYTES, SYMMETRIC_KEYBYTES,
    SYMMETRIC_NONCEBYTES,
};
pub use context::{Natrium, BACKEND_VERSION};
pub use error::{CryptoError, ErrorKind};
pub use memory::{SecretBuffer, SecretBytes};
pub use signing::SignKeyPair;
