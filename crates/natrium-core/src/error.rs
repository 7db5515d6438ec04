//! Cryptographic error types for `natrium-core`.
//!
//! The `Display` output of every [`CryptoError`] variant is the exact
//! message a scripting host hands back as the second value of a failed
//! call. Size details are kept in the variant fields so they show up in
//! `Debug` output and logs without changing the host-visible message.

use thiserror::Error;

/// Coarse classification of a [`CryptoError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A length or range check rejected the input before the primitive ran.
    InvalidArgument,
    /// The signing primitive failed to produce a keypair.
    KeyGenerationFailed,
    /// AEAD decryption rejected the ciphertext (forged, tampered, or wrong key/nonce/AD).
    AuthenticationFailed,
    /// A detached signature did not verify.
    VerificationFailed,
    /// The entropy source could not be initialized.
    InitializationFailed,
}

impl ErrorKind {
    /// Stable snake-case name, suitable for structured log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid_argument",
            Self::KeyGenerationFailed => "key_generation_failed",
            Self::AuthenticationFailed => "authentication_failed",
            Self::VerificationFailed => "verification_failed",
            Self::InitializationFailed => "initialization_failed",
        }
    }
}

/// Errors produced by cryptographic operations.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The crypto backend could not be brought up (entropy source unavailable).
    #[error("Failed to initialise crypto backend")]
    Initialization(String),

    /// Requested random byte count is negative or above the ceiling.
    #[error("Invalid number of bytes")]
    InvalidByteCount {
        /// The count the caller asked for.
        requested: i64,
    },

    /// The signing primitive failed to produce a keypair.
    #[error("Key creation failed")]
    KeyGeneration(String),

    /// Requested hash length is outside the supported range.
    #[error("Invalid hash size")]
    InvalidHashSize {
        /// The length the caller asked for.
        requested: i64,
    },

    /// Hash key is longer than the primitive accepts.
    #[error("Invalid hash key size")]
    InvalidHashKeySize {
        /// Maximum accepted key length.
        max: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// AEAD nonce is not exactly the required length.
    #[error("Invalid nonce size")]
    InvalidNonceSize {
        /// Required nonce length.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// AEAD key is not exactly the required length.
    #[error("Invalid key size")]
    InvalidKeySize {
        /// Required key length.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// The AEAD primitive refused to encrypt (message exceeds its limit).
    #[error("Message too long")]
    Encryption,

    /// Authentication tag verification failed. Deliberately carries no
    /// detail: wrong key, wrong nonce, wrong AD and tampering all look alike.
    #[error("Message forged")]
    MessageForged,

    /// Signing secret key is not exactly the required length.
    #[error("Invalid secret key size")]
    InvalidSecretKeySize {
        /// Required secret key length.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// Signing secret key has the right length but its public half does
    /// not belong to its seed.
    #[error("Invalid secret key")]
    InvalidSecretKey,

    /// Verification public key is not exactly the required length.
    #[error("Invalid public key size")]
    InvalidPublicKeySize {
        /// Required public key length.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// Detached signature is malformed or does not match the message.
    #[error("Incorrect signature")]
    IncorrectSignature,
}

impl CryptoError {
    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Initialization(_) => ErrorKind::InitializationFailed,
            Self::KeyGeneration(_) => ErrorKind::KeyGenerationFailed,
            Self::MessageForged => ErrorKind::AuthenticationFailed,
            Self::IncorrectSignature => ErrorKind::VerificationFailed,
            Self::InvalidByteCount { .. }
            | Self::InvalidHashSize { .. }
            | Self::InvalidHashKeySize { .. }
            | Self::InvalidNonceSize { .. }
            | Self::InvalidKeySize { .. }
            | Self::Encryption
            | Self::InvalidSecretKeySize { .. }
            | Self::InvalidSecretKey
            | Self::InvalidPublicKeySize { .. } => ErrorKind::InvalidArgument,
        }
    }
}
