//! Host-level errors.
//!
//! These abort a call outright, the way a VM raises on a bad argument.
//! Ordinary operation failures (bad sizes, forged messages, bad signatures)
//! are NOT host errors: they come back as `nil, message` values.

use natrium_core::CryptoError;
use thiserror::Error;

/// Errors that abort a host call or prevent the module from opening.
#[derive(Debug, Error)]
pub enum HostError {
    /// An argument is missing or has the wrong dynamic type.
    #[error("bad argument #{position} to '{function}' ({expected} expected, got {got})")]
    BadArgument {
        function: &'static str,
        /// 1-based argument position.
        position: usize,
        expected: &'static str,
        got: &'static str,
    },

    /// No operation is registered under this name.
    #[error("attempt to call unknown function '{0}'")]
    UnknownFunction(String),

    /// The crypto backend failed to initialize; the module cannot open.
    #[error("{0}")]
    Initialization(#[source] CryptoError),

    /// Reading or writing the configuration file failed.
    #[error("configuration I/O failed: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// The configuration could not be serialized.
    #[error("configuration serialization failed: {0}")]
    ConfigFormat(#[from] serde_json::Error),
}
