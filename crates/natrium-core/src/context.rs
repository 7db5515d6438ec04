//! Library initialization.
//!
//! [`Natrium`] is a capability token: the only way to get one is a
//! successful [`Natrium::init`], and every operation is a method on it, so
//! no primitive can run before the entropy sources have been checked.

use rand::rngs::OsRng;
use rand::RngCore;
use ring::rand::{SecureRandom, SystemRandom};
use zeroize::Zeroize;

use crate::error::CryptoError;

/// Backend version string reported by [`Natrium::version`]: the primitive
/// crates and the release lines this crate is built against.
pub const BACKEND_VERSION: &str = "ring-0.17 chacha20poly1305-0.10 blake2-0.10";

/// Bytes drawn from each entropy source during [`Natrium::init`].
const PROBE_LEN: usize = 32;

/// Handle proving the crypto backend initialized successfully.
///
/// Holds no state; copy it freely and share it across threads.
#[derive(Debug, Clone, Copy)]
pub struct Natrium {
    _initialized: (),
}

impl Natrium {
    /// Bring up the backend.
    ///
    /// Draws a probe from both the OS RNG used for random bytes and
    /// `ring`'s system RNG. A probe that fails or returns all zeros means the
    /// platform has no usable entropy source.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Initialization`] if either source is unusable.
    pub fn init() -> Result<Self, CryptoError> {
        let mut probe = [0u8; PROBE_LEN];

        let os = OsRng.try_fill_bytes(&mut probe);
        let os_ok = os.is_ok() && probe.iter().any(|&b| b != 0);
        probe.zeroize();
        if let Err(e) = os {
            return Err(CryptoError::Initialization(format!("OS RNG unavailable: {e}")));
        }
        if !os_ok {
            return Err(CryptoError::Initialization(
                "OS RNG returned a degenerate probe".into(),
            ));
        }

        let sys = SystemRandom::new().fill(&mut probe);
        let sys_ok = sys.is_ok() && probe.iter().any(|&b| b != 0);
        probe.zeroize();
        if !sys_ok {
            return Err(CryptoError::Initialization(
                "system RNG unavailable or degenerate".into(),
            ));
        }

        tracing::debug!(backend = BACKEND_VERSION, "crypto backend initialized");
        Ok(Self { _initialized: () })
    }

    /// Version string of the crypto backend.
    #[must_use]
    pub const fn version(&self) -> &'static str {
        BACKEND_VERSION
    }
}
