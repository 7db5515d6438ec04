//! Bounded secure random bytes.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::constants::RANDOM_BYTES_MAX;
use crate::context::Natrium;
use crate::error::CryptoError;

impl Natrium {
    /// Return `count` bytes from the OS CSPRNG.
    ///
    /// The count is range-checked before anything is allocated.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidByteCount`] if `count` is negative or
    /// above [`RANDOM_BYTES_MAX`].
    pub fn random_bytes(&self, count: i64) -> Result<Vec<u8>, CryptoError> {
        let len = usize::try_from(count)
            .ok()
            .filter(|&n| n <= RANDOM_BYTES_MAX)
            .ok_or(CryptoError::InvalidByteCount { requested: count })?;

        let mut out = vec![0u8; len];
        OsRng
            .try_fill_bytes(&mut out)
            .map_err(|e| CryptoError::Initialization(format!("CSPRNG fill failed: {e}")))?;
        Ok(out)
    }
}
