//! Secure memory types for key material and decrypted plaintext.
//!
//! - [`SecretBuffer`]: variable-length, returned for secret keys and plaintexts
//! - [`SecretBytes`]: fixed-size scratch for seeds
//!
//! Both zero their memory on drop, try to `mlock` their pages, and mask
//! their contents in `Debug`/`Display`.

use rand::rngs::OsRng;
use rand::RngCore;
use secrecy::{ExposeSecret, SecretSlice};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::CryptoError;

// ---------------------------------------------------------------------------
// Platform-specific memory locking
// ---------------------------------------------------------------------------

/// Pages currently held by `mlock`, with the number of live regions on each.
///
/// `mlock` does not nest: one `munlock` releases a page no matter how many
/// buffers share it. A page is only unlocked when its last region drops.
static PAGE_LOCKS: Mutex<BTreeMap<usize, usize>> = Mutex::new(BTreeMap::new());

/// First and last page addresses covering `ptr..ptr+len`, and the page size.
fn page_span(ptr: *const u8, len: usize) -> Option<(usize, usize, usize)> {
    let page = platform::page_size();
    let addr = ptr as usize;
    let first = addr.checked_sub(addr.checked_rem(page)?)?;
    let last_byte = addr.checked_add(len.checked_sub(1)?)?;
    let last = last_byte.checked_sub(last_byte.checked_rem(page)?)?;
    Some((first, last, page))
}

fn page_locks() -> MutexGuard<'static, BTreeMap<usize, usize>> {
    PAGE_LOCKS.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Lock every page of the span, or none of them.
fn lock_pages(ptr: *const u8, len: usize) -> bool {
    let Some((first, last, page)) = page_span(ptr, len) else {
        return false;
    };
    let mut counts = page_locks();

    let mut fresh = Vec::new();
    for addr in (first..=last).step_by(page) {
        if counts.contains_key(&addr) {
            continue;
        }
        if platform::try_mlock(addr as *const u8, page) {
            fresh.push(addr);
        } else {
            for &a in &fresh {
                platform::try_munlock(a as *const u8, page);
            }
            return false;
        }
    }

    for addr in (first..=last).step_by(page) {
        let count = counts.entry(addr).or_insert(0);
        *count = count.saturating_add(1);
    }
    true
}

fn unlock_pages(ptr: *const u8, len: usize) {
    let Some((first, last, page)) = page_span(ptr, len) else {
        return;
    };
    let mut counts = page_locks();
    for addr in (first..=last).step_by(page) {
        if let Some(count) = counts.get_mut(&addr) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                counts.remove(&addr);
                platform::try_munlock(addr as *const u8, page);
            }
        }
    }
}

#[cfg(test)]
fn regions_on_page(addr: usize) -> usize {
    page_locks().get(&addr).copied().unwrap_or(0)
}

/// RAII guard that unlocks memory on drop.
///
/// Best-effort: if `mlock` fails (no privilege, `RLIMIT_MEMLOCK` exhausted)
/// the region is simply left unlocked; zeroization does not depend on it.
/// Locks are counted per page, so regions sharing a page keep it locked
/// until the last of them drops. The guard covers the address it was
/// created for; if the owner moves, the old page stays locked until drop.
pub(crate) struct LockedRegion {
    ptr: *const u8,
    len: usize,
    locked: bool,
}

// SAFETY: The pointer is only handed to mlock/munlock, which are
// thread-safe. The data itself is owned and accessed by the enclosing buffer.
unsafe impl Send for LockedRegion {}
unsafe impl Sync for LockedRegion {}

impl LockedRegion {
    /// Callers must keep `ptr..ptr+len` alive for the lifetime of the guard.
    #[must_use]
    pub(crate) fn try_lock(ptr: *const u8, len: usize) -> Self {
        let locked = len == 0 || lock_pages(ptr, len);
        if !locked {
            static WARNED: std::sync::Once = std::sync::Once::new();
            WARNED.call_once(|| {
                tracing::warn!(
                    "mlock failed; secret buffers may be swapped to disk \
                     (consider raising RLIMIT_MEMLOCK)"
                );
            });
        }
        Self { ptr, len, locked }
    }

    const fn unlocked() -> Self {
        Self {
            ptr: std::ptr::null(),
            len: 0,
            locked: false,
        }
    }

    pub(crate) const fn is_locked(&self) -> bool {
        self.locked
    }
}

impl Drop for LockedRegion {
    fn drop(&mut self) {
        if self.locked {
            unlock_pages(self.ptr, self.len);
        }
    }
}

// ---------------------------------------------------------------------------
// SecretBuffer
// ---------------------------------------------------------------------------

/// Variable-length buffer for sensitive bytes.
pub struct SecretBuffer {
    inner: SecretSlice<u8>,
    lock: LockedRegion,
}

impl SecretBuffer {
    /// Copy `data` into a new locked allocation.
    ///
    /// The caller still owns `data` and should wipe it if it was secret.
    #[must_use]
    pub fn new(data: &[u8]) -> Self {
        Self::from_vec(data.to_vec())
    }

    /// Take ownership of `data`.
    ///
    /// A vector with spare capacity would be reallocated on its way into a
    /// boxed slice, freeing the old allocation unwiped; such input is copied
    /// into an exact allocation and the original is zeroized instead.
    #[must_use]
    pub fn from_vec(mut data: Vec<u8>) -> Self {
        if data.capacity() != data.len() {
            let exact = Self::new(&data);
            data.zeroize();
            return exact;
        }
        let inner: SecretSlice<u8> = data.into();
        let exposed = inner.expose_secret();
        let lock = LockedRegion::try_lock(exposed.as_ptr(), exposed.len());
        Self { lock, inner }
    }

    /// Borrow the secret bytes. Keep the borrow short.
    #[must_use]
    pub fn expose(&self) -> &[u8] {
        self.inner.expose_secret()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.expose_secret().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the pages backing this buffer are `mlock`'d.
    #[must_use]
    pub const fn is_mlocked(&self) -> bool {
        self.lock.is_locked()
    }
}

impl Drop for SecretBuffer {
    fn drop(&mut self) {
        // Wipe while the pages are still locked; `lock` is released after.
        self.inner.zeroize();
    }
}

impl fmt::Debug for SecretBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretBuffer(***)")
    }
}

impl fmt::Display for SecretBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretBuffer(***)")
    }
}

// ---------------------------------------------------------------------------
// SecretBytes<N>
// ---------------------------------------------------------------------------

/// Fixed-size secret, wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretBytes<const N: usize> {
    bytes: [u8; N],
    #[zeroize(skip)]
    lock: LockedRegion,
}

impl<const N: usize> SecretBytes<N> {
    /// Move `data` into a new `SecretBytes`.
    ///
    /// The page lock covers the address at construction time and is held
    /// until drop, even if the value moves.
    #[must_use]
    pub fn new(data: [u8; N]) -> Self {
        let mut s = Self {
            bytes: data,
            lock: LockedRegion::unlocked(),
        };
        s.lock = LockedRegion::try_lock(s.bytes.as_ptr(), N);
        s
    }

    /// Fill with bytes from the OS CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Initialization`] if the entropy source fails.
    pub fn random() -> Result<Self, CryptoError> {
        let mut s = Self::new([0u8; N]);
        OsRng
            .try_fill_bytes(&mut s.bytes)
            .map_err(|e| CryptoError::Initialization(format!("CSPRNG fill failed: {e}")))?;
        Ok(s)
    }

    #[must_use]
    pub const fn expose(&self) -> &[u8; N] {
        &self.bytes
    }
}

impl<const N: usize> fmt::Debug for SecretBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes<{N}>(***)")
    }
}

// ---------------------------------------------------------------------------
// Platform-specific implementations
// ---------------------------------------------------------------------------

#[cfg(unix)]
mod platform {
    use std::sync::OnceLock;

    pub(super) fn page_size() -> usize {
        static SIZE: OnceLock<usize> = OnceLock::new();
        *SIZE.get_or_init(|| {
            // SAFETY: sysconf has no preconditions.
            let n = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
            usize::try_from(n)
                .ok()
                .filter(|n| n.is_power_of_two())
                .unwrap_or(4096)
        })
    }

    pub(super) fn try_mlock(ptr: *const u8, len: usize) -> bool {
        if len == 0 {
            return true;
        }
        // SAFETY: mlock only inspects the address range; an invalid range
        // yields ENOMEM rather than undefined behavior.
        unsafe { libc::mlock(ptr.cast(), len) == 0 }
    }

    pub(super) fn try_munlock(ptr: *const u8, len: usize) {
        if len == 0 {
            return;
        }
        // SAFETY: as above; failure is ignored.
        unsafe {
            libc::munlock(ptr.cast(), len);
        }
    }
}

#[cfg(not(unix))]
mod platform {
    pub(super) const fn page_size() -> usize {
        4096
    }

    pub(super) const fn try_mlock(_ptr: *const u8, _len: usize) -> bool {
        false
    }

    pub(super) const fn try_munlock(_ptr: *const u8, _len: usize) {}
}
