//! Dynamic values exchanged with the scripting host.
//!
//! The host VM only distinguishes nil, integers and byte strings at this
//! surface, so that is all [`Value`] models. Byte strings may carry secret
//! keys or plaintexts: `Debug` prints only their length, and [`Value`]
//! implements [`Zeroize`] so an embedder can wipe a result once it has
//! been copied into the VM.

use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::Zeroize;

/// A single host value.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Value {
    Nil,
    Integer(i64),
    Bytes(Vec<u8>),
}

impl Value {
    /// Host-facing type name, as used in argument errors.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Integer(_) => "number",
            Self::Bytes(_) => "string",
        }
    }

    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Byte string as UTF-8 text, for error messages and version strings.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|b| std::str::from_utf8(b).ok())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("Nil"),
            Self::Integer(n) => write!(f, "Integer({n})"),
            Self::Bytes(b) => write!(f, "Bytes(<{} bytes>)", b.len()),
        }
    }
}

impl Zeroize for Value {
    fn zeroize(&mut self) {
        match self {
            Self::Bytes(b) => b.zeroize(),
            Self::Integer(n) => n.zeroize(),
            Self::Nil => {}
        }
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Self::Bytes(b.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Self::Bytes(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Bytes(s.as_bytes().to_vec())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<usize> for Value {
    /// Sizes beyond `i64::MAX` cannot occur for the exported constants;
    /// saturate rather than wrap if one ever does.
    fn from(n: usize) -> Self {
        Self::Integer(i64::try_from(n).unwrap_or(i64::MAX))
    }
}
