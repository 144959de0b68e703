//! Content Digest Value Object
//!
//! Whole-file SHA-256 digest. Two files are considered byte-identical iff their
//! digests are equal.

use std::fmt;
use std::io::Read;

use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};

/// Content digest value object
///
/// Always stored with the `sha256:` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentDigest(String);

impl ContentDigest {
    /// Prefix for SHA-256 digests
    pub const PREFIX: &'static str = "sha256:";

    /// Wrap a digest string, adding the prefix if missing
    pub fn new(raw: &str) -> Self {
        if raw.starts_with(Self::PREFIX) {
            Self(raw.to_string())
        } else {
            Self(format!("{}{}", Self::PREFIX, raw))
        }
    }

    /// Digest an in-memory buffer
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(format!("{}{:x}", Self::PREFIX, Sha256::digest(bytes)))
    }

    /// Digest everything readable from `reader`, streaming
    pub fn from_reader(mut reader: impl Read) -> std::io::Result<Self> {
        let mut hasher = Sha256::new();
        std::io::copy(&mut reader, &mut hasher)?;
        Ok(Self(format!("{}{:x}", Self::PREFIX, hasher.finalize())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hex part without the prefix
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }

    /// First `len` hex characters, for compact display
    pub fn short(&self, len: usize) -> &str {
        let hex = self.hex();
        &hex[..len.min(hex.len())]
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContentDigest {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for ContentDigest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for ContentDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
