//! Fingerprints of derived graphs.
//!
//! Two runs over the same change set must produce the same graph, and so the
//! same fingerprint. The `graph` command prints it so callers can detect
//! whether a re-described change set still yields the picture they reviewed.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;

/// SHA-256 of a graph's canonical bytes, kept as 64 lowercase hex chars.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn of_bytes(data: &[u8]) -> Self {
        Self(hex::encode(Sha256::digest(data)))
    }

    pub fn hex(&self) -> &str {
        &self.0
    }

    /// Leading 12 hex chars, enough to tell graphs apart in log lines.
    pub fn short(&self) -> &str {
        &self.0[..12]
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", self.short())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short())
    }
}
