//! Entropy abstraction for seeding.

use std::hash::{BuildHasher, Hasher, RandomState};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::error::EntropyError;

/// Supplier of 64-bit seeds.
///
/// Every call must yield an independently drawn value. Seeds are consumed
/// once and never stored.
pub trait EntropySource: Send + Sync {
    /// Returns a fresh seed.
    fn seed(&self) -> u64;
}

/// Production entropy source backed by the operating system.
///
/// Falls back to [`ambient_seed`] when the OS source cannot be read, so
/// seeding itself never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn seed(&self) -> u64 {
        os_seed().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to ambient entropy");
            ambient_seed()
        })
    }
}

/// Reads 64 bits from the operating system random source.
///
/// # Errors
///
/// Returns `EntropyError::Os` if the platform source is unavailable.
pub fn os_seed() -> Result<u64, EntropyError> {
    OsRng
        .try_next_u64()
        .map_err(|e| EntropyError::Os(e.to_string()))
}

/// Hashes non-reproducible process state into a seed.
///
/// Every `RandomState` is keyed independently, so two calls differ even
/// when the clock reading and thread are the same.
#[must_use]
pub fn ambient_seed() -> u64 {
    let mut hasher = RandomState::new().build_hasher();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos());
    hasher.write_u128(nanos);
    hasher.write(format!("{:?}", std::thread::current().id()).as_bytes());
    hasher.finish()
}
