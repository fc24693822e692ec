//! The shared, self re-seeding generator.
//!
//! A `SharedSource` owns one engine behind a mutex and an approximate count
//! of the randomness drawn from it. The mutex is held only for the duration
//! of a single draw; accounting happens afterwards on a lock-free atomic.
//! Once the count passes [`RESEED_THRESHOLD`] the engine is re-seeded from
//! the source's entropy. The count is never reset, so every draw past that
//! point re-seeds again. Concurrent callers may each re-seed; any one of
//! them doing so is enough.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::entropy::EntropySource;

/// Charged units (2^32 - 1) after which every draw re-seeds the engine.
pub const RESEED_THRESHOLD: u64 = (1 << 32) - 1;

/// A concurrency safe generator that seeds and re-seeds itself.
pub struct SharedSource<E: EntropySource> {
    engine: Mutex<StdRng>,
    /// Approximate number of units drawn. Wraps on overflow.
    calls: AtomicU64,
    entropy: E,
}

impl<E: EntropySource> SharedSource<E> {
    /// Creates a source seeded from `entropy`.
    #[must_use]
    pub fn new(entropy: E) -> Self {
        let engine = StdRng::seed_from_u64(entropy.seed());
        tracing::debug!("shared source seeded");
        Self {
            engine: Mutex::new(engine),
            calls: AtomicU64::new(0),
            entropy,
        }
    }

    /// Runs `f` against the engine and charges `units` to the re-seed
    /// counter.
    ///
    /// The engine lock is released before the charge is applied. The charge
    /// is applied even if `f` panics.
    pub fn draw<T>(&self, units: u64, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let _charge = Charge {
            source: self,
            units,
        };
        let mut engine = self.lock();
        f(&mut engine)
    }

    /// Returns a snapshot of the approximate units drawn so far.
    #[must_use]
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    fn charge(&self, units: u64) {
        let total = self
            .calls
            .fetch_add(units, Ordering::Relaxed)
            .wrapping_add(units);
        if total > RESEED_THRESHOLD {
            self.reseed(total);
        }
    }

    fn reseed(&self, calls: u64) {
        let seed = self.entropy.seed();
        *self.lock() = StdRng::seed_from_u64(seed);
        tracing::debug!(calls, "shared source re-seeded");
    }

    // A panic while drawing cannot leave the engine in an invalid state.
    fn lock(&self) -> MutexGuard<'_, StdRng> {
        self.engine.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E: EntropySource> fmt::Debug for SharedSource<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSource")
            .field("calls", &self.calls())
            .finish_non_exhaustive()
    }
}

/// Applies a draw's charge when dropped.
struct Charge<'a, E: EntropySource> {
    source: &'a SharedSource<E>,
    units: u64,
}

impl<E: EntropySource> Drop for Charge<'_, E> {
    fn drop(&mut self) {
        self.source.charge(self.units);
    }
}
