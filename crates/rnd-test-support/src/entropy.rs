//! Test entropy — deterministic `EntropySource` implementations for tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rnd_core::entropy::EntropySource;

/// An entropy source that always returns the same seed. Two sources built
/// from equal seeds produce identical engine output.
#[derive(Debug, Clone, Copy)]
pub struct FixedEntropy(pub u64);

impl EntropySource for FixedEntropy {
    fn seed(&self) -> u64 {
        self.0
    }
}

/// An entropy source that records how many seeds were drawn from it.
///
/// Seeds are the draw index, so each one differs from the last. Clones
/// share the same tally, which lets a test keep a handle after moving the
/// source into a `SharedSource`.
#[derive(Debug, Clone, Default)]
pub struct CountingEntropy {
    draws: Arc<AtomicUsize>,
}

impl CountingEntropy {
    /// Create a new `CountingEntropy` with no draws recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of seeds drawn so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.draws.load(Ordering::SeqCst)
    }
}

impl EntropySource for CountingEntropy {
    fn seed(&self) -> u64 {
        self.draws.fetch_add(1, Ordering::SeqCst) as u64
    }
}
