//! A handle onto the process-wide source for code generic over `RngCore`.

use std::io;

use rand::RngCore;

use crate::global::{draw, fill};

/// Zero-sized handle onto the process-wide source.
///
/// Lets the shared source be passed to anything that accepts an
/// `RngCore`, an `Rng` or an `io::Read`. The handle has no state of its own
/// and offers no way to seed the source.
///
/// ```
/// use rand::Rng;
/// use rand::seq::IndexedRandom;
///
/// let mut rng = rnd::Rnd;
/// let coin = rng.random_bool(0.5);
/// let pick = ["a", "b", "c"].choose(&mut rng);
/// assert!(pick.is_some());
/// # let _ = coin;
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rnd;

impl RngCore for Rnd {
    fn next_u32(&mut self) -> u32 {
        draw(|rng| rng.next_u32())
    }

    fn next_u64(&mut self) -> u64 {
        draw(|rng| rng.next_u64())
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        fill(dst);
    }
}

impl io::Read for Rnd {
    /// Fills `buf` completely. Never fails.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        fill(buf);
        Ok(buf.len())
    }
}
