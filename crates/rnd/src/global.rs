//! Free functions over the process-wide source.

use std::sync::LazyLock;

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use rand_distr::{Distribution, Exp1, StandardNormal};
use rnd_core::entropy::OsEntropy;
use rnd_core::source::SharedSource;

static GLOBAL: LazyLock<SharedSource<OsEntropy>> =
    LazyLock::new(|| SharedSource::new(OsEntropy));

/// Converts a length into re-seed units.
fn units(len: usize) -> u64 {
    u64::try_from(len).unwrap_or(u64::MAX)
}

/// Draws one unit's worth of randomness from the global source.
pub(crate) fn draw<T>(f: impl FnOnce(&mut rand::rngs::StdRng) -> T) -> T {
    GLOBAL.draw(1, f)
}

/// Fills `buf` from the global source, charging one unit per eight bytes.
pub(crate) fn fill(buf: &mut [u8]) {
    GLOBAL.draw(units(buf.len() / 8), |rng| rng.fill_bytes(buf));
}

/// Returns a non-negative pseudo-random 63-bit integer as an `i64`.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn int63() -> i64 {
    draw(|rng| (rng.next_u64() >> 1) as i64)
}

/// Returns a pseudo-random 32-bit value as a `u32`.
#[must_use]
pub fn uint32() -> u32 {
    draw(|rng| rng.next_u32())
}

/// Returns a pseudo-random 64-bit value as a `u64`.
#[must_use]
pub fn uint64() -> u64 {
    draw(|rng| rng.next_u64())
}

/// Returns a non-negative pseudo-random 31-bit integer as an `i32`.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn int31() -> i32 {
    draw(|rng| (rng.next_u32() >> 1) as i32)
}

/// Returns a non-negative pseudo-random `isize`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn int() -> isize {
    // Truncate to the platform width first so the shift clears the sign bit.
    draw(|rng| ((rng.next_u64() as usize) >> 1) as isize)
}

/// Returns, as an `i64`, a non-negative pseudo-random number in `[0, n)`.
///
/// # Panics
///
/// Panics if `n <= 0`. The call is still charged to the re-seed counter.
#[must_use]
pub fn int63n(n: i64) -> i64 {
    draw(|rng| {
        assert!(n > 0, "invalid argument to int63n: bound must be positive, got {n}");
        rng.random_range(0..n)
    })
}

/// Returns, as an `i32`, a non-negative pseudo-random number in `[0, n)`.
///
/// # Panics
///
/// Panics if `n <= 0`. The call is still charged to the re-seed counter.
#[must_use]
pub fn int31n(n: i32) -> i32 {
    draw(|rng| {
        assert!(n > 0, "invalid argument to int31n: bound must be positive, got {n}");
        rng.random_range(0..n)
    })
}

/// Returns, as an `isize`, a non-negative pseudo-random number in `[0, n)`.
///
/// # Panics
///
/// Panics if `n <= 0`. The call is still charged to the re-seed counter.
#[must_use]
pub fn intn(n: isize) -> isize {
    draw(|rng| {
        assert!(n > 0, "invalid argument to intn: bound must be positive, got {n}");
        let bound = i64::try_from(n).unwrap_or(i64::MAX);
        // The sample is below `n`, so it always fits.
        isize::try_from(rng.random_range(0..bound)).unwrap_or_default()
    })
}

/// Returns, as an `f64`, a pseudo-random number in `[0.0, 1.0)`.
#[must_use]
pub fn float64() -> f64 {
    draw(|rng| rng.random::<f64>())
}

/// Returns, as an `f32`, a pseudo-random number in `[0.0, 1.0)`.
#[must_use]
pub fn float32() -> f32 {
    draw(|rng| rng.random::<f32>())
}

/// Returns a pseudo-random permutation of the integers `[0, n)`.
#[must_use]
pub fn perm(n: usize) -> Vec<usize> {
    let mut p: Vec<usize> = (0..n).collect();
    GLOBAL.draw(units(n), |rng| p.shuffle(rng));
    p
}

/// Pseudo-randomizes the order of the elements of `s`.
pub fn shuffle<T>(s: &mut [T]) {
    GLOBAL.draw(units(s.len()), |rng| s.shuffle(rng));
}

/// Fills `buf` with pseudo-random bytes.
///
/// Always writes and returns `buf.len()`; reading randomness cannot fail.
pub fn read(buf: &mut [u8]) -> usize {
    fill(buf);
    buf.len()
}

/// Returns a normally distributed `f64` with mean 0 and standard deviation 1.
///
/// For a different normal distribution, adjust the sample with
/// `norm_float64() * std_dev + mean`.
#[must_use]
pub fn norm_float64() -> f64 {
    draw(|rng| StandardNormal.sample(rng))
}

/// Returns an exponentially distributed `f64` in `(0, f64::MAX]` with rate 1.
///
/// For a different rate, divide the sample: `exp_float64() / rate`.
#[must_use]
pub fn exp_float64() -> f64 {
    draw(|rng| Exp1.sample(rng))
}

/// Returns the approximate number of units drawn from the process-wide
/// source so far.
#[must_use]
pub fn calls() -> u64 {
    GLOBAL.calls()
}
