//! A pre-seeded, concurrency safe pseudo-random number generator.
//!
//! Meant for libraries that need non-deterministic behavior without trusting
//! anyone else to have seeded a generator properly. All functions draw from
//! one process-wide source that is seeded from operating system entropy on
//! first use and re-seeded periodically afterwards. The source cannot be
//! seeded by hand, so no caller can weaken it with a poor seed.
//!
//! The engine lock is held only for the duration of a single draw. No
//! generation function allocates except [`perm`].
//!
//! ```
//! let roll = rnd::intn(6) + 1;
//! assert!((1..=6).contains(&roll));
//!
//! let mut deck: Vec<u8> = (0..52).collect();
//! rnd::shuffle(&mut deck);
//! ```

mod global;
mod handle;

pub use global::{
    calls, exp_float64, float32, float64, int, int31, int31n, int63, int63n, intn, norm_float64,
    perm, read, shuffle, uint32, uint64,
};
pub use handle::Rnd;
pub use rnd_core::source::RESEED_THRESHOLD;
