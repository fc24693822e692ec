//! Shared test doubles for the rnd crates.

mod entropy;

pub use entropy::{CountingEntropy, FixedEntropy};
